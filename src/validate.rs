//! Field-level constraint validation for the scheduled template model.
//!
//! Collects **all** violations, not just the first, so one failed run names
//! everything that needs fixing. The rules are an explicit, enumerable table
//! of (field, rule, predicate) entries; the validator only executes them.

use crate::error::{ValidationResult, Violation};
use crate::registry::*;
use crate::types::ScheduledTemplateModel;

/// Seconds in the shortest allowed query frequency (five minutes).
const MIN_FREQUENCY_SECS: u64 = 5 * 60;
/// Seconds in the longest allowed frequency or period (fourteen days).
const MAX_WINDOW_SECS: u64 = 14 * 86_400;

struct Constraint {
    field: &'static str,
    rule: &'static str,
    check: fn(&ScheduledTemplateModel) -> Option<String>,
}

/// Declared field constraints, evaluated in order.
static CONSTRAINTS: &[Constraint] = &[
    Constraint {
        field: "id",
        rule: "required",
        check: |m| required(&m.id),
    },
    Constraint {
        field: "id",
        rule: "pattern",
        check: |m| {
            let id = m.id.as_deref()?;
            (!GUID_RE.is_match(id)).then(|| format!("'{}' is not a GUID", id))
        },
    },
    Constraint {
        field: "name",
        rule: "required",
        check: |m| required(&m.name),
    },
    Constraint {
        field: "name",
        rule: "range",
        check: |m| {
            let name = m.name.as_deref()?;
            (name.chars().count() > 256)
                .then(|| format!("must be at most 256 characters, got {}", name.chars().count()))
        },
    },
    Constraint {
        field: "description",
        rule: "required",
        check: |m| required(&m.description),
    },
    Constraint {
        field: "severity",
        rule: "required",
        check: |m| required(&m.severity),
    },
    Constraint {
        field: "severity",
        rule: "membership",
        check: |m| {
            let severity = m.severity.as_deref()?;
            (!is_known(KNOWN_SEVERITIES, severity)).then(|| {
                format!(
                    "'{}' is not one of {}",
                    severity,
                    KNOWN_SEVERITIES.join(", ")
                )
            })
        },
    },
    Constraint {
        field: "kind",
        rule: "membership",
        check: |m| {
            let kind = m.kind.as_deref()?;
            (!is_known(KNOWN_KINDS, kind)).then(|| format!("'{}' is not a scheduled kind", kind))
        },
    },
    Constraint {
        field: "query",
        rule: "required",
        check: |m| required(&m.query),
    },
    Constraint {
        field: "queryFrequency",
        rule: "required",
        check: |m| required(&m.query_frequency),
    },
    Constraint {
        field: "queryFrequency",
        rule: "pattern",
        check: |m| duration_format(m.query_frequency.as_deref()?),
    },
    Constraint {
        field: "queryFrequency",
        rule: "range",
        check: |m| {
            let secs = parse_iso_duration_secs(m.query_frequency.as_deref()?)?;
            (!(MIN_FREQUENCY_SECS..=MAX_WINDOW_SECS).contains(&secs))
                .then(|| "must be between PT5M and P14D".to_string())
        },
    },
    Constraint {
        field: "queryPeriod",
        rule: "required",
        check: |m| required(&m.query_period),
    },
    Constraint {
        field: "queryPeriod",
        rule: "pattern",
        check: |m| duration_format(m.query_period.as_deref()?),
    },
    Constraint {
        field: "queryPeriod",
        rule: "range",
        check: |m| {
            let secs = parse_iso_duration_secs(m.query_period.as_deref()?)?;
            (secs > MAX_WINDOW_SECS).then(|| "must be at most P14D".to_string())
        },
    },
    Constraint {
        field: "queryPeriod",
        rule: "cross-field",
        check: |m| {
            let period = parse_iso_duration_secs(m.query_period.as_deref()?)?;
            let frequency = parse_iso_duration_secs(m.query_frequency.as_deref()?)?;
            (period < frequency).then(|| {
                "queryPeriod must be greater than or equal to queryFrequency".to_string()
            })
        },
    },
    Constraint {
        field: "triggerOperator",
        rule: "required",
        check: |m| required(&m.trigger_operator),
    },
    Constraint {
        field: "triggerOperator",
        rule: "membership",
        check: |m| {
            let op = m.trigger_operator.as_deref()?;
            (!is_known(KNOWN_TRIGGER_OPERATORS, op))
                .then(|| format!("'{}' is not one of gt, lt, eq, ne", op))
        },
    },
    Constraint {
        field: "triggerThreshold",
        rule: "required",
        check: |m| {
            m.trigger_threshold
                .is_none()
                .then(|| "is required".to_string())
        },
    },
    Constraint {
        field: "triggerThreshold",
        rule: "range",
        check: |m| {
            let threshold = m.trigger_threshold?;
            (!(0..=10_000).contains(&threshold))
                .then(|| format!("must be between 0 and 10000, got {}", threshold))
        },
    },
    Constraint {
        field: "tactics",
        rule: "membership",
        check: |m| {
            let tactics = m.tactics.as_deref()?;
            let unknown: Vec<&str> = tactics
                .iter()
                .map(String::as_str)
                .filter(|t| !is_known(KNOWN_TACTICS, t))
                .collect();
            (!unknown.is_empty()).then(|| format!("unknown tactic(s): {}", unknown.join(", ")))
        },
    },
    Constraint {
        field: "requiredDataConnectors",
        rule: "required",
        check: |m| {
            m.required_data_connectors
                .is_none()
                .then(|| "is required".to_string())
        },
    },
    Constraint {
        field: "version",
        rule: "required",
        check: |m| required(&m.version),
    },
    Constraint {
        field: "version",
        rule: "pattern",
        check: |m| {
            let version = m.version.as_deref()?;
            (!VERSION_RE.is_match(version))
                .then(|| format!("'{}' is not MAJOR.MINOR.PATCH", version))
        },
    },
];

/// Evaluate every declared constraint against a bound model.
pub fn validate(model: &ScheduledTemplateModel) -> ValidationResult {
    let mut violations = Vec::new();
    for constraint in CONSTRAINTS {
        if let Some(message) = (constraint.check)(model) {
            violations.push(Violation {
                rule: constraint.rule.to_string(),
                field: constraint.field.to_string(),
                message,
            });
        }
    }
    ValidationResult { violations }
}

fn required(value: &Option<String>) -> Option<String> {
    match value.as_deref() {
        None => Some("is required".to_string()),
        Some(s) if s.trim().is_empty() => Some("must not be empty".to_string()),
        Some(_) => None,
    }
}

fn duration_format(value: &str) -> Option<String> {
    (parse_iso_duration_secs(value).is_none())
        .then(|| format!("'{}' is not an ISO-8601 duration like PT1H", value))
}
