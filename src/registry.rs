//! Static vocabularies and scalar-format helpers for the template schema.
//!
//! These are compile-time reference tables; the constraint validator checks
//! open string fields against them.

use regex::Regex;
use std::sync::LazyLock;

/// Severities a scheduled template may declare.
pub static KNOWN_SEVERITIES: &[&str] = &["Informational", "Low", "Medium", "High"];

/// Trigger operators, short form plus the portal's long-form aliases.
pub static KNOWN_TRIGGER_OPERATORS: &[&str] = &[
    "gt",
    "lt",
    "eq",
    "ne",
    "GreaterThan",
    "LessThan",
    "Equal",
    "NotEqual",
];

/// ATT&CK tactic names accepted in the `tactics` list.
pub static KNOWN_TACTICS: &[&str] = &[
    "Reconnaissance",
    "ResourceDevelopment",
    "InitialAccess",
    "Execution",
    "Persistence",
    "PrivilegeEscalation",
    "DefenseEvasion",
    "CredentialAccess",
    "Discovery",
    "LateralMovement",
    "Collection",
    "CommandAndControl",
    "Exfiltration",
    "Impact",
    "ImpairProcessControl",
    "InhibitResponseFunction",
    "PreAttack",
];

/// Template kinds this validator understands.
pub static KNOWN_KINDS: &[&str] = &["Scheduled"];

pub static GUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

pub static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

pub static ISO_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P(?:([0-9]+)D)?(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?)?$").unwrap());

/// Parse an ISO-8601 duration (the `P1DT2H30M` subset the schema allows)
/// into total seconds. Returns `None` for anything outside that subset:
/// the bare `P` / `PT` forms that carry no components, and component values
/// too large to represent in seconds.
pub fn parse_iso_duration_secs(s: &str) -> Option<u64> {
    let caps = ISO_DURATION_RE.captures(s)?;
    if (1..=4).all(|i| caps.get(i).is_none()) {
        return None;
    }
    let mut total: u64 = 0;
    for (group, unit_secs) in [(1, 86_400), (2, 3_600), (3, 60), (4, 1)] {
        if let Some(m) = caps.get(group) {
            let n: u64 = m.as_str().parse().ok()?;
            total = n
                .checked_mul(unit_secs)
                .and_then(|secs| total.checked_add(secs))?;
        }
    }
    Some(total)
}

pub fn is_known(table: &[&str], value: &str) -> bool {
    table.contains(&value)
}
