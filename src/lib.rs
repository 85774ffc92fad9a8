//! Validation for scheduled detection rule templates.
//!
//! Detection templates are YAML documents describing scheduled
//! security-analytics rules (query, schedule, required data connectors).
//! Before a template is accepted into a content repository it must satisfy a
//! structural schema and reference only known data connectors. This crate
//! provides that pipeline:
//!
//! ```text
//! load(root, name) → Document → to_canonical_tree(yaml) → tree
//!                             → bind(tree) → ScheduledTemplateModel
//!                             → validate(&model)            → ValidationResult
//!                             → check_connector_ids(&model) → Result
//! ```
//!
//! Documents on the exception list (matched by substring against text or
//! path) skip validation entirely and report success.
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! id: 3f8d6f4e-9f3b-4a2d-8c1e-5b7a9d2e4c6f
//! name: Sign-ins from unfamiliar locations
//! description: Detects interactive sign-ins from locations not seen recently.
//! severity: Medium
//! requiredDataConnectors:
//!   - connectorId: AzureActiveDirectory
//!     dataTypes:
//!       - SigninLogs
//! queryFrequency: PT1H
//! queryPeriod: P1D
//! triggerOperator: gt
//! triggerThreshold: 0
//! tactics:
//!   - InitialAccess
//! query: SigninLogs | where ResultType == 0
//! version: 1.0.0
//! "#;
//!
//! let tree = templint::to_canonical_tree(yaml).expect("well-formed YAML");
//! let model = templint::bind(tree).expect("bindable tree");
//! assert!(templint::validate(&model).is_valid());
//! ```

pub mod bind;
pub mod config;
pub mod connectors;
pub mod corpus;
pub mod error;
pub mod exempt;
pub mod parse;
pub mod types;
pub mod validate;

pub(crate) mod registry;

pub use config::ValidationConfig;
pub use corpus::Document;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use bind::bind;
pub use connectors::check_connector_ids;
pub use exempt::is_exempt;
pub use parse::to_canonical_tree;
pub use validate::validate;

use std::path::Path;

/// Outcome of a per-document check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The document matched the exception list; validation was skipped.
    Exempt,
    /// The document was validated against the selected rule category.
    Validated,
}

/// Which rule category to run against a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCheck {
    /// Field-level schema constraints.
    Structure,
    /// Connector identifiers against the allow-list.
    ConnectorIds,
}

/// Run one rule category against one corpus document.
///
/// Composes loader → exception gate → normalizer → binder → check. Exempt
/// documents short-circuit as passing before their content is inspected.
///
/// # Errors
///
/// Any stage failure surfaces directly as the document's failed outcome:
/// corpus addressing ([`LoadError`]), malformed YAML or unbinding values
/// ([`ParseError`]), aggregated field violations ([`ConstraintError`]), or an
/// unknown connector identifier ([`ConnectorError`]).
pub fn check_template(
    corpus_root: &Path,
    file_name: &str,
    config: &ValidationConfig,
    check: RuleCheck,
) -> Result<Outcome, TemplateError> {
    let doc = corpus::load(corpus_root, file_name)?;

    if exempt::is_exempt(&doc.raw, &doc.path, &config.exempt_template_ids) {
        return Ok(Outcome::Exempt);
    }

    let tree = parse::to_canonical_tree(&doc.raw)?;
    let model = bind::bind(tree)?;

    match check {
        RuleCheck::Structure => validate::validate(&model).into_result()?,
        RuleCheck::ConnectorIds => connectors::check_connector_ids(&model, config)?,
    }

    Ok(Outcome::Validated)
}

/// Run both rule categories against one corpus document.
pub fn validate_template(
    corpus_root: &Path,
    file_name: &str,
    config: &ValidationConfig,
) -> Result<Outcome, TemplateError> {
    match check_template(corpus_root, file_name, config, RuleCheck::Structure)? {
        Outcome::Exempt => Ok(Outcome::Exempt),
        Outcome::Validated => check_template(corpus_root, file_name, config, RuleCheck::ConnectorIds),
    }
}
