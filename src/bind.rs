use crate::error::{ParseError, ParseErrorKind};
use crate::types::ScheduledTemplateModel;

/// Bind a canonical tree onto the scheduled template model.
///
/// Structural mapping only: object keys to fields by name, sequences to
/// ordered lists of sub-models, scalars to typed leaves. Unknown keys are
/// ignored and missing keys default to absent, so binding never fails for
/// those — strictness lives entirely in [`crate::validate`]. A value that no
/// model field can represent (a scalar where a sequence is required) is the
/// one remaining bind failure.
pub fn bind(tree: serde_json::Value) -> Result<ScheduledTemplateModel, ParseError> {
    serde_json::from_value(tree).map_err(|e| ParseError {
        kind: ParseErrorKind::TypeMismatch,
        message: e.to_string(),
        line: None,
        column: None,
    })
}
