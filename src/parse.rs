use crate::error::{ParseError, ParseErrorKind};

/// Parse a YAML detection template into its canonical tree form.
///
/// The canonical tree is a `serde_json::Value` with standard YAML scalar
/// resolution applied: integers, floats, booleans, and nulls become native
/// scalars, everything else stays a string. Structure is preserved exactly —
/// no field is added, renamed, or dropped.
///
/// Does NOT bind to the template model or apply any constraint checking.
pub fn to_canonical_tree(input: &str) -> Result<serde_json::Value, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            line: None,
            column: None,
        });
    }

    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            line: None,
            column: None,
        }
    })?;

    // A detection template is always a mapping at the root.
    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "document root must be a YAML mapping".to_string(),
            line: None,
            column: None,
        });
    }

    Ok(value)
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
