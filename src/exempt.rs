use std::path::Path;

/// Whether a document is on the known-exception list.
///
/// True iff any exception token is a substring of the raw document text OR
/// of its file path. The match is deliberately unanchored — tokens are
/// ticket-style identifiers that may appear anywhere in content or in a path
/// segment — so a coincidental occurrence elsewhere will also suppress the
/// document. Best-effort suppression is the intent; callers must treat an
/// exempt document as trivially passing and skip all further validation.
pub fn is_exempt(raw: &str, path: &Path, exempt_ids: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    exempt_ids
        .iter()
        .any(|token| raw.contains(token.as_str()) || path_str.contains(token.as_str()))
}
