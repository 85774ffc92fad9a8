use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
}

/// Produced when a document cannot be read as YAML or bound to the template
/// model's structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Produced by the document loader when corpus addressing fails.
///
/// File names are treated as globally unique identifiers within the corpus;
/// zero or multiple matches both signal a corpus integrity problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    NotFound {
        file_name: String,
    },
    Ambiguous {
        file_name: String,
        matches: Vec<PathBuf>,
    },
    Io {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound { file_name } => {
                write!(f, "no file named '{}' found in the corpus", file_name)
            }
            LoadError::Ambiguous { file_name, matches } => {
                write!(
                    f,
                    "file name '{}' is ambiguous: {} matches ({})",
                    file_name,
                    matches.len(),
                    matches
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            LoadError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// A single violated field-level rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub field: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.rule, self.message)
    }
}

/// Result of constraint validation: every violated rule, not just the first.
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into a `Result`, aggregating all violations on failure.
    pub fn into_result(self) -> Result<(), ConstraintError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ConstraintError {
                violations: self.violations,
            })
        }
    }
}

/// Aggregated constraint failure: at least one declared field rule violated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constraint violation(s):", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConstraintError {}

/// Produced when a referenced data connector identifier is not on the
/// allow-list. Always names the offending identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorError {
    pub connector_id: String,
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not a valid connectorId: {}. If a new connector is used and already \
             configured in the portal, add its id to the connector allow-list file",
            self.connector_id
        )
    }
}

impl std::error::Error for ConnectorError {}

/// Combined error type for the per-document checking entry points.
#[derive(Clone, Debug)]
pub enum TemplateError {
    Load(LoadError),
    Parse(ParseError),
    Constraints(ConstraintError),
    Connector(ConnectorError),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Load(e) => write!(f, "load error: {}", e),
            TemplateError::Parse(e) => write!(f, "malformed document: {}", e),
            TemplateError::Constraints(e) => write!(f, "schema validation failed: {}", e),
            TemplateError::Connector(e) => write!(f, "connector validation failed: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<LoadError> for TemplateError {
    fn from(e: LoadError) -> Self {
        TemplateError::Load(e)
    }
}

impl From<ParseError> for TemplateError {
    fn from(e: ParseError) -> Self {
        TemplateError::Parse(e)
    }
}

impl From<ConstraintError> for TemplateError {
    fn from(e: ConstraintError) -> Self {
        TemplateError::Constraints(e)
    }
}

impl From<ConnectorError> for TemplateError {
    fn from(e: ConnectorError) -> Self {
        TemplateError::Connector(e)
    }
}
