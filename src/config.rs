use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// The shared reference tables: the connector allow-list and the exception
/// token list.
///
/// Built once at process start and passed by reference into the checking
/// entry points. Read-only after construction, so it is safe to share across
/// any number of concurrently validating threads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Connector identifiers known to be registered and available.
    pub valid_connector_ids: BTreeSet<String>,
    /// Tokens that suppress validation by substring match against a
    /// document's text or path.
    pub exempt_template_ids: Vec<String>,
}

impl ValidationConfig {
    pub fn new(
        valid_connector_ids: impl IntoIterator<Item = String>,
        exempt_template_ids: impl IntoIterator<Item = String>,
    ) -> Self {
        ValidationConfig {
            valid_connector_ids: valid_connector_ids.into_iter().collect(),
            exempt_template_ids: exempt_template_ids.into_iter().collect(),
        }
    }

    /// Load both tables from their static files, each a flat JSON array of
    /// strings.
    pub fn from_files(allow_list: &Path, exception_list: &Path) -> Result<Self, LoadError> {
        Ok(ValidationConfig {
            valid_connector_ids: read_string_array(allow_list)?.into_iter().collect(),
            exempt_template_ids: read_string_array(exception_list)?,
        })
    }

    pub fn is_valid_connector(&self, connector_id: &str) -> bool {
        self.valid_connector_ids.contains(connector_id)
    }
}

fn read_string_array(path: &Path) -> Result<Vec<String>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: PathBuf::from(path),
        message: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| LoadError::Io {
        path: PathBuf::from(path),
        message: format!("expected a JSON array of strings: {}", e),
    })
}
