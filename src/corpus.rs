use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::LoadError;

/// One document read from the corpus. Immutable once loaded.
#[derive(Clone, Debug)]
pub struct Document {
    pub file_name: String,
    pub path: PathBuf,
    pub raw: String,
}

/// Load the single corpus file with the given name.
///
/// Searches the corpus tree recursively. File names are addressing keys and
/// must be unique corpus-wide: zero matches is [`LoadError::NotFound`], more
/// than one is [`LoadError::Ambiguous`].
pub fn load(corpus_root: &Path, file_name: &str) -> Result<Document, LoadError> {
    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(corpus_root) {
        let entry = entry.map_err(|e| LoadError::Io {
            path: e
                .path()
                .map(PathBuf::from)
                .unwrap_or_else(|| corpus_root.to_path_buf()),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy() == file_name {
            matches.push(entry.into_path());
        }
    }

    let path = match matches.len() {
        0 => {
            return Err(LoadError::NotFound {
                file_name: file_name.to_string(),
            });
        }
        1 => matches.remove(0),
        _ => {
            return Err(LoadError::Ambiguous {
                file_name: file_name.to_string(),
                matches,
            });
        }
    };

    let raw = fs::read_to_string(&path).map_err(|e| LoadError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(Document {
        file_name: file_name.to_string(),
        path,
        raw,
    })
}
