//! Codebook snapshot loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use codebook_types::CodeEntry;

/// Errors produced while loading a codebook snapshot.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot was not a JSON array of codebook entries.
    #[error("invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a codebook snapshot from a JSON array file.
///
/// Entries come back in file order, duplicates included. A missing or
/// mistyped field anywhere in the array fails the whole load.
pub fn load_codebook(path: &Path) -> Result<Vec<CodeEntry>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CodeEntry> =
        serde_json::from_str(&raw).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = entries.len(), "snapshot loaded");
    Ok(entries)
}
