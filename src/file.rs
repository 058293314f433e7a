//! Reading candidate files from disk.
//!
//! A missing file is the normal case (most projects have no `.env.prod.local`)
//! and is never an error. Files that exist but cannot be read or decoded as
//! UTF-8 are logged and then treated exactly like missing ones, so a broken
//! override file can never abort startup.

use std::path::Path;

use tracing::{debug, warn};

use crate::EnvMap;
use crate::error::EnvLayerError;
use crate::parse;
use crate::types::Entry;

/// Read a file as UTF-8 text.
///
/// Returns `Ok(None)` if the file does not exist. Every other I/O failure,
/// including invalid UTF-8, is returned as [`EnvLayerError::IoError`].
pub fn read_file(path: &Path) -> Result<Option<String>, EnvLayerError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EnvLayerError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Read and parse a file into entries, in line order.
///
/// `None` means the file contributed nothing because it is missing or
/// unreadable. `Some(vec![])` means it was read but held no valid lines.
pub fn read_entries(path: &Path) -> Option<Vec<Entry>> {
    match read_file(path) {
        Ok(Some(content)) => {
            let entries = parse::parse_str(&content);
            debug!(path = %path.display(), entries = entries.len(), "read env file");
            Some(entries)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("skipping env file: {e}");
            None
        }
    }
}

/// Read a single file into a map. Later lines win over earlier ones for the
/// same key. Missing or unreadable files give an empty map.
pub fn read_entry_map(path: &Path) -> EnvMap {
    read_entries(path)
        .unwrap_or_default()
        .into_iter()
        .map(|e| (e.key, e.value))
        .collect()
}
