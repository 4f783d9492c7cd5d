//! Glob expansion for batch runs

use std::path::PathBuf;

use ndr_core::{Error, Result};

/// True when `s` contains glob metacharacters
pub fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Expand a glob pattern into the files it matches, sorted
pub async fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries = glob::glob(pattern)
        .map_err(|e| Error::InvalidPattern(format!("glob '{}': {}", pattern, e)))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::Other(e.into()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    // Sort for determinism
    files.sort();

    Ok(files)
}
