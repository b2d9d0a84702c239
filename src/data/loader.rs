use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::parser::Grammar;

/// Errors raised while reading bank, grammar or translation files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a question bank text file.
pub fn load_bank<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "loaded question bank");
    Ok(text)
}

/// Read a grammar override. Missing fields keep their Arabic defaults.
pub fn load_grammar<P: AsRef<Path>>(path: P) -> Result<Grammar, LoadError> {
    read_json(path.as_ref())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded json");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_bank("/nonexistent/bank.txt").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/bank.txt"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let path = std::env::temp_dir().join(format!("grammar-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = load_grammar(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, LoadError::Json { .. }));
    }
}
