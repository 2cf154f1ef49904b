// src/checker/error.rs
// =============================================================================
// This module defines the error type for the checker.
//
// We use the `thiserror` crate which:
// - Derives std::error::Error for our enum
// - Generates Display impls from #[error("...")] attributes
// - Keeps each failure mode as a distinct, matchable variant
//
// main.rs cares about the distinction: a missing file prints a message
// containing the path and exits with status 1, while everything else is
// reported as a generic error.
//
// Rust concepts:
// - Enums with data: Each variant carries the details of its failure
// - Trait derives: thiserror writes the boilerplate impls for us
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

// Every way a check can fail, as one enum
//
// The Display strings double as the user-facing diagnostics, so each
// variant carries the offending path / selector / URL.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A path given on the command line does not exist
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// A file exists but could not be read
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The checks file is not a JSON array of selector strings
    #[error("invalid checks file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// A selector string in the checks file is not valid CSS
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Fetching a URL failed (after retries)
    #[error("could not fetch {url}: {reason}")]
    Network { url: String, reason: String },
}

impl CheckError {
    /// Returns the missing path if this is a NotFound error
    ///
    /// Used by main.rs to produce the "<path> does not exist. Exiting."
    /// message with exit status 1.
    pub fn missing_path(&self) -> Option<&PathBuf> {
        match self {
            CheckError::NotFound(path) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_path() {
        let err = CheckError::NotFound(PathBuf::from("missing.html"));
        assert!(err.to_string().contains("missing.html"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_missing_path_accessor() {
        let err = CheckError::NotFound(PathBuf::from("checks.json"));
        assert_eq!(err.missing_path(), Some(&PathBuf::from("checks.json")));

        let err = CheckError::Parse {
            path: PathBuf::from("checks.json"),
            reason: "not an array".to_string(),
        };
        assert_eq!(err.missing_path(), None);
    }

    #[test]
    fn test_selector_message_contains_selector() {
        let err = CheckError::Selector {
            selector: "di v??".to_string(),
            reason: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("di v??"));
    }
}
