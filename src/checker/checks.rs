// src/checker/checks.rs
// =============================================================================
// This module loads the checks file: a JSON array of CSS selector strings.
//
// Example checks.json:
//
//   ["h1", "title", "img[src]"]
//
// We validate the shape at this boundary instead of letting a raw parse
// error (or a surprising type) escape into the rest of the program:
// - Not valid JSON at all          -> Parse error with serde's message
// - Valid JSON but not an array    -> Parse error naming the shape
// - An array with non-string items -> Parse error naming the shape
//
// The returned list is sorted lexicographically, which fixes the key
// order of the final result map.
//
// Rust concepts:
// - serde_json::Value: Dynamically-typed JSON for boundary validation
// - Iterator chains: Mapping and collecting with error handling
// =============================================================================

use std::fs;
use std::path::Path;

use super::error::CheckError;

// Loads and validates the checks file
//
// Parameters:
//   path: path to the JSON checks file
//
// Returns: the selector strings, sorted lexicographically
pub fn load_checks(path: &Path) -> Result<Vec<String>, CheckError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckError::NotFound(path.to_path_buf())
        } else {
            CheckError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    // First parse into a dynamic Value so we can produce a clear
    // message for each way the shape can be wrong
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| CheckError::Parse {
            path: path.to_path_buf(),
            reason: format!("not valid JSON: {}", e),
        })?;

    let array = value.as_array().ok_or_else(|| CheckError::Parse {
        path: path.to_path_buf(),
        reason: "expected a JSON array of selector strings".to_string(),
    })?;

    let mut checks = array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| CheckError::Parse {
                    path: path.to_path_buf(),
                    reason: format!("expected a selector string, found {}", item),
                })
        })
        .collect::<Result<Vec<String>, CheckError>>()?;

    // Sort so the output map's keys come out in a stable order
    checks.sort();

    Ok(checks)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why serde_json::Value instead of Vec<String> directly?
//    - serde_json::from_str::<Vec<String>>() would work, but its error
//      message for "it was an object" is about types, not about what the
//      user should fix
//    - Going through Value lets us say "expected a JSON array" in plain
//      words, and point at the exact offending element
//
// 2. What is ok_or_else?
//    - Converts Option<T> into Result<T, E>
//    - Some(v) -> Ok(v), None -> Err(the closure's error)
//    - The closure only runs in the error case (no wasted allocation)
//
// 3. What does collect::<Result<Vec<_>, _>>() do?
//    - Collecting an iterator of Results into a Result of a Vec
//    - Stops at the first Err and returns it
//    - A tidy way to validate every element with early exit
// -----------------------------------------------------------------------------
