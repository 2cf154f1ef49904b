// src/checker/mod.rs
// =============================================================================
// This module contains all tag checking logic.
//
// Submodules:
// - input: Validates file paths and fetches URLs (with retries)
// - checks: Loads the JSON checks file into a sorted list of selectors
// - dom: Parses HTML and tests selector presence
// - error: The typed error enum shared by the submodules
//
// This file (mod.rs) is the module root - it composes the pieces into
// the two operations the CLI exposes (check a file, check a URL) and
// defines the report type they both produce.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// - BTreeMap: A map whose keys iterate in sorted order
// =============================================================================

mod checks;
mod dom;
mod error;
mod input;

// Re-export public items from submodules
// This lets users write `checker::RetryPolicy` instead of
// `checker::input::RetryPolicy`
pub use error::CheckError;
pub use input::RetryPolicy;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// The outcome of checking one HTML source against a checks list
//
// `results` maps every selector from the checks file to whether it
// matched anything. BTreeMap keeps the keys sorted, so serialization
// and iteration both come out in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The file path or URL that was checked
    pub source: String,
    /// selector -> "did it match at least one element"
    pub results: BTreeMap<String, bool>,
}

impl CheckReport {
    /// Renders just the result map as JSON with 4-space indentation
    ///
    /// Output shape:
    ///
    /// {
    ///     "h1": true,
    ///     "title": true
    /// }
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.results.serialize(&mut serializer)?;
        // serde_json always produces valid UTF-8
        Ok(String::from_utf8(buf).expect("JSON output is UTF-8"))
    }
}

// Checks a local HTML file against a checks file
//
// Order matters for error reporting:
// 1. The checks file must exist (fail before touching any HTML)
// 2. The HTML file must exist
// 3. Load checks, read HTML, evaluate every selector
//
// Fully synchronous - no partial results, either a complete report or
// an error before any output.
pub fn check_file(html_path: &Path, checks_path: &Path) -> Result<CheckReport, CheckError> {
    input::resolve_file(checks_path)?;
    let html_path = input::resolve_file(html_path)?;

    let checks = checks::load_checks(checks_path)?;

    // Read as bytes and convert lossily: html5ever recovers from broken
    // markup, so broken encodings should not abort the check either
    let bytes = fs::read(html_path).map_err(|e| CheckError::Io {
        path: html_path.to_path_buf(),
        source: e,
    })?;
    let html = String::from_utf8_lossy(&bytes);

    evaluate(&html_path.display().to_string(), &html, &checks)
}

// Checks a fetched URL against a checks file
//
// The awaited fetch is the only suspension point; everything after the
// body arrives is the same synchronous evaluation as check_file.
pub async fn check_url(
    url: &str,
    checks_path: &Path,
    retry: &RetryPolicy,
) -> Result<CheckReport, CheckError> {
    input::resolve_file(checks_path)?;
    let checks = checks::load_checks(checks_path)?;

    let html = input::fetch_url(url, retry).await?;

    evaluate(url, &html, &checks)
}

// Evaluates every selector against one parsed document
//
// The document is parsed once and queried once per selector. Inserting
// into a map deduplicates repeated selectors for free, so the report's
// key set always equals the (deduplicated) checks list.
fn evaluate(source: &str, html: &str, checks: &[String]) -> Result<CheckReport, CheckError> {
    let document = dom::parse_document(html);

    let mut results = BTreeMap::new();
    for selector in checks {
        let present = dom::selector_present(&document, selector)?;
        results.insert(selector.clone(), present);
    }

    Ok(CheckReport {
        source: source.to_string(),
        results,
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BTreeMap instead of HashMap?
//    - BTreeMap iterates keys in sorted order
//    - The report promises lexicographically sorted keys, and BTreeMap
//      gives us that without a separate sort step
//
// 2. Why is check_file synchronous but check_url async?
//    - Reading a local file is fast and simple; no await needed
//    - Fetching a URL waits on the network, which is where async pays off
//    - Keeping check_file sync makes it trivially testable
//
// 3. What is String::from_utf8_lossy?
//    - Converts bytes to a string, replacing invalid UTF-8 with U+FFFD
//    - A tolerant HTML parser deserves tolerant decoding
// -----------------------------------------------------------------------------
