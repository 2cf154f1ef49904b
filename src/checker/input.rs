// src/checker/input.rs
// =============================================================================
// This module validates and materializes the HTML input.
//
// Two kinds of input:
// - A local file path: we only verify it exists here; the orchestrator
//   reads it later (keeping "does it exist?" separate from "read it")
// - A URL: we fetch it over HTTP with a real, explicit retry policy
//
// About the retry policy:
// - Network requests fail for transient reasons (flaky wifi, sleepy
//   servers), so the URL path retries a fixed number of times with a
//   fixed delay between attempts
// - Both knobs live in RetryPolicy so tests and callers can tune them
//
// Rust concepts:
// - async/await: For network I/O
// - Structs with Default: Configuration with sensible fallbacks
// - Loops with early return: The retry loop
// =============================================================================

use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

use super::error::CheckError;

// How the URL fetch behaves when a request fails
//
// Default: 3 attempts, 5 seconds apart (the classroom-classic delay)
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts (the first try counts as one)
    pub max_attempts: u32,
    /// How long to wait between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(5000),
        }
    }
}

// Verifies that a path exists on the filesystem
//
// Parameters:
//   path: the path to validate
//
// Returns: the same path, unchanged, so callers can chain into a read
//
// This runs before any parsing so a typo'd path fails fast with a
// message naming the path (and exit status 1, handled in main.rs).
pub fn resolve_file(path: &Path) -> Result<&Path, CheckError> {
    if !path.exists() {
        return Err(CheckError::NotFound(path.to_path_buf()));
    }
    Ok(path)
}

// Fetches a URL and returns the response body as a String
//
// Parameters:
//   url: the URL to fetch (validated before any request goes out)
//   retry: how many attempts to make and how long to wait between them
//
// Behavior:
// - Non-2xx responses count as failures (we check pages, not error pages)
// - Each failure short of the attempt limit prints a warning and sleeps
// - Exhausting all attempts yields CheckError::Network
pub async fn fetch_url(url: &str, retry: &RetryPolicy) -> Result<String, CheckError> {
    // Validate up front; a malformed URL will never succeed, so there is
    // no point retrying it
    Url::parse(url).map_err(|e| CheckError::Network {
        url: url.to_string(),
        reason: format!("invalid URL: {}", e),
    })?;

    // Create an HTTP client with a timeout
    // The builder only fails if the TLS backend is broken, which means the
    // binary itself is broken, so .expect() is fine here
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client");

    let mut attempt = 1;
    loop {
        match try_fetch(&client, url).await {
            Ok(body) => return Ok(body),
            Err(reason) => {
                if attempt >= retry.max_attempts {
                    return Err(CheckError::Network {
                        url: url.to_string(),
                        reason,
                    });
                }
                eprintln!(
                    "Warning: attempt {}/{} for {} failed ({}), retrying in {}ms",
                    attempt,
                    retry.max_attempts,
                    url,
                    reason,
                    retry.delay.as_millis()
                );
                tokio::time::sleep(retry.delay).await;
                attempt += 1;
            }
        }
    }
}

// Makes a single GET request and returns the body, or a failure reason
//
// Returns Result<String, String> because at this level we only need the
// reason text; fetch_url wraps it into CheckError::Network at the end.
async fn try_fetch(client: &Client, url: &str) -> Result<String, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.text().await.map_err(|e| e.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why validate the URL before fetching?
//    - Url::parse catches malformed input immediately
//    - Retrying a request that can never be well-formed wastes 10+ seconds
//
// 2. What is Duration?
//    - The standard library's type for spans of time
//    - Duration::from_millis(5000) = 5 seconds
//    - tokio::time::sleep takes a Duration and awaits without blocking
//
// 3. Why a loop instead of recursion for retries?
//    - A loop with a counter is the idiomatic Rust shape
//    - Early `return` exits as soon as we have a body or run out of tries
//
// 4. Why Result<String, String> in try_fetch?
//    - The inner helper only needs "did it work, and if not, why"
//    - The public function owns the decision of when a failure is final
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_existing_file() {
        // Cargo.toml always exists next to the test binary's manifest dir
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let resolved = resolve_file(&manifest).unwrap();
        assert_eq!(resolved, manifest.as_path());
    }

    #[test]
    fn test_resolve_missing_file() {
        let path = PathBuf::from("definitely-not-here-12345.html");
        let err = resolve_file(&path).unwrap_err();
        assert!(err.to_string().contains("definitely-not-here-12345.html"));
        assert!(err.missing_path().is_some());
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_fails_without_retrying() {
        // "not a url" never parses, so this returns immediately
        let policy = RetryPolicy {
            max_attempts: 1,
            delay: Duration::from_millis(1),
        };
        let err = fetch_url("not a url", &policy).await.unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }
}
