// src/server/mod.rs
// =============================================================================
// This module implements the static file server: one route, one file.
//
// Behavior:
// - GET / returns the configured file's exact bytes (read from disk on
//   every request, no caching)
// - Any other path gets axum's default 404
// - A failed read is a 500 for that request only; the server keeps going
//
// Port selection: --port flag, else the PORT environment variable,
// else 5000 (the classic classroom default).
//
// We use the `axum` crate which:
// - Builds a Router mapping paths to async handler functions
// - Runs on top of tokio's TcpListener via axum::serve
// - Lets handlers return tuples like (StatusCode, body)
//
// Rust concepts:
// - State extraction: The handler receives the configured path via State
// - IntoResponse: Converting tuples into full HTTP responses
// =============================================================================

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;

/// The port used when neither --port nor PORT is given
pub const DEFAULT_PORT: u16 = 5000;

// Decides which port to listen on
//
// Precedence: explicit flag > PORT environment variable > default.
// A PORT value that isn't a number falls through to the default.
//
// This is a pure function (the environment value comes in as a
// parameter) so the precedence rules are easy to unit test.
pub fn resolve_port(flag: Option<u16>, env_port: Option<&str>) -> u16 {
    flag.or_else(|| env_port.and_then(|value| value.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

// Builds the router serving `file` at the root path
//
// Exposed separately from serve() so tests can bind it to an ephemeral
// port without touching PORT or the real 5000.
pub fn router(file: PathBuf) -> Router {
    Router::new().route("/", get(serve_index)).with_state(file)
}

// Starts the server and runs until the process is killed
//
// Parameters:
//   port_flag: the --port value, if the user passed one
//   file: the file to serve at /
pub async fn serve(port_flag: Option<u16>, file: PathBuf) -> Result<()> {
    let port = resolve_port(port_flag, std::env::var("PORT").ok().as_deref());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("🌐 Listening on {}", port);
    println!("📄 Serving {} at /", file.display());

    axum::serve(listener, router(file)).await?;

    Ok(())
}

// Handles GET / by reading the configured file from disk
//
// The file is re-read on every request - edits to it show up on the
// next refresh without restarting the server.
async fn serve_index(State(file): State<PathBuf>) -> Response {
    match tokio::fs::read(&file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            eprintln!("Warning: could not read {}: {}", file.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not read {}", file.display()),
            )
                .into_response()
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is with_state / State?
//    - with_state(file) attaches shared data to the router
//    - Handlers ask for it with the State extractor in their signature
//    - PathBuf is Clone, so axum can hand each request its own copy
//
// 2. Why tokio::fs::read instead of std::fs::read?
//    - std::fs::read would block the async runtime's thread
//    - tokio::fs::read does the blocking work on a side thread pool
//
// 3. Why read on every request?
//    - Simplicity: no cache to invalidate, edits are visible immediately
//    - Exactly what you want while iterating on the page being checked
//
// 4. How does the 404 for other paths happen?
//    - The Router only knows about "/"
//    - axum answers unknown paths with 404 Not Found on its own
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_nothing_given() {
        assert_eq!(resolve_port(None, None), 5000);
    }

    #[test]
    fn test_env_port_wins_over_default() {
        assert_eq!(resolve_port(None, Some("8123")), 8123);
    }

    #[test]
    fn test_flag_wins_over_env() {
        assert_eq!(resolve_port(Some(9000), Some("8123")), 9000);
    }

    #[test]
    fn test_garbage_env_port_falls_back() {
        assert_eq!(resolve_port(None, Some("not-a-port")), 5000);
        assert_eq!(resolve_port(None, Some("")), 5000);
    }

    // Spawns the router on an ephemeral loopback port and returns the
    // address, so each test talks to its own isolated server
    async fn spawn_server(file: std::path::PathBuf) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(file)).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_root_serves_exact_file_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("index.html");
        let content = "<html><body><h1>Served!</h1></body></html>";
        std::fs::write(&file, content).unwrap();

        let addr = spawn_server(file).await;

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let body = response.bytes().await.unwrap();
        assert_eq!(&body[..], content.as_bytes());
    }

    #[tokio::test]
    async fn test_edits_show_up_without_restart() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<p>before</p>").unwrap();

        let addr = spawn_server(file.clone()).await;

        let first = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(first, "<p>before</p>");

        // The file is re-read per request, so the next GET sees the edit
        std::fs::write(&file, "<p>after</p>").unwrap();
        let second = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(second, "<p>after</p>");
    }

    #[tokio::test]
    async fn test_other_paths_are_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<p>home</p>").unwrap();

        let addr = spawn_server(file).await;

        let response = reqwest::get(format!("http://{}/elsewhere", addr))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_unreadable_file_is_a_500_not_a_crash() {
        let dir = tempfile::TempDir::new().unwrap();
        // Never created on disk
        let file = dir.path().join("gone.html");

        let addr = spawn_server(file).await;

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status().as_u16(), 500);

        // The server survives and keeps answering
        let again = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(again.status().as_u16(), 500);
    }
}
