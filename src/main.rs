// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print the check report (human line or JSON)
// 4. Exit with proper code:
//      0 = check completed (whatever the selectors said)
//      1 = an input file does not exist, or the URL fetch failed
//      2 = usage errors and anything unexpected
//
// Rust concepts used:
// - async/await: The URL check and the server both wait on the network
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands and errors
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - selector checking logic
mod cli; // src/cli.rs - command-line parsing
mod server; // src/server/ - the static file server

// Import items we need from our modules
use checker::{CheckError, CheckReport, RetryPolicy};
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success
//   Ok(1) = missing input file or failed fetch
//   Err = usage or unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Check {
            file,
            url,
            checks,
            json,
        } => handle_check(file, url, &checks, json).await,
        Commands::Serve { port, file } => {
            server::serve(port, file).await?;
            Ok(0)
        }
    }
}

// Handles the 'check' subcommand
//
// Parameters:
//   file: optional local HTML file to check
//   url: optional URL to fetch and check
//   checks: path to the JSON checks file
//   json: whether to output the full report as JSON
//
// Both inputs may be given; the file is checked first, then the URL.
// The first failure ends the run (no partial results for that source).
async fn handle_check(
    file: Option<PathBuf>,
    url: Option<String>,
    checks: &Path,
    json: bool,
) -> Result<i32> {
    // Giving neither input is a usage error, not a silent no-op
    if file.is_none() && url.is_none() {
        anyhow::bail!("nothing to check: pass --file <html_file> and/or --url <url>");
    }

    if let Some(html_path) = file {
        match checker::check_file(&html_path, checks) {
            Ok(report) => print_report(&report, json)?,
            Err(e) => return report_check_error(e),
        }
    }

    if let Some(url) = url {
        // Three attempts, five seconds apart
        let retry = RetryPolicy::default();
        match checker::check_url(&url, checks, &retry).await {
            Ok(report) => print_report(&report, json)?,
            Err(e) => return report_check_error(e),
        }
    }

    Ok(0)
}

// Prints one report, either as the human-readable line or as JSON
//
// Human mode:
//   index.html results: {
//       "h1": true,
//       ...
//   }
//
// JSON mode serializes the whole report (source + results) for scripts.
fn print_report(report: &CheckReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{} results: {}", report.source, report.to_pretty_json()?);
    }
    Ok(())
}

// Maps a check failure to its exit code
//
// Missing inputs and failed fetches are expected, user-visible outcomes:
// they print a plain message on stdout and exit 1. Anything else (bad
// JSON, bad selector, unreadable file) bubbles up as an unexpected
// error and exits 2 via main.
fn report_check_error(e: CheckError) -> Result<i32> {
    match e {
        CheckError::NotFound(path) => {
            println!("{} does not exist. Exiting.", path.display());
            Ok(1)
        }
        CheckError::Network { url, reason } => {
            println!("could not fetch {}: {}. Exiting.", url, reason);
            Ok(1)
        }
        other => Err(other.into()),
    }
}
