// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "tag-guardian",
    version = "0.1.0",
    about = "A CLI tool to check HTML files and web pages for required tags",
    long_about = "tag-guardian loads a JSON list of CSS selectors and reports, for each one, \
                  whether the selector matches anything in a local HTML file or a fetched URL. \
                  It also ships a tiny static file server for hosting the page being checked."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (check, serve)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an HTML file and/or a URL against a JSON list of CSS selectors
    ///
    /// Example: tag-guardian check --file index.html --checks checks.json
    Check {
        /// Path to a local HTML file to check
        ///
        /// Optional flag: -f, --file
        /// At least one of --file / --url must be given
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URL to fetch and check
        ///
        /// Optional flag: -u, --url
        #[arg(short, long)]
        url: Option<String>,

        /// Path to the JSON checks file (an array of selector strings)
        ///
        /// #[arg(short, long, default_value = ...)] creates -c / --checks
        /// with a default, so plain `tag-guardian check -f page.html`
        /// looks for ./checks.json
        #[arg(short, long, default_value = "checks.json")]
        checks: PathBuf,

        /// Output the full report as JSON instead of the human-readable line
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Serve a single file over HTTP (for hosting the page being checked)
    ///
    /// Example: tag-guardian serve --port 8080 --file index.html
    Serve {
        /// Port to listen on
        ///
        /// When omitted, the PORT environment variable is consulted,
        /// falling back to 5000 (the classic classroom default)
        #[arg(long)]
        port: Option<u16>,

        /// File to serve at the root path
        #[arg(long, default_value = "index.html")]
        file: PathBuf,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<PathBuf> and Option<String>?
//    - Option<T> means the flag may or may not be present
//    - clap leaves the field as None when the user omits the flag
//    - main.rs decides what to do when both --file and --url are None
//
// 2. Why PathBuf instead of String for file paths?
//    - PathBuf is the owned path type in Rust's standard library
//    - It handles platform differences (slashes, etc.) for us
//    - clap knows how to parse command-line values into PathBuf
//
// 3. What does default_value do?
//    - If the user doesn't pass the flag, clap fills in the default
//    - So --checks is effectively always present from main's view
//
// 4. Why not read PORT here?
//    - The server module resolves flag > environment > default itself,
//      which keeps the precedence logic in one testable function
// -----------------------------------------------------------------------------
