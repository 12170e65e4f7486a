// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with Rust structs
// and enums, and clap generates the parsing code (plus --help, --version).
//
// Two subcommands:
// - search:  full search - repositories plus the profile panel
// - profile: profile only, with fetch errors surfaced directly
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "repo-scout",
    version = "0.1.0",
    about = "Search a GitHub user's public repositories and profile",
    long_about = "repo-scout looks up a GitHub user and lists their public repositories, \
                  most recently updated first, together with a profile summary. \
                  Set GITHUB_TOKEN for authenticated requests."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a user's public repositories and show their profile
    ///
    /// Example: repo-scout search octocat --language Rust
    Search {
        /// GitHub username to search for
        handle: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Only show repositories whose name contains this text
        #[arg(long)]
        name: Option<String>,

        /// Only show repositories with this primary language
        #[arg(long)]
        language: Option<String>,
    },

    /// Show a user's profile only
    ///
    /// Example: repo-scout profile octocat
    Profile {
        /// GitHub username to look up
        handle: String,

        /// Output the profile in JSON format
        #[arg(long)]
        json: bool,
    },
}
