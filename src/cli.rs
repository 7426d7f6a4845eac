//! Command-line interface parsing for Screendex
//!
//! This module defines the clap command tree consumed by the binary and the
//! API-key resolution order (flag, then environment, then built-in key).

use clap::{Parser, Subcommand, ValueEnum};

use crate::data::client::DEFAULT_API_KEY;

/// Environment variable consulted when --api-key is not given
pub const API_KEY_ENV: &str = "SCREENDEX_API_KEY";

/// Screendex - search movies and series, browse cast, bookmark people
#[derive(Parser, Debug)]
#[command(name = "screendex")]
#[command(about = "Search movies and series, browse cast details, and bookmark favorite people")]
#[command(version)]
pub struct Cli {
    /// API key for the remote metadata service
    ///
    /// Falls back to the SCREENDEX_API_KEY environment variable, then to the
    /// built-in shared key.
    #[arg(long, value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the media database by title text
    Search {
        /// Free-text query
        query: String,
        /// What to search
        #[arg(long, value_enum, default_value_t = SearchKind::Both)]
        kind: SearchKind,
    },
    /// Show full details for a title, including the cast
    Title {
        /// Title id (e.g., tt0944947)
        id: String,
    },
    /// Show a person's biography and known-for roles
    Person {
        /// Person id (e.g., nm0000134)
        id: String,
    },
    /// Manage bookmarked people
    #[command(subcommand)]
    Fav(FavCommand),
}

/// Favorites subcommands
#[derive(Subcommand, Debug)]
pub enum FavCommand {
    /// List bookmarked people
    List {
        /// Also fetch each person's biography
        #[arg(long)]
        bios: bool,
    },
    /// Bookmark a person
    Add {
        /// Person id (e.g., nm0000134)
        id: String,
        /// Person's name
        name: String,
    },
    /// Remove a bookmark
    Rm {
        /// Person id (e.g., nm0000134)
        id: String,
    },
}

/// Which search endpoints a search command hits
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Series search only
    Series,
    /// Movie search only
    Movies,
    /// Both searches, run concurrently
    Both,
}

/// Resolves the API key from flag, environment, and built-in default
pub fn resolve_api_key(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env).unwrap_or_else(|| DEFAULT_API_KEY.to_string())
}
