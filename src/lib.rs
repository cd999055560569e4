//! Podcast search library
//!
//! Searches Spotify's catalog for podcast shows across several regional
//! markets and lists a show's episodes page by page. The crate exposes the
//! Spotify client used by both the web application and the command line.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and HTML views of the web application
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded once from the environment and `.env`
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client (token, search, episodes)
//! - `types` - Data structures and type definitions
//! - `utils` - Small helpers for paging and HTML escaping
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use podsearch::{config::{self, Config}, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> podsearch::Res<()> {
//!     config::load_env().await?;
//!     let spotify = SpotifyClient::new(Arc::new(Config::from_env()))?;
//!     let results = spotify.search("comedy").await;
//!     println!("{} shows", results.shows.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for process-level operations (startup, server loop).
///
/// Spotify calls use their own typed errors; this boxed form only shows up
/// where unrelated failures (address parsing, socket binding, TLS setup) meet.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o` to stdout.
///
/// ```
/// info!("Serving podsearch on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green checkmark to stdout.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for command-line fatal paths; the Spotify client and the web
/// handlers never call it.
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr without exiting.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
