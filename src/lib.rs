//! Spotify Web API client library
//!
//! A small, blocking client for the Spotify Web API using the OAuth 2.0 client
//! credentials flow. Catalog entities can be addressed by Spotify ID or by
//! name; names are resolved to IDs with a search request before the actual
//! call is made.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the `spotify-web-api` binary
//! - `config` - Credentials, endpoints and `.env` loading
//! - `error` - Error type and `Result` alias
//! - `management` - Access token lifecycle
//! - `spotify` - The API client and its resource methods
//! - `types` - Data structures and type definitions
//! - `utils` - Parameter validation and small helpers
//!
//! # Example
//!
//! ```
//! use spotify_web_api::{EntityRef, SpotifyClient, types::SearchType};
//!
//! fn main() -> spotify_web_api::Result<()> {
//!     let mut client = SpotifyClient::new("client-id", "client-secret")?;
//!     let ids = client.resolve_ids(&[EntityRef::name("Converge")], SearchType::Artist)?;
//!     let artists = client.get_artists(&[EntityRef::name("Converge")])?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use spotify::SpotifyClient;
pub use types::{EntityRef, Resolution};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving {} artists...", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command-line front end; library code returns
/// [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to create client: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
