//! Configuration management for the Spotify Web API client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Endpoint URLs and the set of known browse categories
//! are process-wide, read-only values that are resolved once on first use.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Explicit values passed to [`crate::spotify::SpotifyClientBuilder`] (highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, fmt, path::PathBuf, sync::LazyLock, time::Duration};

use crate::error::{Error, Result};

pub const SPOTIFY_ID_VAR: &str = "SPOTIFY_ID";
pub const SPOTIFY_SECRET_VAR: &str = "SPOTIFY_SECRET";

const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_REQUEST_DELAY_MS: u64 = 3000;

/// Market used when the caller does not pick one.
pub const DEFAULT_MARKET: &str = "US";

/// Browse category identifiers accepted by the category endpoints.
pub static CATEGORY_IDS: &[&str] = &[
    "toplists",
    "hiphop",
    "pop",
    "country",
    "latin",
    "rock",
    "edm_dance",
    "mood",
    "rnb",
    "roots",
    "chill",
    "workout",
    "party",
    "focus",
    "decades",
    "indie_alt",
    "sleep",
    "jazz",
    "inspirational",
    "classical",
    "romance",
    "kpop",
    "gaming",
    "soul",
    "afro",
    "arab",
    "desi",
    "punk",
    "metal",
    "blues",
    "funk",
    "reggae",
    "regional_mexican",
    "wellness",
    "at_home",
    "summer",
    "holidays",
    "kids_family",
    "travel",
    "cooking_dining",
];

/// Spotify endpoints, resolved once per process.
///
/// `SPOTIFY_API_TOKEN_URL` and `SPOTIFY_API_URL` override the defaults; this is
/// mostly useful to point the client at a local mock server.
pub static ENDPOINTS: LazyLock<Endpoints> = LazyLock::new(Endpoints::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub api_url: String,
}

impl Endpoints {
    fn from_env() -> Self {
        Self {
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

/// Client id and secret used for the client credentials flow.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_ID` and `SPOTIFY_SECRET` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Credentials::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match (non_empty(SPOTIFY_ID_VAR), non_empty(SPOTIFY_SECRET_VAR)) {
            (Some(client_id), Some(client_secret)) => Ok(Self::new(client_id, client_secret)),
            _ => Err(Error::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotify-web-api/.env`
/// - macOS: `~/Library/Application Support/spotify-web-api/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-web-api/.env`
///
/// A missing file is not an error: credentials may come from the shell
/// environment instead. A file that exists but cannot be parsed is reported.
pub fn load_env() -> std::result::Result<(), String> {
    let path = env_file_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-web-api/.env");
    path
}

/// Fixed pause inserted after every API request.
///
/// Reads `SPOTIFY_REQUEST_DELAY_MS`; falls back to three seconds when unset
/// or not a number.
pub fn request_delay() -> Duration {
    let millis = env::var("SPOTIFY_REQUEST_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REQUEST_DELAY_MS);

    Duration::from_millis(millis)
}
