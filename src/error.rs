use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Spotify client.
///
/// Name lookups that find nothing are not errors; they surface as
/// [`crate::types::Resolution::NotFound`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("The SPOTIFY_ID or SPOTIFY_SECRET environment variable is not set")]
    MissingCredentials,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Token request rejected: {status} - {body}")]
    Authentication { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
