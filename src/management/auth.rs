use chrono::{DateTime, Duration, Utc};
use reqwest::blocking::Client;
use tracing::debug;

use crate::{
    config::Credentials,
    error::{Error, Result},
    spotify::auth::request_client_credentials_token,
    types::Token,
};

#[derive(Debug, Clone)]
struct IssuedToken {
    token: Token,
    obtained_at: DateTime<Utc>,
}

/// Owns the current bearer token and knows how to replace it.
///
/// Starts out unauthenticated; [`TokenManager::fetch_token`] installs the first
/// token. A failed fetch leaves whatever was there before untouched.
#[derive(Debug)]
pub struct TokenManager {
    http: Client,
    token_url: String,
    credentials: Credentials,
    current: Option<IssuedToken>,
}

impl TokenManager {
    pub fn new(http: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        TokenManager {
            http,
            token_url: token_url.into(),
            credentials,
            current: None,
        }
    }

    /// Requests a fresh token and replaces the current one.
    pub fn fetch_token(&mut self) -> Result<&Token> {
        let obtained_at = Utc::now();
        let token =
            request_client_credentials_token(&self.http, &self.token_url, &self.credentials)?;

        debug!(expires_in = token.expires_in, "installed new access token");
        let issued = self.current.insert(IssuedToken { token, obtained_at });
        Ok(&issued.token)
    }

    /// Whether the token must be refreshed before the next request.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// [`TokenManager::is_expired`] evaluated at `now`.
    ///
    /// Without a token this is always true. A lifetime too large to represent
    /// never runs out.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let Some(issued) = &self.current else {
            return true;
        };

        match i64::try_from(issued.token.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
        {
            Some(lifetime) => now - issued.obtained_at >= lifetime,
            None => false,
        }
    }

    /// Returns an access token, refreshing first if the current one is stale.
    pub fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            self.fetch_token()?;
        }

        self.current
            .as_ref()
            .map(|issued| issued.token.access_token.clone())
            .ok_or_else(|| Error::Authentication {
                status: 0,
                body: "no access token available".to_string(),
            })
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref().map(|issued| &issued.token)
    }

    pub fn obtained_at(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().map(|issued| issued.obtained_at)
    }

    #[cfg(test)]
    pub(crate) fn install(&mut self, token: Token, obtained_at: DateTime<Utc>) {
        self.current = Some(IssuedToken { token, obtained_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TokenManager {
        TokenManager::new(
            Client::new(),
            "http://127.0.0.1:9/api/token",
            Credentials::new("id", "secret"),
        )
    }

    fn token(expires_in: u64) -> Token {
        Token {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_in,
            scope: None,
        }
    }

    #[test]
    fn unauthenticated_manager_is_expired() {
        let mgr = manager();
        assert!(mgr.is_expired());
        assert!(mgr.current_token().is_none());
    }

    #[test]
    fn token_expires_once_lifetime_has_elapsed() {
        let mut mgr = manager();
        let issued = Utc::now();
        mgr.install(token(3600), issued);

        assert!(!mgr.is_expired_at(issued));
        assert!(!mgr.is_expired_at(issued + Duration::seconds(3599)));
        assert!(mgr.is_expired_at(issued + Duration::seconds(3600)));
        assert!(mgr.is_expired_at(issued + Duration::seconds(7200)));
    }

    #[test]
    fn oversized_lifetime_never_expires() {
        let mut mgr = manager();
        let issued = Utc::now();

        mgr.install(token(10_000_000_000_000_000), issued);
        assert!(!mgr.is_expired_at(issued + Duration::days(365)));

        mgr.install(token(u64::MAX), issued);
        assert!(!mgr.is_expired_at(issued + Duration::days(365)));
    }

    #[test]
    fn failed_fetch_keeps_previous_token() {
        let mut mgr = manager();
        let issued = Utc::now();
        mgr.install(token(3600), issued);

        // nothing listens on the discard port
        assert!(mgr.fetch_token().is_err());
        assert_eq!(mgr.current_token(), Some(&token(3600)));
        assert_eq!(mgr.obtained_at(), Some(issued));
    }
}
