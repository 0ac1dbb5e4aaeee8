use std::{thread, time::Duration};

use reqwest::{Url, blocking::Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{self, Credentials, DEFAULT_MARKET},
    error::{Error, Result},
    management::TokenManager,
    types::{EntityRef, Resolution, SearchType, Token},
};

const USER_AGENT: &str = concat!("spotify-web-api/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for a single request.
pub type Params<'a> = [(&'a str, String)];

/// Blocking Spotify Web API client using the client credentials flow.
///
/// Every request goes through [`SpotifyClient::query`], which refreshes the
/// access token when it has expired and then sleeps for a fixed delay once the
/// response is in. Methods that may refresh the token take `&mut self`.
#[derive(Debug)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    request_delay: Duration,
    tokens: TokenManager,
}

impl SpotifyClient {
    /// Builds a client from `SPOTIFY_ID` / `SPOTIFY_SECRET` and fetches a token.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Builds a client from explicit credentials and fetches a token.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::builder()
            .credentials(Credentials::new(client_id, client_secret))
            .build()
    }

    pub fn builder() -> SpotifyClientBuilder {
        SpotifyClientBuilder::default()
    }

    /// Issues `GET <api_url>/<resource_path>` and decodes the body as JSON.
    ///
    /// The decoded body is returned whatever the status code, so an error
    /// payload from Spotify comes back as data for the caller to inspect.
    ///
    /// # Example
    /// ```no_run
    /// # use spotify_web_api::SpotifyClient;
    /// # fn example() -> spotify_web_api::Result<()> {
    /// let mut client = SpotifyClient::from_env()?;
    /// let body = client.query(
    ///     "search",
    ///     &[("q", "converge".to_string()), ("type", "artist".to_string())],
    /// )?;
    /// println!("{}", body["artists"]["items"][0]["name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn query(&mut self, resource_path: &str, params: &Params<'_>) -> Result<Value> {
        let url = self.resource_url(resource_path, &[])?;
        self.get(url, params)
    }

    /// Appends `path_segments` (in order) to `resource_path` and runs the request
    /// like [`SpotifyClient::query`].
    ///
    /// Each segment is percent-encoded on its own, so an ID holding `/`, `?` or
    /// `#` stays inside its segment.
    pub fn path_query(
        &mut self,
        resource_path: &str,
        params: &Params<'_>,
        path_segments: &[&str],
    ) -> Result<Value> {
        let url = self.resource_url(resource_path, path_segments)?;
        self.get(url, params)
    }

    /// Resolves each reference to a catalog ID, one result per input.
    ///
    /// IDs pass through untouched. Names are looked up with a search restricted
    /// to `entity_type` and take the first hit's ID.
    pub fn resolve_ids(
        &mut self,
        refs: &[EntityRef],
        entity_type: SearchType,
    ) -> Result<Vec<Resolution>> {
        let mut resolved = Vec::with_capacity(refs.len());

        for entity in refs {
            let resolution = match entity {
                EntityRef::Id(id) => Resolution::Resolved(id.clone()),
                EntityRef::Name(name) if name.trim().is_empty() => {
                    warn!(%entity_type, "blank name cannot be searched");
                    Resolution::NotFound(name.clone())
                }
                EntityRef::Name(name) => match self.lookup_id(name, entity_type)? {
                    Some(id) => Resolution::Resolved(id),
                    None => {
                        warn!(name = %name, %entity_type, "no catalog match");
                        Resolution::NotFound(name.clone())
                    }
                },
            };
            resolved.push(resolution);
        }

        Ok(resolved)
    }

    /// Single-item form of [`SpotifyClient::resolve_ids`]; `None` means not found.
    pub fn resolve_id(
        &mut self,
        entity: &EntityRef,
        entity_type: SearchType,
    ) -> Result<Option<String>> {
        let resolved = self.resolve_ids(std::slice::from_ref(entity), entity_type)?;
        Ok(resolved.into_iter().next().and_then(Resolution::into_id))
    }

    pub fn token(&self) -> Option<&Token> {
        self.tokens.current_token()
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// IDs for the references that resolved; unresolved names are dropped.
    pub(crate) fn found_ids(
        &mut self,
        refs: &[EntityRef],
        entity_type: SearchType,
    ) -> Result<Vec<String>> {
        Ok(self
            .resolve_ids(refs, entity_type)?
            .into_iter()
            .filter_map(Resolution::into_id)
            .collect())
    }

    fn lookup_id(&mut self, name: &str, entity_type: SearchType) -> Result<Option<String>> {
        let results = self.search(name, entity_type, 1, DEFAULT_MARKET, 0)?;

        Ok(results
            .get(entity_type.result_key())
            .and_then(|group| group.get("items"))
            .and_then(|items| items.get(0))
            .and_then(|first| first.get("id"))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn get(&mut self, url: Url, params: &Params<'_>) -> Result<Value> {
        let token = self.tokens.get_valid_token()?;

        debug!(%url, params = params.len(), "GET");
        let response = self.http.get(url).bearer_auth(token).query(params).send();
        thread::sleep(self.request_delay);

        let body = response?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn resource_url(&self, resource_path: &str, path_segments: &[&str]) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            resource_path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !path_segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| Error::InvalidUrl(format!("{}: cannot take path segments", raw)))?
                .pop_if_empty()
                .extend(path_segments);
        }

        Ok(url)
    }
}

/// Builder for [`SpotifyClient`].
///
/// Unset values fall back to the environment and [`config::ENDPOINTS`].
#[derive(Debug, Default)]
pub struct SpotifyClientBuilder {
    credentials: Option<Credentials>,
    api_url: Option<String>,
    token_url: Option<String>,
    request_delay: Option<Duration>,
    timeout: Option<Duration>,
}

impl SpotifyClientBuilder {
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Pause after each request. Defaults to [`config::request_delay`].
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates the client and fetches its first access token.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCredentials`] when no credentials were given and none are
    /// in the environment; otherwise whatever the initial token fetch returns.
    pub fn build(self) -> Result<SpotifyClient> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => Credentials::from_env()?,
        };

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        let token_url = self
            .token_url
            .unwrap_or_else(|| config::ENDPOINTS.token_url.clone());
        let mut tokens = TokenManager::new(http.clone(), token_url, credentials);
        tokens.fetch_token()?;

        Ok(SpotifyClient {
            http,
            api_url: self
                .api_url
                .unwrap_or_else(|| config::ENDPOINTS.api_url.clone()),
            request_delay: self.request_delay.unwrap_or_else(config::request_delay),
            tokens,
        })
    }
}
