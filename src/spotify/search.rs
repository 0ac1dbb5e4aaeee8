use serde_json::Value;

use super::SpotifyClient;
use crate::{
    error::{Error, Result},
    types::SearchType,
    utils::{check_country, check_range},
};

impl SpotifyClient {
    /// Searches the catalog.
    ///
    /// Results are nested under the plural of `search_type`, e.g.
    /// `body["artists"]["items"]`.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text to search for
    /// * `search_type` - Restricts results to artists, albums, playlists or tracks
    /// * `limit` - Number of items to return (1-50)
    /// * `market` - Only return content playable in this country
    /// * `offset` - Index of the first result (0-1000)
    pub fn search(
        &mut self,
        query: &str,
        search_type: SearchType,
        limit: u32,
        market: &str,
        offset: u32,
    ) -> Result<Value> {
        if query.trim().is_empty() {
            return Err(Error::invalid("search query must not be empty"));
        }
        check_range("limit", limit, 1, 50)?;
        check_range("offset", offset, 0, 1000)?;
        check_country(market)?;

        self.query(
            "search",
            &[
                ("q", query.to_string()),
                ("type", search_type.to_string()),
                ("limit", limit.to_string()),
                ("market", market.to_string()),
                ("offset", offset.to_string()),
            ],
        )
    }
}
