use serde_json::Value;

use super::SpotifyClient;
use crate::{
    error::Result,
    types::{EntityRef, SearchType},
    utils::{check_country, check_item_count, check_range, extract_list, join_ids},
};

impl SpotifyClient {
    /// Fetches up to 20 albums by name or ID.
    ///
    /// # Arguments
    ///
    /// * `albums` - Album IDs or names (1-20); names without a match are skipped
    /// * `market` - ISO 3166-1 alpha-2 market code
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Value>)` - The `albums` array, empty when no reference resolved
    /// - `Err(Error::InvalidArgument)` - Bad count or market, before any request
    /// - `Err(Error)` - Token, transport or decode failure
    pub fn get_albums(&mut self, albums: &[EntityRef], market: &str) -> Result<Vec<Value>> {
        check_item_count("albums", albums.len(), 20)?;
        check_country(market)?;

        let ids = self.found_ids(albums, SearchType::Album)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.query(
            "albums",
            &[("ids", join_ids(&ids)), ("market", market.to_string())],
        )?;
        Ok(extract_list(&body, &["albums"]))
    }

    /// Fetches the track listing of one album.
    ///
    /// # Arguments
    ///
    /// * `album` - Album ID, or a name resolved through an album search first
    /// * `limit` - Maximum number of tracks to return (1-50)
    /// * `market` - ISO 3166-1 alpha-2 market code
    ///
    /// # Returns
    ///
    /// The `items` page of the response. An album name without a match gives
    /// an empty list.
    pub fn get_album_tracks(
        &mut self,
        album: &EntityRef,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Value>> {
        check_range("limit", limit, 1, 50)?;
        check_country(market)?;

        let Some(id) = self.resolve_id(album, SearchType::Album)? else {
            return Ok(Vec::new());
        };

        let body = self.path_query(
            "albums",
            &[("limit", limit.to_string()), ("market", market.to_string())],
            &[id.as_str(), "tracks"],
        )?;
        Ok(extract_list(&body, &["items"]))
    }
}
