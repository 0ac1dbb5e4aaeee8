use serde_json::Value;

use super::SpotifyClient;
use crate::{
    error::Result,
    types::{AlbumGroup, EntityRef, SearchType},
    utils::{check_country, check_item_count, check_range, extract_list, join_ids},
};

impl SpotifyClient {
    /// Fetches full artist objects for up to 50 artists.
    ///
    /// Names that do not resolve are skipped, so the result may be shorter
    /// than `artists`. Use [`SpotifyClient::resolve_ids`] first when the
    /// caller needs to know which ones were dropped.
    ///
    /// # Arguments
    ///
    /// * `artists` - Artist IDs or names (1-50)
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Value>)` - The `artists` array of the response, empty when nothing resolved
    /// - `Err(Error::InvalidArgument)` - Empty or oversized input, before any request
    /// - `Err(Error)` - Token, transport or decode failure
    pub fn get_artists(&mut self, artists: &[EntityRef]) -> Result<Vec<Value>> {
        check_item_count("artists", artists.len(), 50)?;

        let ids = self.found_ids(artists, SearchType::Artist)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.query("artists", &[("ids", join_ids(&ids))])?;
        Ok(extract_list(&body, &["artists"]))
    }

    /// Fetches an artist's albums.
    ///
    /// # Arguments
    ///
    /// * `artist` - Artist ID or name
    /// * `include_groups` - Album groups to keep; empty means every group
    /// * `limit` - Maximum number of albums to return (1-50)
    ///
    /// # Returns
    ///
    /// The `items` page of the response. An artist name without a catalog
    /// match gives an empty list and no album request is made.
    pub fn get_artist_albums(
        &mut self,
        artist: &EntityRef,
        include_groups: &[AlbumGroup],
        limit: u32,
    ) -> Result<Vec<Value>> {
        check_range("limit", limit, 1, 50)?;

        let Some(id) = self.resolve_id(artist, SearchType::Artist)? else {
            return Ok(Vec::new());
        };

        let groups = if include_groups.is_empty() {
            &AlbumGroup::ALL[..]
        } else {
            include_groups
        };
        let groups = groups
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let body = self.path_query(
            "artists",
            &[("include_groups", groups), ("limit", limit.to_string())],
            &[id.as_str(), "albums"],
        )?;
        Ok(extract_list(&body, &["items"]))
    }

    /// Fetches an artist's most popular tracks in one market.
    ///
    /// # Arguments
    ///
    /// * `artist` - Artist ID or name
    /// * `country` - ISO 3166-1 alpha-2 market code, sent as `market`
    ///
    /// # Returns
    ///
    /// The `tracks` array of the response, or an empty list when the artist
    /// name does not resolve.
    pub fn get_top_tracks(&mut self, artist: &EntityRef, country: &str) -> Result<Vec<Value>> {
        check_country(country)?;

        let Some(id) = self.resolve_id(artist, SearchType::Artist)? else {
            return Ok(Vec::new());
        };

        let body = self.path_query(
            "artists",
            &[("market", country.to_string())],
            &[id.as_str(), "top-tracks"],
        )?;
        Ok(extract_list(&body, &["tracks"]))
    }

    /// Artists Spotify considers similar to `artist`, from the `artists` array.
    pub fn get_related_artists(&mut self, artist: &EntityRef) -> Result<Vec<Value>> {
        let Some(id) = self.resolve_id(artist, SearchType::Artist)? else {
            return Ok(Vec::new());
        };

        let body = self.path_query("artists", &[], &[id.as_str(), "related-artists"])?;
        Ok(extract_list(&body, &["artists"]))
    }
}
