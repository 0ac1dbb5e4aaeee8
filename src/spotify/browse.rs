use serde_json::Value;

use super::SpotifyClient;
use crate::{
    error::Result,
    types::{BrowseOptions, RecommendationRequest, SearchType},
    utils::{
        check_category, check_country, check_range, check_timestamp, extract_list, join_ids,
    },
};

fn check_browse_options(options: &BrowseOptions) -> Result<()> {
    check_country(&options.country)?;
    check_range("limit", options.limit, 1, 50)
}

fn browse_params(options: &BrowseOptions) -> Vec<(&'static str, String)> {
    vec![
        ("country", options.country.clone()),
        ("locale", options.locale.clone()),
        ("limit", options.limit.to_string()),
        ("offset", options.offset.to_string()),
    ]
}

impl SpotifyClient {
    /// Lists the browse categories available in `options.country`.
    ///
    /// # Arguments
    ///
    /// * `options` - Country, locale and paging; `limit` must be 1-50
    ///
    /// # Returns
    ///
    /// The `categories.items` page, or an empty list when the response has
    /// no such path.
    pub fn get_categories(&mut self, options: &BrowseOptions) -> Result<Vec<Value>> {
        check_browse_options(options)?;

        let body = self.path_query("browse", &browse_params(options), &["categories"])?;
        Ok(extract_list(&body, &["categories", "items"]))
    }

    /// Fetches a single browse category. `category_id` must be one of
    /// [`crate::config::CATEGORY_IDS`].
    pub fn get_category(&mut self, category_id: &str, country: &str, locale: &str) -> Result<Value> {
        check_category(category_id)?;
        check_country(country)?;

        self.path_query(
            "browse",
            &[("country", country.to_string()), ("locale", locale.to_string())],
            &["categories", category_id],
        )
    }

    /// Lists the playlists filed under one browse category.
    ///
    /// # Arguments
    ///
    /// * `category_id` - One of [`crate::config::CATEGORY_IDS`]
    /// * `options` - Country and paging; the locale is not sent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Value>)` - The `playlists.items` page
    /// - `Err(Error::InvalidArgument)` - Unknown category, bad country or limit
    /// - `Err(Error)` - Token, transport or decode failure
    pub fn get_category_playlists(
        &mut self,
        category_id: &str,
        options: &BrowseOptions,
    ) -> Result<Vec<Value>> {
        check_category(category_id)?;
        check_browse_options(options)?;

        let params = [
            ("country", options.country.clone()),
            ("limit", options.limit.to_string()),
            ("offset", options.offset.to_string()),
        ];
        let body = self.path_query("browse", &params, &["categories", category_id, "playlists"])?;
        Ok(extract_list(&body, &["playlists", "items"]))
    }

    /// Lists featured playlists, optionally as they were at `timestamp`
    /// (`yyyy-MM-ddTHH:mm:ss`, local time of `options.country`).
    pub fn get_featured_playlists(
        &mut self,
        options: &BrowseOptions,
        timestamp: Option<&str>,
    ) -> Result<Vec<Value>> {
        check_browse_options(options)?;
        if let Some(ts) = timestamp {
            check_timestamp(ts)?;
        }

        let mut params = browse_params(options);
        if let Some(ts) = timestamp {
            params.push(("timestamp", ts.to_string()));
        }

        let body = self.path_query("browse", &params, &["featured-playlists"])?;
        Ok(extract_list(&body, &["playlists", "items"]))
    }

    /// Lists newly released albums in `options.country`.
    ///
    /// # Returns
    ///
    /// The `albums.items` page of the response.
    pub fn get_new_releases(&mut self, options: &BrowseOptions) -> Result<Vec<Value>> {
        check_browse_options(options)?;

        let params = [
            ("country", options.country.clone()),
            ("limit", options.limit.to_string()),
            ("offset", options.offset.to_string()),
        ];
        let body = self.path_query("browse", &params, &["new-releases"])?;
        Ok(extract_list(&body, &["albums", "items"]))
    }

    /// Generates track recommendations from artist, genre and track seeds.
    ///
    /// Seed counts are checked before artist names are resolved. If every
    /// seed is an artist name that fails to resolve, no request is made and
    /// the result is empty.
    pub fn get_recommendations(&mut self, request: &RecommendationRequest) -> Result<Vec<Value>> {
        let seed_count =
            request.seed_artists.len() + request.seed_genres.len() + request.seed_tracks.len();
        check_range("seed count", u32::try_from(seed_count).unwrap_or(u32::MAX), 1, 5)?;
        check_range("limit", request.limit, 1, 100)?;
        check_country(&request.market)?;
        if let Some(popularity) = request.target_popularity {
            check_range("target_popularity", popularity, 0, 100)?;
        }

        let artist_ids = self.found_ids(&request.seed_artists, SearchType::Artist)?;
        if artist_ids.is_empty() && request.seed_genres.is_empty() && request.seed_tracks.is_empty()
        {
            return Ok(Vec::new());
        }

        let mut params = vec![
            ("limit", request.limit.to_string()),
            ("market", request.market.clone()),
        ];
        if !artist_ids.is_empty() {
            params.push(("seed_artists", join_ids(&artist_ids)));
        }
        if !request.seed_genres.is_empty() {
            params.push(("seed_genres", join_ids(&request.seed_genres)));
        }
        if !request.seed_tracks.is_empty() {
            params.push(("seed_tracks", join_ids(&request.seed_tracks)));
        }
        if let Some(popularity) = request.target_popularity {
            params.push(("target_popularity", popularity.to_string()));
        }

        let body = self.query("recommendations", &params)?;
        Ok(extract_list(&body, &["tracks"]))
    }

    /// Genres usable as `seed_genres` in [`SpotifyClient::get_recommendations`].
    pub fn get_genre_seeds(&mut self) -> Result<Vec<String>> {
        let body = self.path_query("recommendations", &[], &["available-genre-seeds"])?;

        Ok(extract_list(&body, &["genres"])
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect())
    }
}
