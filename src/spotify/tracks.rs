use serde_json::Value;

use super::SpotifyClient;
use crate::{
    error::{Error, Result},
    utils::{check_country, check_item_count, extract_list, join_ids},
};

impl SpotifyClient {
    /// Fetches up to 50 tracks by ID.
    ///
    /// # Arguments
    ///
    /// * `track_ids` - Spotify track IDs (1-50)
    /// * `market` - ISO 3166-1 alpha-2 market code used for track relinking
    ///
    /// # Returns
    ///
    /// The `tracks` array of the response. Unknown IDs come back as `null`
    /// entries, in input order.
    pub fn get_tracks(&mut self, track_ids: &[String], market: &str) -> Result<Vec<Value>> {
        check_item_count("tracks", track_ids.len(), 50)?;
        check_country(market)?;

        let body = self.query(
            "tracks",
            &[("ids", join_ids(track_ids)), ("market", market.to_string())],
        )?;
        Ok(extract_list(&body, &["tracks"]))
    }

    /// Fetches audio features for up to 100 tracks.
    pub fn get_audio_features(&mut self, track_ids: &[String]) -> Result<Vec<Value>> {
        check_item_count("tracks", track_ids.len(), 100)?;

        let body = self.query("audio-features", &[("ids", join_ids(track_ids))])?;
        Ok(extract_list(&body, &["audio_features"]))
    }

    /// Full audio analysis of one track, returned as the whole response body.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Spotify track ID; sent as a single encoded path segment
    pub fn get_audio_analysis(&mut self, track_id: &str) -> Result<Value> {
        if track_id.trim().is_empty() {
            return Err(Error::invalid("track id must not be empty"));
        }

        self.path_query("audio-analysis", &[], &[track_id])
    }
}
