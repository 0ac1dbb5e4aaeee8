use crate::{SpotifyClient, error, utils};

use super::print_tracks;

/// Shows tracks by ID, or their audio features as JSON when `features` is set.
pub fn tracks(client: &mut SpotifyClient, ids: &[String], features: bool, market: &str) {
    let pb = utils::spinner("Fetching tracks...");
    let result = if features {
        client.get_audio_features(ids)
    } else {
        client.get_tracks(ids, market)
    };
    pb.finish_and_clear();

    let items = match result {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch tracks. Err: {}", e),
    };

    if !features {
        print_tracks(items);
        return;
    }

    match serde_json::to_string_pretty(&items) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot render audio features. Err: {}", e),
    }
}
