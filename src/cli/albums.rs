use crate::{EntityRef, SpotifyClient, error, info, utils};

use super::{print_albums, print_tracks};

/// Shows an album, or its track list when `tracks` is set.
pub fn album(client: &mut SpotifyClient, album: EntityRef, tracks: bool, limit: u32, market: &str) {
    info!("Looking up {}", album);
    let pb = utils::spinner("Fetching album data...");

    let result = if tracks {
        client.get_album_tracks(&album, limit, market)
    } else {
        client.get_albums(std::slice::from_ref(&album), market)
    };
    pb.finish_and_clear();

    match result {
        Ok(items) if tracks => print_tracks(items),
        Ok(items) => print_albums(items),
        Err(e) => error!("Failed to fetch album data. Err: {}", e),
    }
}
