use crate::{SpotifyClient, config::DEFAULT_MARKET, error, types::SearchType, utils};

use super::{print_albums, print_artists, print_playlists, print_tracks};

pub fn search(client: &mut SpotifyClient, query: &str, search_type: SearchType, limit: u32) {
    let pb = utils::spinner(&format!("Searching {}s for {:?}...", search_type, query));
    let result = client.search(query, search_type, limit, DEFAULT_MARKET, 0);
    pb.finish_and_clear();

    let body = match result {
        Ok(body) => body,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    let items = utils::extract_list(&body, &[search_type.result_key(), "items"]);
    match search_type {
        SearchType::Artist => print_artists(items),
        SearchType::Album => print_albums(items),
        SearchType::Playlist => print_playlists(items),
        SearchType::Track => print_tracks(items),
    }
}
