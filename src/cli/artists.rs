use crate::{EntityRef, SpotifyClient, error, info, types::AlbumGroup, utils};

use super::{print_albums, print_artists, print_tracks};

/// What to show for an artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistView {
    Info,
    Albums,
    TopTracks,
    Related,
}

pub fn artist(
    client: &mut SpotifyClient,
    artist: EntityRef,
    view: ArtistView,
    include_groups: &[AlbumGroup],
    limit: u32,
    country: &str,
) {
    info!("Looking up {}", artist);
    let pb = utils::spinner("Fetching artist data...");

    let result = match view {
        ArtistView::Info => client.get_artists(std::slice::from_ref(&artist)),
        ArtistView::Albums => client.get_artist_albums(&artist, include_groups, limit),
        ArtistView::TopTracks => client.get_top_tracks(&artist, country),
        ArtistView::Related => client.get_related_artists(&artist),
    };
    pb.finish_and_clear();

    let items = match result {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch artist data. Err: {}", e),
    };

    match view {
        ArtistView::Info | ArtistView::Related => print_artists(items),
        ArtistView::Albums => print_albums(items),
        ArtistView::TopTracks => print_tracks(items),
    }
}
