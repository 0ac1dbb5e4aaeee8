//! # CLI Module
//!
//! Command implementations for the `spotify-web-api` binary. Each command takes
//! an authenticated [`SpotifyClient`], calls one or two library methods and
//! renders the result as a table. Failures are reported with the `error!`
//! macro, which terminates the process.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-web-api search "time will die and love will bury it" --type album
//! spotify-web-api artist converge --albums --limit 20
//! spotify-web-api album "jane doe" --tracks
//! spotify-web-api category rock --playlists
//! spotify-web-api recommend --artist converge --genre metal
//! ```

mod albums;
mod artists;
mod browse;
mod search;
mod tracks;

pub use albums::album;
pub use artists::{ArtistView, artist};
pub use browse::{categories, category, featured, genres, new_releases, recommend};
pub use search::search;
pub use tracks::tracks;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tabled::{Table, Tabled};

use crate::{
    EntityRef,
    types::{
        Album, AlbumTableRow, Artist, ArtistTableRow, Category, CategoryTableRow, Playlist,
        PlaylistTableRow, Track, TrackTableRow,
    },
    utils, warning,
};

/// Builds an [`EntityRef`] from a command-line value.
pub fn entity(value: String, is_id: bool) -> EntityRef {
    if is_id {
        EntityRef::Id(value)
    } else {
        EntityRef::Name(value)
    }
}

/// Decodes API items into typed views, skipping anything that does not fit.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

fn print_rows<R: Tabled>(rows: Vec<R>, empty_message: &str) {
    if rows.is_empty() {
        warning!("{}", empty_message);
        return;
    }
    println!("{}", Table::new(rows));
}

fn join_artist_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn print_artists(items: Vec<Value>) {
    let rows = decode_items::<Artist>(items)
        .into_iter()
        .map(|a| ArtistTableRow {
            id: a.id,
            name: a.name,
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();
    print_rows::<ArtistTableRow>(rows, "No artists found.");
}

fn print_albums(items: Vec<Value>) {
    let rows = decode_items::<Album>(items)
        .into_iter()
        .map(|a| AlbumTableRow {
            date: a.release_date,
            kind: a.album_type,
            artists: join_artist_names(a.artists.iter().map(|artist| artist.name.as_str())),
            name: a.name,
        })
        .collect();
    print_rows::<AlbumTableRow>(rows, "No albums found.");
}

fn print_tracks(items: Vec<Value>) {
    let rows = decode_items::<Track>(items)
        .into_iter()
        .map(|t| TrackTableRow {
            length: utils::format_duration(t.duration_ms),
            artists: join_artist_names(t.artists.iter().map(|artist| artist.name.as_str())),
            id: t.id,
            name: t.name,
        })
        .collect();
    print_rows::<TrackTableRow>(rows, "No tracks found.");
}

fn print_playlists(items: Vec<Value>) {
    let rows = decode_items::<Playlist>(items)
        .into_iter()
        .map(|p| PlaylistTableRow {
            id: p.id,
            name: p.name,
            description: p.description.unwrap_or_default(),
        })
        .collect();
    print_rows::<PlaylistTableRow>(rows, "No playlists found.");
}

fn print_categories(items: Vec<Value>) {
    let rows = decode_items::<Category>(items)
        .into_iter()
        .map(|c| CategoryTableRow {
            id: c.id,
            name: c.name,
        })
        .collect();
    print_rows::<CategoryTableRow>(rows, "No categories found.");
}
