use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::config::DEFAULT_MARKET;

/// Access token returned by the client credentials flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// A catalog entity given either by display name or by Spotify ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Id(String),
    Name(String),
}

impl EntityRef {
    pub fn id(id: impl Into<String>) -> Self {
        EntityRef::Id(id.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        EntityRef::Name(name.into())
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Id(id) => write!(f, "id:{}", id),
            EntityRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Outcome of resolving one [`EntityRef`] to a catalog ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    NotFound(String),
}

impl Resolution {
    pub fn into_id(self) -> Option<String> {
        match self {
            Resolution::Resolved(id) => Some(id),
            Resolution::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Artist,
    Album,
    Playlist,
    Track,
}

impl SearchType {
    /// Key under which the search endpoint nests results of this type.
    pub fn result_key(&self) -> &'static str {
        match self {
            SearchType::Artist => "artists",
            SearchType::Album => "albums",
            SearchType::Playlist => "playlists",
            SearchType::Track => "tracks",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchType::Artist => "artist",
            SearchType::Album => "album",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "artist" => Ok(SearchType::Artist),
            "album" => Ok(SearchType::Album),
            "playlist" => Ok(SearchType::Playlist),
            "track" => Ok(SearchType::Track),
            other => Err(format!(
                "Invalid search type: {}. Use one of: artist, album, playlist, track",
                other
            )),
        }
    }
}

/// Release groups accepted by the artist albums endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl AlbumGroup {
    pub const ALL: [AlbumGroup; 4] = [
        AlbumGroup::Album,
        AlbumGroup::Single,
        AlbumGroup::AppearsOn,
        AlbumGroup::Compilation,
    ];
}

impl fmt::Display for AlbumGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlbumGroup::Album => "album",
            AlbumGroup::Single => "single",
            AlbumGroup::AppearsOn => "appears_on",
            AlbumGroup::Compilation => "compilation",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AlbumGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "album" => Ok(AlbumGroup::Album),
            "single" => Ok(AlbumGroup::Single),
            "appears_on" => Ok(AlbumGroup::AppearsOn),
            "compilation" => Ok(AlbumGroup::Compilation),
            other => Err(format!(
                "Invalid album group: {}. Use one of: album, single, appears_on, compilation",
                other
            )),
        }
    }
}

/// Country, locale and paging shared by the browse endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    pub country: String,
    pub locale: String,
    pub limit: u32,
    pub offset: u32,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            country: DEFAULT_MARKET.to_string(),
            locale: "en_US".to_string(),
            limit: 20,
            offset: 0,
        }
    }
}

/// Seeds and tuning for the recommendations endpoint.
///
/// Between one and five seeds in total across artists, genres and tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub seed_artists: Vec<EntityRef>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: u32,
    pub market: String,
    pub target_popularity: Option<u32>,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            seed_artists: Vec::new(),
            seed_genres: Vec::new(),
            seed_tracks: Vec::new(),
            limit: 20,
            market: DEFAULT_MARKET.to_string(),
            target_popularity: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub genres: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub date: String,
    pub name: String,
    pub kind: String,
    pub artists: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub length: String,
    pub artists: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct CategoryTableRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub description: String,
}
