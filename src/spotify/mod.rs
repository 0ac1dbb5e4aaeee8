//! # Spotify Integration Module
//!
//! This module is the HTTP layer between the crate and the Spotify Web API. It
//! authenticates with the OAuth 2.0 client credentials flow and exposes the
//! catalog endpoints as methods on a single [`SpotifyClient`].
//!
//! ## Architecture
//!
//! ```text
//! Resource methods (search, browse, artists, albums, tracks)
//!          ↓
//! SpotifyClient::query / path_query   ← name → ID resolution via search
//!          ↓
//! TokenManager (refresh when expired)
//!          ↓
//! reqwest::blocking → Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Token request for the client credentials flow (`POST /api/token`)
//! - [`client`] - Dispatcher, name resolution and the client builder
//! - `search` - `GET /search`
//! - `browse` - Categories, featured playlists, new releases, recommendations
//! - `artists` - Artists, artist albums, top tracks, related artists
//! - `albums` - Albums and album tracks
//! - `tracks` - Tracks, audio features and audio analysis
//!
//! ## Request Model
//!
//! Everything is synchronous. Each request checks the token first and fetches a
//! new one when it has expired, then sleeps for a fixed delay after the
//! response arrives. There is no retry and no handling of `Retry-After`.
//!
//! Parameter checks (limits, country codes, category IDs, timestamps) run
//! before any network call and fail with
//! [`crate::Error::InvalidArgument`].
//!
//! ## Usage
//!
//! ```rust
//! use spotify_web_api::{EntityRef, SpotifyClient, types::AlbumGroup};
//!
//! let mut client = SpotifyClient::from_env()?;
//! let albums = client.get_artist_albums(
//!     &EntityRef::name("Converge"),
//!     &[AlbumGroup::Album],
//!     20,
//! )?;
//! ```

mod albums;
mod artists;
pub mod auth;
mod browse;
pub mod client;
mod search;
mod tracks;

pub use client::{Params, SpotifyClient, SpotifyClientBuilder};
