use serde_json::Value;

use crate::{
    SpotifyClient, error, success,
    types::{BrowseOptions, RecommendationRequest},
    utils, warning,
};

use super::{print_albums, print_categories, print_playlists, print_tracks};

fn run<T>(message: &str, call: impl FnOnce() -> crate::Result<T>) -> T {
    let pb = utils::spinner(message);
    let result = call();
    pb.finish_and_clear();

    match result {
        Ok(value) => value,
        Err(e) => error!("Request failed. Err: {}", e),
    }
}

pub fn categories(client: &mut SpotifyClient, options: &BrowseOptions) {
    let items = run("Fetching categories...", || client.get_categories(options));
    print_categories(items);
}

/// Shows one category, or its playlists when `playlists` is set.
pub fn category(client: &mut SpotifyClient, category_id: &str, playlists: bool, options: &BrowseOptions) {
    if playlists {
        let items = run("Fetching category playlists...", || {
            client.get_category_playlists(category_id, options)
        });
        print_playlists(items);
        return;
    }

    let body = run("Fetching category...", || {
        client.get_category(category_id, &options.country, &options.locale)
    });
    print_categories(vec![body]);
}

pub fn genres(client: &mut SpotifyClient) {
    let genres = run("Fetching genre seeds...", || client.get_genre_seeds());
    if genres.is_empty() {
        warning!("No genre seeds returned.");
        return;
    }

    for genre in &genres {
        println!("{}", genre);
    }
    success!("{} genre seeds available.", genres.len());
}

pub fn new_releases(client: &mut SpotifyClient, options: &BrowseOptions) {
    let items = run("Fetching new releases...", || client.get_new_releases(options));
    print_albums(items);
}

pub fn featured(client: &mut SpotifyClient, options: &BrowseOptions, timestamp: Option<&str>) {
    let items: Vec<Value> = run("Fetching featured playlists...", || {
        client.get_featured_playlists(options, timestamp)
    });
    print_playlists(items);
}

pub fn recommend(client: &mut SpotifyClient, request: &RecommendationRequest) {
    let items = run("Fetching recommendations...", || client.get_recommendations(request));
    print_tracks(items);
}
