use serde_json::json;
use spotify_web_api::Error;
use spotify_web_api::types::{AlbumGroup, SearchType};
use spotify_web_api::utils::*;

#[test]
fn test_check_range_bounds_are_inclusive() {
    assert!(check_range("limit", 1, 1, 50).is_ok());
    assert!(check_range("limit", 50, 1, 50).is_ok());
    assert!(check_range("target_popularity", 0, 0, 100).is_ok());

    let err = check_range("limit", 51, 1, 50).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("limit"));
    assert!(check_range("limit", 0, 1, 50).is_err());
}

#[test]
fn test_check_item_count() {
    assert!(check_item_count("albums", 20, 20).is_ok());
    assert!(check_item_count("albums", 21, 20).is_err());
    assert!(check_item_count("albums", 0, 20).is_err());
}

#[test]
fn test_check_country() {
    assert!(check_country("US").is_ok());
    assert!(check_country("SE").is_ok());

    // Lowercase, too long and empty codes are all rejected
    assert!(check_country("us").is_err());
    assert!(check_country("USA").is_err());
    assert!(check_country("").is_err());
}

#[test]
fn test_check_category() {
    assert!(check_category("rock").is_ok());
    assert!(check_category("toplists").is_ok());

    let err = check_category("not-a-real-category").unwrap_err();
    assert!(err.to_string().contains("not-a-real-category"));
}

#[test]
fn test_check_timestamp() {
    assert!(check_timestamp("2014-10-23T09:00:00").is_ok());

    assert!(check_timestamp("2014-10-23").is_err());
    assert!(check_timestamp("2014-13-23T09:00:00").is_err());
    assert!(check_timestamp("yesterday").is_err());
}

#[test]
fn test_join_ids() {
    assert_eq!(join_ids(&["a", "b", "c"]), "a,b,c");
    assert_eq!(join_ids(&[String::from("only")]), "only");
    assert_eq!(join_ids::<&str>(&[]), "");
}

#[test]
fn test_extract_list() {
    let body = json!({
        "playlists": {"items": [{"id": "1"}, {"id": "2"}]},
        "message": "hello"
    });

    assert_eq!(extract_list(&body, &["playlists", "items"]).len(), 2);

    // Missing path and non-array leaf both fall back to empty
    assert!(extract_list(&body, &["albums", "items"]).is_empty());
    assert!(extract_list(&body, &["message"]).is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(387_999), "6:27");
}

#[test]
fn test_search_type_parsing() {
    assert_eq!("artist".parse::<SearchType>(), Ok(SearchType::Artist));
    assert_eq!(" Track ".parse::<SearchType>(), Ok(SearchType::Track));
    assert!("podcast".parse::<SearchType>().is_err());

    assert_eq!(SearchType::Album.to_string(), "album");
    assert_eq!(SearchType::Playlist.result_key(), "playlists");
}

#[test]
fn test_album_group_parsing() {
    assert_eq!("appears_on".parse::<AlbumGroup>(), Ok(AlbumGroup::AppearsOn));
    assert!("ep".parse::<AlbumGroup>().is_err());

    let all = AlbumGroup::ALL
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(all, "album,single,appears_on,compilation");
}
