// SPDX-License-Identifier: MPL-2.0
//! Catalog loading behavior across both documents and the embedded
//! performer tables.

use clip_lens::catalog::{Catalog, NameLang, PerformerTable};
use clip_lens::config::{self, Config};
use clip_lens::error::CatalogError;
use clip_lens::i18n::fluent::I18n;
use clip_lens::playlist::Playlist;
use tempfile::tempdir;

const VIDEOS_JSON: &str = r#"{
    "11111111111": {
        "clipsUuids": ["018f3b1e-0000-7000-8000-000000000001"],
        "artists": ["sakura-miko"],
        "durationSecs": 3600,
        "title": "Singing stream",
        "channelId": "UC-hM6YJuNYVAmUWxeIr9FeA",
        "publishedAt": "2024-05-01T12:00:00Z",
        "syncedAt": "2024-06-01T00:00:00Z",
        "privacyStatus": "public",
        "embeddable": true
    }
}"#;

const CLIPS_JSON: &str = r#"{
    "018f3b1e-0000-7000-8000-000000000001": {
        "videoId": "11111111111",
        "songTitle": "Song A",
        "artists": ["sakura-miko"],
        "externalArtists": ["Guest Singer"],
        "startTimeSecs": 10,
        "endTimeSecs": 40
    },
    "018f3b1e-0000-7000-8000-000000000002": {
        "videoId": "11111111111",
        "songTitle": "Song B",
        "artists": ["unknown-performer"],
        "startTimeSecs": 50,
        "endTimeSecs": 80
    }
}"#;

#[test]
fn catalog_feeds_playlist_in_document_order() {
    let catalog = Catalog::parse(VIDEOS_JSON, CLIPS_JSON).expect("catalog should parse");
    let playlist = Playlist::from_catalog(&catalog.clips);
    assert_eq!(playlist.len(), 2);

    let first = playlist.current().expect("non-empty playlist");
    let record = catalog.clips.get(first).expect("entry exists");
    assert_eq!(record.song_title, "Song A");
}

#[test]
fn schema_violation_in_either_document_is_fatal() {
    let err = Catalog::parse("not json", CLIPS_JSON).unwrap_err();
    assert!(matches!(err, CatalogError::Schema { ref document, .. } if document == "videos"));

    let bad_clips = r#"{
        "018f3b1e-0000-7000-8000-000000000001": {
            "videoId": "tooshort",
            "songTitle": "Song",
            "artists": ["miko"],
            "startTimeSecs": 0,
            "endTimeSecs": 5
        }
    }"#;
    let err = Catalog::parse(VIDEOS_JSON, bad_clips).unwrap_err();
    assert!(matches!(err, CatalogError::Schema { ref document, .. } if document == "clips"));
}

#[test]
fn performer_lookup_miss_degrades_to_omission() {
    let catalog = Catalog::parse(VIDEOS_JSON, CLIPS_JSON).expect("catalog should parse");
    let table = PerformerTable::load().expect("embedded tables should parse");

    let ids: Vec<_> = catalog.clips.ids().collect();
    let known = catalog.clips.get(ids[0]).unwrap();
    let names = table.names_for_clip(known, NameLang::En);
    // Resolved performer plus the external guest name.
    assert_eq!(names, vec!["Sakura Miko".to_string(), "Guest Singer".to_string()]);

    let unknown = catalog.clips.get(ids[1]).unwrap();
    let names = table.names_for_clip(unknown, NameLang::En);
    // The unknown id is omitted, not rendered as a placeholder.
    assert!(names.is_empty());
}

#[test]
fn channel_lookup_resolves_embedded_performer() {
    let catalog = Catalog::parse(VIDEOS_JSON, CLIPS_JSON).expect("catalog should parse");
    let table = PerformerTable::load().expect("embedded tables should parse");

    let video = catalog
        .videos
        .get(&catalog.clips.iter().next().unwrap().1.video_id)
        .expect("video exists");
    let performer_id = table
        .performer_for_channel(&video.channel_id)
        .expect("channel is in the embedded table");
    let performer = table.get(performer_id).expect("performer exists");
    assert_eq!(performer.en, "Sakura Miko");
}

#[test]
fn catalog_base_url_falls_back_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let custom = Config {
        language: Some("ja".to_string()),
        catalog_base_url: Some("https://clips.example.org/data".to_string()),
    };
    config::save_to_path(&custom, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.catalog_base_url(), "https://clips.example.org/data");

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ja");

    let defaults = Config::default();
    assert_eq!(defaults.catalog_base_url(), config::DEFAULT_CATALOG_BASE_URL);

    dir.close().expect("Failed to close temporary directory");
}
