// SPDX-License-Identifier: MPL-2.0
//! Fetching and validation of the catalog documents.
//!
//! Both documents are fetched concurrently and both must succeed before the
//! catalog is considered loaded; a partial result is treated as failure and
//! no retry is attempted.

use super::records::{ClipsDocument, VideosDocument};
use crate::config::{CLIPS_DOCUMENT, VIDEOS_DOCUMENT};
use crate::error::CatalogError;
use log::{info, warn};

/// The loaded, validated catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub videos: VideosDocument,
    pub clips: ClipsDocument,
}

impl Catalog {
    /// Parses and validates both documents from their JSON text.
    ///
    /// Schema violations in either document are fatal. A clip that
    /// references an unknown or non-embeddable source video is logged and
    /// kept; its display degrades rather than failing the load.
    pub fn parse(videos_json: &str, clips_json: &str) -> Result<Self, CatalogError> {
        let videos: VideosDocument =
            serde_json::from_str(videos_json).map_err(|e| CatalogError::Schema {
                document: "videos".to_string(),
                message: e.to_string(),
            })?;
        let clips: ClipsDocument =
            serde_json::from_str(clips_json).map_err(|e| CatalogError::Schema {
                document: "clips".to_string(),
                message: e.to_string(),
            })?;

        for (id, clip) in clips.iter() {
            match videos.get(&clip.video_id) {
                None => warn!(
                    "clip {id} references video {} with no catalog entry",
                    clip.video_id
                ),
                Some(video) if !video.embeddable => {
                    warn!("clip {id} uses non-embeddable video {}", clip.video_id);
                }
                Some(_) => {}
            }
        }

        info!(
            "catalog loaded: {} videos, {} clips",
            videos.len(),
            clips.len()
        );
        Ok(Catalog { videos, clips })
    }
}

/// Fetches the two catalog documents from `base_url` concurrently.
pub async fn fetch(base_url: &str) -> Result<Catalog, CatalogError> {
    let base = base_url.trim_end_matches('/');
    let videos_url = format!("{base}/{VIDEOS_DOCUMENT}");
    let clips_url = format!("{base}/{CLIPS_DOCUMENT}");

    let client = reqwest::Client::new();
    let (videos_json, clips_json) = tokio::try_join!(
        fetch_document(&client, &videos_url),
        fetch_document(&client, &clips_url)
    )?;

    Catalog::parse(&videos_json, &clips_json)
}

async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String, CatalogError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEOS_JSON: &str = r#"{
        "11111111111": {
            "clipsUuids": ["018f3b1e-0000-7000-8000-000000000001"],
            "artists": ["miko"],
            "durationSecs": 3600,
            "title": "Singing stream",
            "channelId": "UC1111111111111111111111",
            "publishedAt": "2024-05-01T12:00:00Z",
            "syncedAt": "2024-06-01T00:00:00Z",
            "privacyStatus": "public",
            "embeddable": true
        }
    }"#;

    const CLIPS_JSON: &str = r#"{
        "018f3b1e-0000-7000-8000-000000000001": {
            "videoId": "11111111111",
            "songTitle": "Song",
            "artists": ["miko"],
            "startTimeSecs": 10,
            "endTimeSecs": 40
        }
    }"#;

    #[test]
    fn parse_accepts_matching_documents() {
        let catalog = Catalog::parse(VIDEOS_JSON, CLIPS_JSON).unwrap();
        assert_eq!(catalog.videos.len(), 1);
        assert_eq!(catalog.clips.len(), 1);
    }

    #[test]
    fn parse_fails_on_invalid_videos_document() {
        let err = Catalog::parse("{ not json", CLIPS_JSON).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Schema { ref document, .. } if document == "videos"
        ));
    }

    #[test]
    fn parse_fails_on_invalid_clip_record() {
        let bad_clips = r#"{
            "018f3b1e-0000-7000-8000-000000000001": {
                "videoId": "11111111111",
                "songTitle": "Song",
                "artists": ["miko"],
                "startTimeSecs": 40,
                "endTimeSecs": 10
            }
        }"#;
        let err = Catalog::parse(VIDEOS_JSON, bad_clips).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Schema { ref document, .. } if document == "clips"
        ));
    }

    #[test]
    fn parse_keeps_clip_with_unknown_video() {
        // Degraded, not fatal: the clip stays playable, display falls back.
        let clips = r#"{
            "018f3b1e-0000-7000-8000-000000000001": {
                "videoId": "99999999999",
                "songTitle": "Orphan",
                "artists": ["miko"],
                "startTimeSecs": 0,
                "endTimeSecs": 5
            }
        }"#;
        let catalog = Catalog::parse(VIDEOS_JSON, clips).unwrap();
        assert_eq!(catalog.clips.len(), 1);
    }

    #[test]
    fn parse_accepts_empty_documents() {
        let catalog = Catalog::parse("{}", "{}").unwrap();
        assert!(catalog.clips.is_empty());
        assert!(catalog.videos.is_empty());
    }
}
