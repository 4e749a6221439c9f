// SPDX-License-Identifier: MPL-2.0
//! Schemas for the two catalog documents.
//!
//! The clips document is a JSON object mapping UUID keys to clip records,
//! the videos document maps video ids to video metadata. Both validate on
//! deserialization; a record that violates an invariant fails the whole
//! document (catalog loads are all-or-nothing).

use crate::domain::{ChannelId, ClipId, PerformerId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU8;

/// Per-clip volume normalization hint.
///
/// 1–100 percent; zero is excluded because a clip that should be silent
/// would simply not be in the catalog.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeHint(NonZeroU8);

impl VolumeHint {
    pub fn new(value: u8) -> Result<Self, String> {
        if (1..=100).contains(&value) {
            // value is non-zero here
            Ok(VolumeHint(NonZeroU8::new(value).unwrap()))
        } else {
            Err(format!(
                "Invalid volume percent: {value}. Must be in range (0, 100]."
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl<'de> Deserialize<'de> for VolumeHint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        VolumeHint::new(value).map_err(serde::de::Error::custom)
    }
}

/// Publication status of a source video.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    Public,
    Unlisted,
    Private,
}

/// One curated excerpt of a source video.
///
/// The excerpt's absolute timeline is `[start_time_secs, end_time_secs)`
/// within the source video; the duration is derived, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawClipRecord")]
pub struct ClipRecord {
    /// Source video this clip is cut from.
    #[serde(rename = "videoId")]
    pub video_id: VideoId,
    /// Song title shown in the player and playlist.
    #[serde(rename = "songTitle")]
    pub song_title: String,
    /// Performer ids, resolved against the embedded performer table.
    #[serde(rename = "artists")]
    pub performer_ids: Vec<PerformerId>,
    /// Guest performers without a table entry, shown verbatim.
    #[serde(rename = "externalArtists", skip_serializing_if = "Option::is_none")]
    pub external_performer_names: Option<Vec<String>>,
    /// Video id of a standalone cut of this clip, if one exists.
    #[serde(rename = "clippedVideoId", skip_serializing_if = "Option::is_none")]
    pub clipped_video_id: Option<VideoId>,
    /// Second the excerpt starts at, within the source video.
    #[serde(rename = "startTimeSecs")]
    pub start_time_secs: f64,
    /// Second the excerpt ends at, within the source video.
    #[serde(rename = "endTimeSecs")]
    pub end_time_secs: f64,
    #[serde(rename = "clipTags", skip_serializing_if = "Option::is_none")]
    pub clip_tags: Option<Vec<String>>,
    /// Volume the player should scale to for consistent loudness.
    #[serde(rename = "volumePercent", skip_serializing_if = "Option::is_none")]
    pub volume_hint: Option<VolumeHint>,
}

impl ClipRecord {
    /// Length of the excerpt in seconds (derived).
    pub fn duration_secs(&self) -> f64 {
        self.end_time_secs - self.start_time_secs
    }
}

/// Untrusted mirror of [`ClipRecord`]; invariants are checked in `TryFrom`.
#[derive(Deserialize)]
struct RawClipRecord {
    #[serde(rename = "videoId")]
    video_id: VideoId,
    #[serde(rename = "songTitle")]
    song_title: String,
    #[serde(rename = "artists")]
    performer_ids: Vec<PerformerId>,
    #[serde(rename = "externalArtists")]
    external_performer_names: Option<Vec<String>>,
    #[serde(rename = "clippedVideoId")]
    clipped_video_id: Option<VideoId>,
    #[serde(rename = "startTimeSecs")]
    start_time_secs: f64,
    #[serde(rename = "endTimeSecs")]
    end_time_secs: f64,
    #[serde(rename = "clipTags")]
    clip_tags: Option<Vec<String>>,
    #[serde(rename = "volumePercent")]
    volume_hint: Option<VolumeHint>,
}

impl TryFrom<RawClipRecord> for ClipRecord {
    type Error = String;

    fn try_from(raw: RawClipRecord) -> Result<Self, Self::Error> {
        if raw.start_time_secs < 0.0 || raw.end_time_secs < 0.0 {
            return Err("clip times must not be negative".to_string());
        }
        if raw.end_time_secs <= raw.start_time_secs {
            return Err(format!(
                "invalid clip time range: start({}) must be less than end({})",
                raw.start_time_secs, raw.end_time_secs
            ));
        }
        if raw.performer_ids.is_empty() {
            return Err("clip must name at least one performer".to_string());
        }
        if let Some(names) = &raw.external_performer_names {
            if names.is_empty() || names.iter().any(String::is_empty) {
                return Err("external performer names must be non-empty".to_string());
            }
        }
        Ok(ClipRecord {
            video_id: raw.video_id,
            song_title: raw.song_title,
            performer_ids: raw.performer_ids,
            external_performer_names: raw.external_performer_names,
            clipped_video_id: raw.clipped_video_id,
            start_time_secs: raw.start_time_secs,
            end_time_secs: raw.end_time_secs,
            clip_tags: raw.clip_tags,
            volume_hint: raw.volume_hint,
        })
    }
}

/// Metadata of one source video.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Clips cut from this video.
    pub clips_uuids: Vec<ClipId>,
    /// Performers appearing in at least one of this video's clips.
    #[serde(rename = "artists")]
    pub performer_ids: Vec<PerformerId>,
    pub duration_secs: f64,
    pub title: String,
    pub channel_id: ChannelId,
    /// Uploader display name, set for videos from outside the agency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
    pub published_at: DateTime<Utc>,
    pub synced_at: DateTime<Utc>,
    pub privacy_status: PrivacyStatus,
    pub embeddable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_tags: Option<Vec<String>>,
}

/// The clips document, preserving the source collection's entry order.
///
/// JSON object order is meaningful here: the playlist plays clips in the
/// order the pipeline wrote them, so deserialization keeps a vector of
/// entries rather than a map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipsDocument {
    entries: Vec<(ClipId, ClipRecord)>,
}

impl ClipsDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &ClipId) -> Option<&ClipRecord> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&(ClipId, ClipRecord)> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ClipId, ClipRecord)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ClipId> {
        self.entries.iter().map(|(id, _)| id)
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<(ClipId, ClipRecord)>) -> Self {
        Self { entries }
    }
}

impl<'de> Deserialize<'de> for ClipsDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> serde::de::Visitor<'de> for EntriesVisitor {
            type Value = ClipsDocument;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of clip UUIDs to clip records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<ClipId, ClipRecord>()? {
                    entries.push(entry);
                }
                Ok(ClipsDocument { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Serialize for ClipsDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// The videos document: video id to metadata, lookup only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct VideosDocument(HashMap<VideoId, VideoRecord>);

impl VideosDocument {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &VideoId) -> Option<&VideoRecord> {
        self.0.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_json(start: f64, end: f64) -> String {
        format!(
            r#"{{
                "videoId": "dQw4w9WgXcQ",
                "songTitle": "Song",
                "artists": ["miko"],
                "startTimeSecs": {start},
                "endTimeSecs": {end}
            }}"#
        )
    }

    #[test]
    fn clip_record_parses_minimal_fields() {
        let clip: ClipRecord = serde_json::from_str(&clip_json(10.0, 40.0)).unwrap();
        assert_eq!(clip.song_title, "Song");
        assert_eq!(clip.start_time_secs, 10.0);
        assert_eq!(clip.duration_secs(), 30.0);
        assert!(clip.volume_hint.is_none());
    }

    #[test]
    fn clip_record_rejects_inverted_time_range() {
        let result: Result<ClipRecord, _> = serde_json::from_str(&clip_json(40.0, 10.0));
        assert!(result.is_err());
        let result: Result<ClipRecord, _> = serde_json::from_str(&clip_json(10.0, 10.0));
        assert!(result.is_err(), "zero-length clips are invalid");
    }

    #[test]
    fn clip_record_rejects_negative_times() {
        let result: Result<ClipRecord, _> = serde_json::from_str(&clip_json(-1.0, 10.0));
        assert!(result.is_err());
    }

    #[test]
    fn clip_record_rejects_empty_performers() {
        let json = r#"{
            "videoId": "dQw4w9WgXcQ",
            "songTitle": "Song",
            "artists": [],
            "startTimeSecs": 0,
            "endTimeSecs": 10
        }"#;
        let result: Result<ClipRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn volume_hint_accepts_one_to_hundred() {
        for v in [1u8, 42, 100] {
            assert_eq!(VolumeHint::new(v).unwrap().get(), v);
        }
        for v in [0u8, 101, 255] {
            assert!(VolumeHint::new(v).is_err(), "{v} should be invalid");
        }
    }

    #[test]
    fn clips_document_preserves_entry_order() {
        let json = r#"{
            "018f3b1e-0000-7000-8000-000000000001": {
                "videoId": "11111111111", "songTitle": "First",
                "artists": ["a"], "startTimeSecs": 0, "endTimeSecs": 5
            },
            "018f3b1e-0000-7000-8000-000000000002": {
                "videoId": "22222222222", "songTitle": "Second",
                "artists": ["b"], "startTimeSecs": 5, "endTimeSecs": 9
            }
        }"#;
        let doc: ClipsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.len(), 2);
        let titles: Vec<&str> = doc.iter().map(|(_, c)| c.song_title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn clips_document_lookup_by_id() {
        let json = r#"{
            "018f3b1e-0000-7000-8000-000000000001": {
                "videoId": "11111111111", "songTitle": "Only",
                "artists": ["a"], "startTimeSecs": 0, "endTimeSecs": 5
            }
        }"#;
        let doc: ClipsDocument = serde_json::from_str(json).unwrap();
        let id = *doc.ids().next().unwrap();
        assert_eq!(doc.get(&id).unwrap().song_title, "Only");
    }

    #[test]
    fn video_record_parses_full_schema() {
        let json = r#"{
            "clipsUuids": ["018f3b1e-0000-7000-8000-000000000001"],
            "artists": ["miko"],
            "durationSecs": 3600,
            "title": "Singing stream",
            "channelId": "UC1111111111111111111111",
            "publishedAt": "2024-05-01T12:00:00Z",
            "syncedAt": "2024-06-01T00:00:00Z",
            "privacyStatus": "public",
            "embeddable": true
        }"#;
        let video: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(video.privacy_status, PrivacyStatus::Public);
        assert!(video.embeddable);
        assert!(video.uploader_name.is_none());
    }

    #[test]
    fn video_record_rejects_unknown_privacy_status() {
        let json = r#"{
            "clipsUuids": ["018f3b1e-0000-7000-8000-000000000001"],
            "artists": ["miko"],
            "durationSecs": 10,
            "title": "t",
            "channelId": "UC1111111111111111111111",
            "publishedAt": "2024-05-01T12:00:00Z",
            "syncedAt": "2024-06-01T00:00:00Z",
            "privacyStatus": "secret",
            "embeddable": true
        }"#;
        let result: Result<VideoRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
