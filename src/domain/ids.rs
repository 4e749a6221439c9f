// SPDX-License-Identifier: MPL-2.0
//! Validated identifier newtypes for the catalog domain.
//!
//! Identifiers are checked on construction and on deserialization, so a
//! malformed id can never reach the embedded player or a lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

const ID_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// YouTube video id.
///
/// Exactly 11 characters drawn from `a-z`, `A-Z`, `0-9`, `-`, `_`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: String) -> Result<Self, &'static str> {
        if Self::is_valid(&id) {
            Ok(VideoId(id))
        } else {
            Err("Invalid video ID format")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    fn is_valid(id: &str) -> bool {
        id.len() == 11 && id.chars().all(|c| ID_CHARS.contains(c))
    }
}

impl<'de> Deserialize<'de> for VideoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        VideoId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// YouTube channel id.
///
/// Starts with `UC`, followed by 22 characters drawn from `a-z`, `A-Z`,
/// `0-9`, `-`, `_` (24 characters total).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: String) -> Result<Self, &'static str> {
        if Self::is_valid(&id) {
            Ok(ChannelId(id))
        } else {
            Err("Invalid channel ID format")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(id: &str) -> bool {
        id.starts_with("UC")
            && id.len() == 24
            && id[2..].chars().all(|c| ID_CHARS.contains(c))
    }
}

impl<'de> Deserialize<'de> for ChannelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        ChannelId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of one clip record (UUID-shaped).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(uuid::Uuid);

impl ClipId {
    pub fn new(id: uuid::Uuid) -> Self {
        ClipId(id)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key into the embedded performer table.
///
/// Any non-empty string; empty ids are rejected on deserialization.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PerformerId(String);

impl PerformerId {
    pub fn new(id: String) -> Result<Self, &'static str> {
        if id.is_empty() {
            Err("Performer ID must not be empty")
        } else {
            Ok(PerformerId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PerformerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        PerformerId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PerformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// MARK: For Tests

#[cfg(test)]
impl VideoId {
    /// return `11111111111`
    pub(crate) fn test_id_1() -> Self {
        VideoId::new("11111111111".to_string()).unwrap()
    }
    /// return `22222222222`
    pub(crate) fn test_id_2() -> Self {
        VideoId::new("22222222222".to_string()).unwrap()
    }
}

#[cfg(test)]
impl ChannelId {
    /// return `UC1111111111111111111111` (24 chars)
    pub(crate) fn test_id_1() -> Self {
        ChannelId::new("UC1111111111111111111111".to_string()).unwrap()
    }
}

// MARK: Tests
