// SPDX-License-Identifier: MPL-2.0
//! Embedded performer and channel lookup tables.
//!
//! Both tables are static build artifacts embedded into the binary and
//! parsed once at startup; the data source never changes within a session,
//! so the maps are immutable.

use crate::catalog::records::ClipRecord;
use crate::domain::{ChannelId, PerformerId};
use crate::error::CatalogError;
use log::warn;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/music_data/"]
struct Asset;

const ARTISTS_FILE: &str = "artists.min.json";
const CHANNELS_FILE: &str = "channels.min.json";

/// Display metadata of one performer.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Performer {
    /// Japanese name.
    pub ja: String,
    /// Hiragana reading.
    pub jah: String,
    /// English name.
    pub en: String,
    /// Motif color (CSS hex).
    pub color: String,
    #[serde(rename = "isGraduated", default)]
    pub is_graduated: bool,
}

/// Which localized performer name to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLang {
    Ja,
    #[default]
    En,
}

impl NameLang {
    /// Picks the name language matching the UI locale.
    pub fn from_locale(locale: &LanguageIdentifier) -> Self {
        if locale.language.as_str() == "ja" {
            NameLang::Ja
        } else {
            NameLang::En
        }
    }
}

impl Performer {
    pub fn name(&self, lang: NameLang) -> &str {
        match lang {
            NameLang::Ja => &self.ja,
            NameLang::En => &self.en,
        }
    }
}

/// Immutable lookup tables built once at startup.
#[derive(Debug, Clone, Default)]
pub struct PerformerTable {
    performers: HashMap<PerformerId, Performer>,
    channels: HashMap<ChannelId, PerformerId>,
}

impl PerformerTable {
    /// Parses the embedded tables.
    ///
    /// The tables ship inside the binary, so a parse failure means a broken
    /// build artifact and is fatal.
    pub fn load() -> Result<Self, CatalogError> {
        let performers = parse_embedded(ARTISTS_FILE)?;
        let channels = parse_embedded(CHANNELS_FILE)?;
        Ok(Self {
            performers,
            channels,
        })
    }

    pub fn get(&self, id: &PerformerId) -> Option<&Performer> {
        self.performers.get(id)
    }

    pub fn performer_for_channel(&self, channel: &ChannelId) -> Option<&PerformerId> {
        self.channels.get(channel)
    }

    /// Localized performer names for a clip, with external (guest)
    /// performers appended.
    ///
    /// An id with no table entry is logged and omitted; display degrades
    /// instead of failing the clip.
    pub fn names_for_clip(&self, clip: &ClipRecord, lang: NameLang) -> Vec<String> {
        let mut names: Vec<String> = clip
            .performer_ids
            .iter()
            .filter_map(|id| match self.get(id) {
                Some(performer) => Some(performer.name(lang).to_string()),
                None => {
                    warn!("Artist not found for ID: {id}");
                    None
                }
            })
            .collect();
        if let Some(external) = &clip.external_performer_names {
            names.extend(external.iter().cloned());
        }
        names
    }

    #[cfg(test)]
    pub(crate) fn from_maps(
        performers: HashMap<PerformerId, Performer>,
        channels: HashMap<ChannelId, PerformerId>,
    ) -> Self {
        Self {
            performers,
            channels,
        }
    }
}

fn parse_embedded<T: serde::de::DeserializeOwned>(file: &str) -> Result<T, CatalogError> {
    let content = Asset::get(file).ok_or_else(|| CatalogError::Schema {
        document: file.to_string(),
        message: "embedded file missing".to_string(),
    })?;
    serde_json::from_slice(content.data.as_ref()).map_err(|e| CatalogError::Schema {
        document: file.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::ClipsDocument;

    fn table_with(id: &str, ja: &str, en: &str) -> PerformerTable {
        let mut performers = HashMap::new();
        performers.insert(
            PerformerId::new(id.to_string()).unwrap(),
            Performer {
                ja: ja.to_string(),
                jah: ja.to_string(),
                en: en.to_string(),
                color: "#ff5f9c".to_string(),
                is_graduated: false,
            },
        );
        PerformerTable::from_maps(performers, HashMap::new())
    }

    fn clip_with_performers(json_artists: &str, external: Option<&str>) -> ClipRecord {
        let external_field = match external {
            Some(e) => format!(r#","externalArtists": {e}"#),
            None => String::new(),
        };
        let json = format!(
            r#"{{
                "videoId": "11111111111",
                "songTitle": "Song",
                "artists": {json_artists},
                "startTimeSecs": 0,
                "endTimeSecs": 10
                {external_field}
            }}"#
        );
        let doc: ClipsDocument = serde_json::from_str(&format!(
            r#"{{"018f3b1e-0000-7000-8000-000000000001": {json}}}"#
        ))
        .unwrap();
        let clip = doc.iter().next().unwrap().1.clone();
        clip
    }

    #[test]
    fn embedded_tables_parse() {
        let table = PerformerTable::load().expect("embedded tables must be valid");
        assert!(!table.performers.is_empty());
        assert!(!table.channels.is_empty());
    }

    #[test]
    fn names_resolve_in_selected_language() {
        let table = table_with("miko", "さくらみこ", "Sakura Miko");
        let clip = clip_with_performers(r#"["miko"]"#, None);

        assert_eq!(
            table.names_for_clip(&clip, NameLang::Ja),
            vec!["さくらみこ".to_string()]
        );
        assert_eq!(
            table.names_for_clip(&clip, NameLang::En),
            vec!["Sakura Miko".to_string()]
        );
    }

    #[test]
    fn lookup_miss_is_omitted_not_fatal() {
        let table = table_with("miko", "さくらみこ", "Sakura Miko");
        let clip = clip_with_performers(r#"["miko", "unknown-id"]"#, None);

        let names = table.names_for_clip(&clip, NameLang::En);
        assert_eq!(names, vec!["Sakura Miko".to_string()]);
    }

    #[test]
    fn external_performers_are_appended() {
        let table = table_with("miko", "さくらみこ", "Sakura Miko");
        let clip = clip_with_performers(r#"["miko"]"#, Some(r#"["Guest Singer"]"#));

        let names = table.names_for_clip(&clip, NameLang::En);
        assert_eq!(
            names,
            vec!["Sakura Miko".to_string(), "Guest Singer".to_string()]
        );
    }

    #[test]
    fn name_lang_follows_locale() {
        let ja: LanguageIdentifier = "ja".parse().unwrap();
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        assert_eq!(NameLang::from_locale(&ja), NameLang::Ja);
        assert_eq!(NameLang::from_locale(&en), NameLang::En);
    }
}
