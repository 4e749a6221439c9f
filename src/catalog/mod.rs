// SPDX-License-Identifier: MPL-2.0
//! The clip/video catalog: document schemas, the loader, and the embedded
//! performer lookup tables.

pub mod loader;
pub mod performers;
pub mod records;

pub use loader::{fetch, Catalog};
pub use performers::{NameLang, Performer, PerformerTable};
pub use records::{ClipRecord, ClipsDocument, PrivacyStatus, VideoRecord, VideosDocument, VolumeHint};
