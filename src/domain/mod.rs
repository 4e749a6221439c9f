// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the catalog, engine, and UI layers.

pub mod ids;
pub mod playback;
pub mod volume;

pub use ids::{ChannelId, ClipId, PerformerId, VideoId};
pub use playback::PlaybackPhase;
pub use volume::VolumePercent;
