// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Catalog**: Data source location and document names
//! - **Polling**: Playback position polling cadence
//! - **Volume**: User volume settings
//! - **Seek bar**: Slider precision

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default base URL for the two catalog documents.
///
/// Matches the dev server layout the catalog pipeline publishes to; override
/// via `catalog_base_url` in `settings.toml` or the positional CLI argument.
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:5173/music_data";

/// File name of the clips document under the catalog base URL.
pub const CLIPS_DOCUMENT: &str = "clips.min.json";

/// File name of the videos document under the catalog base URL.
pub const VIDEOS_DOCUMENT: &str = "videos.min.json";

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Interval between playback position polls while a clip is playing.
///
/// Tight enough for smooth seek-bar motion, loose enough to avoid
/// saturating the embedded player's API.
pub const POLL_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default user volume in percent.
pub const DEFAULT_VOLUME_PERCENT: u8 = 100;

/// Minimum user volume in percent.
pub const MIN_VOLUME_PERCENT: u8 = 0;

/// Maximum user volume in percent.
pub const MAX_VOLUME_PERCENT: u8 = 100;

// ==========================================================================
// Seek Bar Defaults
// ==========================================================================

/// Seek slider step in seconds (1ms precision).
/// f64 has ~15 significant digits, so even for multi-hour source videos
/// there is plenty of precision for millisecond accuracy.
pub const SEEK_SLIDER_STEP_SECS: f64 = 0.001;
