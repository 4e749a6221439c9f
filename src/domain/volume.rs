// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for playback.
//!
//! This module provides a type-safe wrapper for the user volume, ensuring it
//! is always within the valid range (0–100 percent).

use crate::config::{DEFAULT_VOLUME_PERCENT, MAX_VOLUME_PERCENT, MIN_VOLUME_PERCENT};

/// User volume in percent, guaranteed to be within 0–100.
///
/// This newtype enforces validity at the type level, making it impossible
/// to hand the embedded player an out-of-range volume.
///
/// # Example
///
/// ```
/// use clip_lens::domain::VolumePercent;
///
/// let vol = VolumePercent::new(50);
/// assert_eq!(vol.value(), 50);
///
/// // Out-of-range input is clamped before reaching the player
/// let too_loud = VolumePercent::from_f32(250.0);
/// assert_eq!(too_loud.value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Creates a new volume, clamping to the valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(MIN_VOLUME_PERCENT, MAX_VOLUME_PERCENT))
    }

    /// Creates a volume from a slider value, rounding and clamping.
    ///
    /// Negative and non-finite input clamps to the minimum.
    #[must_use]
    pub fn from_f32(percent: f32) -> Self {
        if !percent.is_finite() || percent <= 0.0 {
            return Self(MIN_VOLUME_PERCENT);
        }
        if percent >= f32::from(MAX_VOLUME_PERCENT) {
            return Self(MAX_VOLUME_PERCENT);
        }
        Self::new(percent.round() as u8)
    }

    /// Returns the volume value in percent.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the volume is zero.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == MIN_VOLUME_PERCENT
    }

    /// Scales this volume by a per-clip normalization hint (1–100).
    ///
    /// The result is what is actually forwarded to the player.
    #[must_use]
    pub fn scaled_by_hint(self, hint_percent: u8) -> Self {
        let scaled = u16::from(self.0) * u16::from(hint_percent) / 100;
        Self::new(scaled as u8)
    }
}

impl Default for VolumePercent {
    fn default() -> Self {
        Self(DEFAULT_VOLUME_PERCENT)
    }
}
