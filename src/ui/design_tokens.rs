// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by all player views.
//!
//! The spacing scale follows an 8px grid; sizes are in logical pixels.

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Component sizes.
pub mod sizing {
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_MD: f32 = 16.0;
    pub const TEXT_LG: f32 = 20.0;
    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 100.0;
    pub const PLAYLIST_WIDTH: f32 = 320.0;
}
