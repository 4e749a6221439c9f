// SPDX-License-Identifier: MPL-2.0
//! User interface components for the player.

pub mod design_tokens;
pub mod player_controls;
pub mod playlist_panel;
pub mod status;
pub mod time_format;
