// SPDX-License-Identifier: MPL-2.0
//! `clip_lens` is a continuous player for curated music clip excerpts,
//! built with the Iced GUI framework.
//!
//! It sequences excerpts of longer videos into a playlist, keeps playback
//! synchronized with an embedded video widget it does not control, and
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/clip_lens/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod playlist;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
