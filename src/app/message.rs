// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::catalog::Catalog;
use crate::engine::WidgetGeneration;
use crate::error::Error;
use crate::ui::{player_controls, playlist_panel};

/// Launch options collected by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override from the `--lang` CLI flag.
    pub lang: Option<String>,

    /// Catalog base URL from the positional CLI argument.
    pub catalog_url: Option<String>,
}

/// Messages processed by the application update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// The catalog fetch finished.
    CatalogLoaded(Result<Catalog, Error>),

    /// Retry a failed catalog fetch.
    RetryCatalog,

    /// A player control was used.
    Controls(player_controls::Message),

    /// A playlist entry was clicked.
    Playlist(playlist_panel::Message),

    /// The widget armed for this generation reported ready.
    WidgetReady(WidgetGeneration),

    /// The widget armed for this generation changed state on its own.
    WidgetStateChanged(WidgetGeneration),

    /// Periodic position poll while playback is running.
    PollTick(WidgetGeneration),
}
