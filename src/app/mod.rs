// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the playlist sequencer,
//! the playback engine and the UI components, and translates messages
//! into side effects like clip loads and catalog fetches. Policy
//! decisions (window sizing, locale resolution, catalog source) stay
//! close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use iced::{window, Element, Subscription, Task, Theme};
use log::{error, warn};
use std::fmt;

use crate::catalog::{self, Catalog, PerformerTable};
use crate::config::{self, Config};
use crate::engine::PlaybackEngine;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::playlist::Playlist;
use crate::ui::player_controls::ControlsState;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Where the catalog load currently stands.
pub enum CatalogState {
    Loading,
    Failed(Error),
    Ready(Catalog),
}

/// Root Iced application state bridging catalog data, playback and UI.
pub struct App {
    pub i18n: I18n,
    catalog_base_url: String,
    catalog: CatalogState,
    performers: PerformerTable,
    playlist: Playlist,
    engine: PlaybackEngine,
    controls: ControlsState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("playlist_len", &self.playlist.len())
            .field("phase", &self.engine.phase())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            warn!("could not read settings, using defaults: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let performers = match PerformerTable::load() {
            Ok(table) => table,
            Err(err) => {
                error!("failed to load performer tables: {err}");
                PerformerTable::default()
            }
        };

        let catalog_base_url = flags
            .catalog_url
            .unwrap_or_else(|| config.catalog_base_url().to_string());

        let app = App {
            i18n,
            catalog_base_url: catalog_base_url.clone(),
            catalog: CatalogState::Loading,
            performers,
            playlist: Playlist::new(),
            engine: PlaybackEngine::new(),
            controls: ControlsState::default(),
        };

        (app, fetch_catalog(catalog_base_url))
    }

    fn title(&self) -> String {
        match self.engine.active_clip() {
            Some((_, record)) => format!("{} - {}", record.song_title, self.i18n.tr("app-title")),
            None => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Spawns the asynchronous catalog fetch.
fn fetch_catalog(base_url: String) -> Task<Message> {
    Task::perform(
        async move { catalog::fetch(&base_url).await.map_err(Error::from) },
        Message::CatalogLoaded,
    )
}
