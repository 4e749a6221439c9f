// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders one of the status screens while the catalog is loading or
//! failed, and the player layout (playlist beside the video area and
//! controls) once it is ready.

use iced::widget::{column, container, row, text, Column, Row};
use iced::{alignment, Element, Length};

use super::{App, CatalogState, Message};
use crate::catalog::{Catalog, NameLang};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::player_controls::{self, ClipContext, PlaybackSnapshot};
use crate::ui::{playlist_panel, status};

pub fn view(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &app.catalog {
        CatalogState::Loading => status::loading(&app.i18n),
        CatalogState::Failed(err) => status::error(&app.i18n, err, Message::RetryCatalog),
        CatalogState::Ready(catalog) if catalog.clips.is_empty() => {
            status::empty_playlist(&app.i18n)
        }
        CatalogState::Ready(catalog) => view_player(app, catalog),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_player<'a>(app: &'a App, catalog: &'a Catalog) -> Element<'a, Message> {
    let name_lang = NameLang::from_locale(app.i18n.current_locale());

    let panel_ctx = playlist_panel::ViewContext {
        i18n: &app.i18n,
        performers: &app.performers,
        name_lang,
    };
    let panel = playlist_panel::view(&panel_ctx, &catalog.clips, app.playlist.current_index())
        .map(Message::Playlist);

    let main: Element<'a, Message> = match app.engine.active_clip() {
        Some((_, record)) => {
            let names = app.performers.names_for_clip(record, name_lang);
            let video = catalog.videos.get(&record.video_id);

            let snapshot = PlaybackSnapshot {
                is_playing: app.engine.phase().is_playing(),
                position_secs: app.engine.position_secs(),
                duration_secs: app.engine.duration_secs(),
                volume: f32::from(app.engine.volume().value()),
            };
            let clip = ClipContext {
                record,
                performer_names: names,
                video,
            };
            let controls_ctx = player_controls::ViewContext { i18n: &app.i18n };
            let controls =
                player_controls::view(&controls_ctx, &app.controls, &snapshot, &clip)
                    .map(Message::Controls);

            let stage: Column<'a, Message> = column![video_area(app), controls]
                .spacing(spacing::SM)
                .width(Length::FillPortion(1));
            stage.into()
        }
        None => status::empty_playlist(&app.i18n),
    };

    let layout: Row<'a, Message> = row![panel, main]
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .height(Length::Fill);

    layout.into()
}

/// Placeholder surface standing where the embedded video renders.
fn video_area(app: &App) -> Element<'_, Message> {
    let label = match app.engine.active_clip() {
        Some((_, record)) => format!("{}: {}", app.i18n.tr("now-playing"), record.song_title),
        None => app.i18n.tr("now-playing"),
    };

    container(text(label).size(sizing::TEXT_MD))
        .width(Length::Fill)
        .height(Length::FillPortion(2))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
