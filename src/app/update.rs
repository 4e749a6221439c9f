// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application update loop.

use iced::Task;
use log::{info, warn};

use super::{fetch_catalog, App, CatalogState, Message};
use crate::domain::VolumePercent;
use crate::engine::EngineEvent;
use crate::infrastructure::LocalWidget;
use crate::ui::{player_controls, playlist_panel};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CatalogLoaded(Ok(catalog)) => {
            info!(
                "catalog ready: {} clips, {} videos",
                catalog.clips.len(),
                catalog.videos.len()
            );
            app.playlist = crate::playlist::Playlist::from_catalog(&catalog.clips);
            app.catalog = CatalogState::Ready(catalog);
            load_current_clip(app)
        }
        Message::CatalogLoaded(Err(err)) => {
            warn!("catalog load failed: {err}");
            app.catalog = CatalogState::Failed(err);
            Task::none()
        }
        Message::RetryCatalog => {
            app.catalog = CatalogState::Loading;
            fetch_catalog(app.catalog_base_url.clone())
        }
        Message::Controls(message) => handle_controls(app, message),
        Message::Playlist(playlist_panel::Message::ClipSelected(index)) => {
            if app.playlist.select(index) {
                load_current_clip(app)
            } else {
                Task::none()
            }
        }
        Message::WidgetReady(generation) => {
            app.engine.handle_ready(generation);
            Task::none()
        }
        Message::WidgetStateChanged(generation) => {
            match app.engine.handle_state_change(generation) {
                Some(EngineEvent::AdvanceRequested) => advance(app),
                None => Task::none(),
            }
        }
        Message::PollTick(generation) => match app.engine.poll_tick(generation) {
            Some(EngineEvent::AdvanceRequested) => advance(app),
            None => Task::none(),
        },
    }
}

fn handle_controls(app: &mut App, message: player_controls::Message) -> Task<Message> {
    match message {
        player_controls::Message::TogglePlayback => {
            app.engine.toggle_play_pause();
            Task::none()
        }
        player_controls::Message::PreviousClip => {
            app.playlist.previous();
            load_current_clip(app)
        }
        player_controls::Message::NextClip => {
            app.playlist.next();
            load_current_clip(app)
        }
        player_controls::Message::SeekPreview(position) => {
            app.controls.seek_preview_position = Some(position);
            Task::none()
        }
        player_controls::Message::SeekCommit => {
            if let Some(position) = app.controls.seek_preview_position.take() {
                app.engine.seek_to(position);
            }
            Task::none()
        }
        player_controls::Message::SetVolume(volume) => {
            app.engine.set_volume(VolumePercent::from_f32(volume));
            Task::none()
        }
        player_controls::Message::ToggleDetails => {
            app.controls.details_open = !app.controls.details_open;
            Task::none()
        }
    }
}

/// Auto-advance after a clip reached its end boundary.
fn advance(app: &mut App) -> Task<Message> {
    app.playlist.next();
    load_current_clip(app)
}

/// Tears down the old widget and brings up one for the current playlist
/// entry. The ready notification is delivered as a task so it flows
/// through the normal message path with its generation token.
fn load_current_clip(app: &mut App) -> Task<Message> {
    let CatalogState::Ready(catalog) = &app.catalog else {
        return Task::none();
    };
    let Some(id) = app.playlist.current().copied() else {
        app.engine.clear();
        return Task::none();
    };
    let Some(record) = catalog.clips.get(&id).cloned() else {
        warn!("playlist references unknown clip {id}");
        app.engine.clear();
        return Task::none();
    };

    // The simulated widget needs the source video's full duration so
    // absolute seeks clamp the same way an embedded player would.
    let video_duration = catalog
        .videos
        .get(&record.video_id)
        .map_or(record.end_time_secs, |video| video.duration_secs);

    let widget = LocalWidget::new(video_duration);
    let generation = app.engine.load_clip(id, record, Box::new(widget));
    app.controls.seek_preview_position = None;

    Task::done(Message::WidgetReady(generation))
}
