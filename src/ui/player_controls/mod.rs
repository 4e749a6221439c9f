// SPDX-License-Identifier: MPL-2.0
//! Playback controls for the active clip.
//!
//! A toolbar with previous/play-pause/next buttons, a seek bar over the
//! clip excerpt, a volume slider, and the clip information block with an
//! expandable details section.

mod clip_info;
mod media_controls;
mod seek_bar;
mod volume_bar;

use iced::widget::{column, Column};
use iced::{Element, Length};

use crate::catalog::{ClipRecord, VideoRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;

/// Messages emitted by the player control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Step to the previous clip (wraps at the start).
    PreviousClip,

    /// Advance to the next clip (wraps at the end).
    NextClip,

    /// Seek preview: the slider is being dragged, no actual seek yet.
    /// Position in clip-relative seconds.
    SeekPreview(f64),

    /// Slider released, perform the seek to the preview position.
    SeekCommit,

    /// Adjust volume (0.0 to 100.0).
    SetVolume(f32),

    /// Expand or collapse the clip details section.
    ToggleDetails,
}

/// View context for rendering the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Transient UI state the controls own between renders.
#[derive(Debug, Clone, Default)]
pub struct ControlsState {
    /// Preview position during a seek drag, in clip-relative seconds.
    /// When `Some`, the slider shows this instead of the live position.
    pub seek_preview_position: Option<f64>,

    /// Is the clip details section expanded?
    pub details_open: bool,
}

/// Snapshot of the engine state the controls render from.
#[derive(Debug, Clone)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,

    /// Clip-relative position in seconds.
    pub position_secs: f64,

    /// Clip duration in seconds.
    pub duration_secs: f64,

    /// User volume (0.0 to 100.0), before any per-clip scaling.
    pub volume: f32,
}

/// Everything known about the clip being rendered.
pub struct ClipContext<'a> {
    pub record: &'a ClipRecord,

    /// Localized performer names, already resolved for the active locale.
    pub performer_names: Vec<String>,

    /// The source video's metadata, when the catalog has it.
    pub video: Option<&'a VideoRecord>,
}

/// Renders the full control block below the video area.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    state: &ControlsState,
    snapshot: &PlaybackSnapshot,
    clip: &ClipContext<'a>,
) -> Element<'a, Message> {
    let info = clip_info::view(ctx, clip, state.details_open);
    let seek = seek_bar::view(snapshot, state.seek_preview_position);
    let transport = media_controls::view(ctx, snapshot.is_playing);
    let volume = volume_bar::view(ctx, snapshot.volume);

    let controls: Column<'a, Message> = column![info, seek, transport, volume]
        .spacing(spacing::XS)
        .width(Length::Fill);

    controls.into()
}
