// SPDX-License-Identifier: MPL-2.0
//! Seek bar over the clip excerpt.

use iced::widget::{row, slider, text, Row};
use iced::{Element, Length};

use super::{Message, PlaybackSnapshot};
use crate::config::SEEK_SLIDER_STEP_SECS;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::time_format::format_time_from_secs;

/// Renders the timeline slider and the current/total time display.
///
/// The slider works in clip-relative seconds. During a drag the preview
/// position is shown instead of the live position, and the actual seek
/// only happens on release.
pub fn view<'a>(snapshot: &PlaybackSnapshot, preview: Option<f64>) -> Element<'a, Message> {
    let shown_position = preview.unwrap_or(snapshot.position_secs);

    let timeline = slider(
        0.0..=snapshot.duration_secs.max(0.0),
        shown_position,
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .width(Length::FillPortion(1))
    .step(SEEK_SLIDER_STEP_SECS);

    let time_display = text(format!(
        "{} / {}",
        format_time_from_secs(shown_position),
        format_time_from_secs(snapshot.duration_secs)
    ))
    .size(sizing::TEXT_SM);

    let bar: Row<'a, Message> = row![timeline, time_display]
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center);

    bar.into()
}
