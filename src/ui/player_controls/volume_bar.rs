// SPDX-License-Identifier: MPL-2.0
//! Volume slider.

use iced::widget::{row, slider, text, Row};
use iced::{Element, Length};

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};

/// Renders the volume slider with its percent readout.
///
/// The slider carries the user volume before per-clip scaling; the clip's
/// normalization hint is applied downstream and never shown here.
pub fn view<'a>(ctx: &ViewContext<'a>, volume: f32) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr("volume-tooltip")).size(sizing::TEXT_SM);

    let bar = slider(0.0..=100.0, volume, Message::SetVolume)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
        .step(1.0);

    let readout = text(format!("{}%", volume.round() as u8)).size(sizing::TEXT_SM);

    let controls: Row<'a, Message> = row![label, bar, readout]
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center);

    controls.into()
}
