// SPDX-License-Identifier: MPL-2.0
//! Transport buttons: previous, play/pause, next.

use iced::widget::{button, row, text, tooltip, Row, Text};
use iced::{Element, Length};

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};

fn transport_button<'a>(
    label: &'a str,
    tip: String,
    message: Message,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = button(text(label).size(sizing::TEXT_MD))
        .on_press(message)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into();

    tooltip(content, Text::new(tip), tooltip::Position::Top)
        .gap(4)
        .into()
}

/// Renders the transport row.
pub fn view<'a>(ctx: &ViewContext<'a>, is_playing: bool) -> Element<'a, Message> {
    let previous = transport_button(
        "|<",
        ctx.i18n.tr("previous-tooltip"),
        Message::PreviousClip,
    );

    let (play_pause_label, play_pause_tip) = if is_playing {
        ("||", ctx.i18n.tr("pause-tooltip"))
    } else {
        (">", ctx.i18n.tr("play-tooltip"))
    };
    let play_pause = transport_button(play_pause_label, play_pause_tip, Message::TogglePlayback);

    let next = transport_button(">|", ctx.i18n.tr("next-tooltip"), Message::NextClip);

    let transport: Row<'a, Message> = row![previous, play_pause, next]
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center);

    transport.into()
}
