// SPDX-License-Identifier: MPL-2.0
//! Clip title, performer names and the expandable details section.

use iced::widget::{button, column, row, text, Column};
use iced::{Element, Length};

use super::{ClipContext, Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::time_format::format_time_from_secs;

/// Renders the clip information block.
///
/// The header shows the song title and the resolved performer names. The
/// details section is collapsed by default and lists the source video's
/// metadata when the catalog provides it.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    clip: &ClipContext<'a>,
    details_open: bool,
) -> Element<'a, Message> {
    let title = text(clip.record.song_title.clone()).size(sizing::TEXT_LG);
    let performers = text(clip.performer_names.join(" / ")).size(sizing::TEXT_MD);

    let toggle_label = if details_open {
        ctx.i18n.tr("details-hide")
    } else {
        ctx.i18n.tr("details-show")
    };
    let toggle = button(text(toggle_label).size(sizing::TEXT_SM))
        .on_press(Message::ToggleDetails)
        .padding(spacing::XXS);

    let header = row![title, toggle]
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center);

    let mut info: Column<'a, Message> = column![header, performers]
        .spacing(spacing::XXS)
        .width(Length::Fill);

    if details_open {
        info = info.push(details(ctx, clip));
    }

    info.into()
}

fn details<'a>(ctx: &ViewContext<'a>, clip: &ClipContext<'a>) -> Element<'a, Message> {
    let mut rows: Column<'a, Message> = column![].spacing(spacing::XXS);

    if let Some(video) = clip.video {
        rows = rows.push(detail_line(
            ctx.i18n.tr("detail-video-title"),
            video.title.clone(),
        ));
        if let Some(uploader) = &video.uploader_name {
            rows = rows.push(detail_line(ctx.i18n.tr("detail-uploader"), uploader.clone()));
        }
        rows = rows.push(detail_line(
            ctx.i18n.tr("detail-published"),
            video.published_at.format("%Y-%m-%d").to_string(),
        ));
    }

    let excerpt = format!(
        "{} - {}",
        format_time_from_secs(clip.record.start_time_secs),
        format_time_from_secs(clip.record.end_time_secs)
    );
    rows = rows.push(detail_line(ctx.i18n.tr("seek-tooltip"), excerpt));

    rows = rows.push(detail_line(
        ctx.i18n.tr("detail-source-link"),
        clip.record.video_id.watch_url(),
    ));

    rows.into()
}

fn detail_line<'a>(label: String, value: String) -> Element<'a, Message> {
    row![
        text(label).size(sizing::TEXT_SM),
        text(value).size(sizing::TEXT_SM),
    ]
    .spacing(spacing::XS)
    .into()
}
