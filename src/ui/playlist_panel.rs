// SPDX-License-Identifier: MPL-2.0
//! Scrollable playlist with one entry per clip.

use iced::widget::{button, column, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::catalog::{ClipsDocument, NameLang, PerformerTable};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::time_format::format_time_from_secs;

/// Messages emitted by the playlist panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A clip entry was clicked. Carries the playlist index.
    ClipSelected(usize),
}

/// View context for rendering the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub performers: &'a PerformerTable,
    pub name_lang: NameLang,
}

/// Renders the playlist in catalog order, highlighting the current clip.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    clips: &'a ClipsDocument,
    current_index: usize,
) -> Element<'a, Message> {
    let header = text(ctx.i18n.tr("playlist-title")).size(sizing::TEXT_MD);

    let mut entries: Column<'a, Message> = column![].spacing(spacing::XXS);
    for (index, (_, record)) in clips.iter().enumerate() {
        let marker = if index == current_index { ">" } else { " " };
        let names = ctx.performers.names_for_clip(record, ctx.name_lang);
        let label = column![
            text(format!("{marker} {}", record.song_title)).size(sizing::TEXT_SM),
            row![
                text(names.join(" / ")).size(sizing::TEXT_SM),
                text(format_time_from_secs(record.duration_secs())).size(sizing::TEXT_SM),
            ]
            .spacing(spacing::XS),
        ]
        .spacing(spacing::XXS);

        entries = entries.push(
            button(label)
                .on_press(Message::ClipSelected(index))
                .padding(spacing::XXS)
                .width(Length::Fill),
        );
    }

    let panel: Column<'a, Message> = column![header, scrollable(entries).height(Length::Fill)]
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::PLAYLIST_WIDTH));

    panel.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClipRecord;
    use crate::domain::{ClipId, PerformerId, VideoId};

    fn clips() -> ClipsDocument {
        let record = ClipRecord {
            video_id: VideoId::test_id_1(),
            song_title: "Test Song".to_string(),
            performer_ids: vec![PerformerId::new("miko".to_string()).unwrap()],
            external_performer_names: None,
            clipped_video_id: None,
            start_time_secs: 0.0,
            end_time_secs: 30.0,
            clip_tags: None,
            volume_hint: None,
        };
        ClipsDocument::from_entries(vec![(ClipId::new(uuid::Uuid::nil()), record)])
    }

    #[test]
    fn renders_entries_with_empty_performer_table() {
        let i18n = I18n::default();
        let performers = PerformerTable::from_maps(Default::default(), Default::default());
        let ctx = ViewContext {
            i18n: &i18n,
            performers: &performers,
            name_lang: NameLang::En,
        };
        let clips = clips();
        let _element = view(&ctx, &clips, 0);
    }
}
