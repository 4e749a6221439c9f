// SPDX-License-Identifier: MPL-2.0
//! Full-window status screens: loading, catalog error, empty playlist.

use iced::widget::{button, column, container, text, Column};
use iced::{alignment, Element, Length};

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};

fn centered<'a, M: 'a>(content: Column<'a, M>) -> Element<'a, M> {
    container(content.spacing(spacing::SM).align_x(iced::Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Shown while the catalog documents are being fetched.
pub fn loading<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    centered(column![text(i18n.tr("loading-message")).size(sizing::TEXT_MD)])
}

/// Shown when the catalog could not be loaded.
///
/// Offers a retry action; the message body is the localized error
/// category followed by the technical detail.
pub fn error<'a, M: Clone + 'a>(i18n: &I18n, error: &Error, retry: M) -> Element<'a, M> {
    let headline = match error {
        Error::Catalog(inner) => i18n.tr(inner.i18n_key()),
        Error::Io(_) => i18n.tr("error-io"),
        Error::Config(_) => i18n.tr("error-config"),
    };

    centered(column![
        text(headline).size(sizing::TEXT_MD),
        text(error.to_string()).size(sizing::TEXT_SM),
        button(text(i18n.tr("retry-button")).size(sizing::TEXT_SM))
            .on_press(retry)
            .padding(spacing::XS),
    ])
}

/// Shown when the catalog loaded but holds no clips.
pub fn empty_playlist<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    centered(column![text(i18n.tr("empty-playlist")).size(sizing::TEXT_MD)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn renders_all_status_screens() {
        let i18n = I18n::default();
        let _loading: Element<'_, TestMessage> = loading(&i18n);
        let _empty: Element<'_, TestMessage> = empty_playlist(&i18n);
        let failure = Error::Catalog(CatalogError::Status {
            url: "http://localhost/clips.min.json".to_string(),
            status: 404,
        });
        let _error = error(&i18n, &failure, TestMessage::Retry);
    }
}
