// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only recurring event is the playback poll: while the engine is
//! playing, a timer drives position updates and end-boundary checks. The
//! subscription is dropped entirely outside of playback so an idle or
//! paused player wakes nothing up.

use iced::time;
use iced::Subscription;
use std::time::Duration;

use super::{App, Message};
use crate::config::POLL_INTERVAL_MS;

pub fn subscription(app: &App) -> Subscription<Message> {
    if app.engine.phase().is_playing() {
        let generation = app.engine.generation();
        time::every(Duration::from_millis(POLL_INTERVAL_MS))
            .with(generation)
            .map(|(generation, _instant)| Message::PollTick(generation))
    } else {
        Subscription::none()
    }
}
