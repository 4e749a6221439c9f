// SPDX-License-Identifier: MPL-2.0
//! Clock-driven stand-in for the embedded video widget.
//!
//! Plays a virtual video timeline against the wall clock. It honors the
//! same contract as a real embedded player: commands fail until the
//! widget is ready, seeks land on the absolute timeline, and the reported
//! position advances on its own while playing.

use std::time::Instant;

use crate::domain::VolumePercent;
use crate::engine::widget::{PlayerState, VideoWidget, WidgetResult, WidgetUnready};

/// Simulated video widget whose position advances with real time.
pub struct LocalWidget {
    ready: bool,
    state: PlayerState,
    /// Absolute position at the last play, pause or seek transition.
    anchor_secs: f64,
    anchor_at: Instant,
    duration_secs: f64,
    volume: VolumePercent,
}

impl LocalWidget {
    /// Creates a widget for a video of the given duration, ready at once.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            ready: true,
            state: PlayerState::Cued,
            anchor_secs: 0.0,
            anchor_at: Instant::now(),
            duration_secs,
            volume: VolumePercent::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn unready(duration_secs: f64) -> Self {
        let mut widget = Self::new(duration_secs);
        widget.ready = false;
        widget
    }

    #[cfg(test)]
    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn volume(&self) -> VolumePercent {
        self.volume
    }

    fn position_now(&self) -> f64 {
        let position = if self.state == PlayerState::Playing {
            self.anchor_secs + self.anchor_at.elapsed().as_secs_f64()
        } else {
            self.anchor_secs
        };
        position.min(self.duration_secs)
    }

    fn rebase(&mut self, position_secs: f64) {
        self.anchor_secs = position_secs.clamp(0.0, self.duration_secs);
        self.anchor_at = Instant::now();
    }

    fn guard(&self) -> WidgetResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(WidgetUnready)
        }
    }
}

impl VideoWidget for LocalWidget {
    fn seek_to(&mut self, position_secs: f64, _allow_seek_ahead: bool) -> WidgetResult<()> {
        self.guard()?;
        self.rebase(position_secs);
        Ok(())
    }

    fn play_video(&mut self) -> WidgetResult<()> {
        self.guard()?;
        let position = self.position_now();
        self.rebase(position);
        self.state = PlayerState::Playing;
        Ok(())
    }

    fn pause_video(&mut self) -> WidgetResult<()> {
        self.guard()?;
        let position = self.position_now();
        self.rebase(position);
        self.state = PlayerState::Paused;
        Ok(())
    }

    fn set_volume(&mut self, volume: VolumePercent) -> WidgetResult<()> {
        self.guard()?;
        self.volume = volume;
        Ok(())
    }

    fn current_time(&self) -> WidgetResult<f64> {
        self.guard()?;
        Ok(self.position_now())
    }

    fn player_state(&self) -> WidgetResult<PlayerState> {
        self.guard()?;
        if self.state == PlayerState::Playing && self.position_now() >= self.duration_secs {
            return Ok(PlayerState::Ended);
        }
        Ok(self.state)
    }
}
