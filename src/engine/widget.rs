// SPDX-License-Identifier: MPL-2.0
//! Boundary to the embedded video widget.
//!
//! The widget is an external component the engine does not own: commands
//! may silently fail while it is not ready, and its internal state can
//! change without any command being issued. The trait below is the only
//! surface the engine talks through, so tests substitute a scripted
//! implementation.

use std::fmt;

use crate::domain::VolumePercent;

/// Commands sent to a widget that is not ready fail with this error.
///
/// Readiness is reported asynchronously by the widget itself; until then
/// every command is rejected and the caller must treat it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetUnready;

impl fmt::Display for WidgetUnready {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "video widget is not ready")
    }
}

impl std::error::Error for WidgetUnready {}

pub type WidgetResult<T> = Result<T, WidgetUnready>;

/// The widget's own playback state, as it reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

/// Identity token for one widget instantiation.
///
/// Every clip load tears the widget down and brings up a new one; the
/// token increments on each load. Callbacks and timer ticks carry the
/// token they were armed with, and the engine discards any event whose
/// token no longer matches the live widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetGeneration(u64);

impl WidgetGeneration {
    pub fn first() -> Self {
        WidgetGeneration(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        WidgetGeneration(self.0 + 1)
    }
}

impl fmt::Display for WidgetGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Control surface of the embedded video widget.
///
/// All positions are absolute seconds on the underlying video's timeline,
/// not clip-relative. Commands are fire-and-forget beyond the readiness
/// check; the widget confirms nothing.
pub trait VideoWidget {
    /// Jumps to an absolute position on the video timeline.
    fn seek_to(&mut self, position_secs: f64, allow_seek_ahead: bool) -> WidgetResult<()>;

    /// Starts or resumes playback.
    fn play_video(&mut self) -> WidgetResult<()>;

    /// Pauses playback.
    fn pause_video(&mut self) -> WidgetResult<()>;

    /// Applies an effective volume. No feedback on whether it took.
    fn set_volume(&mut self, volume: VolumePercent) -> WidgetResult<()>;

    /// Current absolute position on the video timeline.
    fn current_time(&self) -> WidgetResult<f64>;

    /// The state the widget itself believes it is in.
    fn player_state(&self) -> WidgetResult<PlayerState>;
}
