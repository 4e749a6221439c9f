// SPDX-License-Identifier: MPL-2.0
//! Playback phase state machine.
//!
//! This module defines the phases of the clip playback engine.

/// Represents the engine's relationship to the current clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// No clip is loaded; the engine is inert.
    #[default]
    Idle,
    /// A clip is current but its player widget has not reported ready yet.
    /// Boundary checks are suspended in this phase.
    Seeking,
    /// The widget is playing the clip's excerpt.
    Playing,
    /// The widget is paused within the clip's excerpt.
    Paused,
}

impl PlaybackPhase {
    /// Returns true if the engine is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the engine is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if no clip is loaded.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the engine is waiting for the widget to become ready.
    #[must_use]
    pub fn is_seeking(self) -> bool {
        matches!(self, Self::Seeking)
    }

    /// Returns true if a clip is loaded and the widget is authoritative
    /// (playing or paused).
    #[must_use]
    pub fn is_synchronized(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}
