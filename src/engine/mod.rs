// SPDX-License-Identifier: MPL-2.0
//! Playback engine driving one clip excerpt at a time.
//!
//! The engine owns the active clip, the embedded widget handle and the
//! playback phase. It never trusts the widget: every inbound callback and
//! timer tick carries a [`WidgetGeneration`] token and is discarded when
//! it refers to a widget that has since been torn down. The widget is
//! also free to change state on its own, so the engine adopts reported
//! play and pause transitions instead of echoing commands back.
//!
//! Positions inside the engine are clip-relative seconds; they are
//! translated to the video's absolute timeline only at the widget
//! boundary.

pub mod widget;

use log::{debug, info, warn};

pub use widget::{PlayerState, VideoWidget, WidgetGeneration, WidgetResult, WidgetUnready};

use crate::catalog::ClipRecord;
use crate::domain::{ClipId, PlaybackPhase, VolumePercent};

/// Side effect the caller must carry out after feeding the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The active clip reached its end boundary; load the next clip.
    AdvanceRequested,
}

struct ActiveClip {
    id: ClipId,
    record: ClipRecord,
    widget: Box<dyn VideoWidget>,
}

/// Synchronizes playback of clip excerpts over an uncontrollable widget.
pub struct PlaybackEngine {
    phase: PlaybackPhase,
    active: Option<ActiveClip>,
    generation: WidgetGeneration,
    /// Clip-relative position in seconds, clamped to `[0, duration]`.
    position_secs: f64,
    volume: VolumePercent,
    /// Set once the end boundary has fired for the active clip, so a
    /// boundary is reported at most once per load.
    advance_pending: bool,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            active: None,
            generation: WidgetGeneration::first(),
            position_secs: 0.0,
            volume: VolumePercent::default(),
            advance_pending: false,
        }
    }

    /// Tears down the current widget and installs a fresh one for `record`.
    ///
    /// Returns the generation token the caller must attach to every
    /// callback and timer tick armed for this widget. Playback starts once
    /// the widget reports ready via [`handle_ready`](Self::handle_ready).
    pub fn load_clip(
        &mut self,
        id: ClipId,
        record: ClipRecord,
        widget: Box<dyn VideoWidget>,
    ) -> WidgetGeneration {
        self.generation = self.generation.next();
        info!(
            "loading clip {} ({}) as widget {}",
            id, record.song_title, self.generation
        );
        self.active = Some(ActiveClip { id, record, widget });
        self.phase = PlaybackPhase::Seeking;
        self.position_secs = 0.0;
        self.advance_pending = false;
        self.generation
    }

    /// Drops the active clip and returns to idle.
    pub fn clear(&mut self) {
        self.active = None;
        self.phase = PlaybackPhase::Idle;
        self.position_secs = 0.0;
        self.advance_pending = false;
    }

    /// Reacts to the widget's readiness callback.
    ///
    /// Seeks to the excerpt start, applies the effective volume and starts
    /// playback. A token from a torn-down widget is discarded.
    pub fn handle_ready(&mut self, generation: WidgetGeneration) {
        if generation != self.generation {
            debug!(
                "discarding ready callback from stale widget {generation} (live: {})",
                self.generation
            );
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let start = active.record.start_time_secs;
        let effective = effective_volume(self.volume, &active.record);
        let outcome = active
            .widget
            .seek_to(start, true)
            .and_then(|()| active.widget.set_volume(effective))
            .and_then(|()| active.widget.play_video());
        match outcome {
            Ok(()) => {
                self.phase = PlaybackPhase::Playing;
                self.position_secs = 0.0;
            }
            Err(WidgetUnready) => {
                // The widget claimed ready but rejects commands; stay in
                // the seeking phase and wait for the next callback.
                warn!("widget {generation} reported ready but rejected commands");
            }
        }
    }

    /// Adopts a state transition the widget reports on its own.
    ///
    /// Play and pause originating inside the widget update the phase
    /// without echoing a command back. The position is refreshed and the
    /// end boundary checked, since a state change may coincide with one.
    pub fn handle_state_change(&mut self, generation: WidgetGeneration) -> Option<EngineEvent> {
        if generation != self.generation {
            debug!(
                "discarding state change from stale widget {generation} (live: {})",
                self.generation
            );
            return None;
        }
        let active = self.active.as_ref()?;
        let state = match active.widget.player_state() {
            Ok(state) => state,
            Err(WidgetUnready) => return None,
        };
        match state {
            PlayerState::Playing => self.phase = PlaybackPhase::Playing,
            PlayerState::Paused => self.phase = PlaybackPhase::Paused,
            PlayerState::Unstarted
            | PlayerState::Ended
            | PlayerState::Buffering
            | PlayerState::Cued => {}
        }
        self.refresh_position()
    }

    /// Periodic tick while the engine believes playback is running.
    ///
    /// Re-reads the widget position and checks the clip's end boundary.
    /// Ticks armed for a torn-down widget, or arriving while the engine
    /// is not playing, do nothing.
    pub fn poll_tick(&mut self, generation: WidgetGeneration) -> Option<EngineEvent> {
        if generation != self.generation {
            debug!(
                "discarding tick from stale widget {generation} (live: {})",
                self.generation
            );
            return None;
        }
        if self.phase != PlaybackPhase::Playing {
            return None;
        }
        self.refresh_position()
    }

    /// Seeks inside the active clip.
    ///
    /// `clip_position_secs` is clamped to `[0, duration]` and translated
    /// to the video's absolute timeline. The engine position updates
    /// optimistically once the command is accepted; an unready widget
    /// makes this a logged no-op.
    pub fn seek_to(&mut self, clip_position_secs: f64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let duration = active.record.duration_secs();
        let clamped = clip_position_secs.clamp(0.0, duration);
        let absolute = active.record.start_time_secs + clamped;
        match active.widget.seek_to(absolute, true) {
            Ok(()) => self.position_secs = clamped,
            Err(WidgetUnready) => {
                warn!("seek to {clamped:.3}s ignored: widget {} not ready", self.generation);
            }
        }
    }

    /// Toggles between playing and paused.
    ///
    /// The phase only flips once the widget accepts the command; an
    /// unready widget leaves the engine state untouched. Idle and seeking
    /// phases have nothing to toggle.
    pub fn toggle_play_pause(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let outcome = match self.phase {
            PlaybackPhase::Playing => active.widget.pause_video().map(|()| PlaybackPhase::Paused),
            PlaybackPhase::Paused => active.widget.play_video().map(|()| PlaybackPhase::Playing),
            PlaybackPhase::Idle | PlaybackPhase::Seeking => {
                debug!("play/pause toggle ignored in {:?} phase", self.phase);
                return;
            }
        };
        match outcome {
            Ok(next) => self.phase = next,
            Err(WidgetUnready) => {
                warn!("play/pause toggle ignored: widget {} not ready", self.generation);
            }
        }
    }

    /// Stores the user volume and forwards the effective volume.
    ///
    /// The effective volume scales the user volume by the clip's
    /// normalization hint. Forwarding is fire-and-forget; an unready
    /// widget still keeps the stored volume for the next ready clip.
    pub fn set_volume(&mut self, volume: VolumePercent) {
        self.volume = volume;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let effective = effective_volume(volume, &active.record);
        if active.widget.set_volume(effective).is_err() {
            debug!("volume change deferred: widget {} not ready", self.generation);
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Clip-relative position in seconds.
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Duration of the active clip, or zero when idle.
    pub fn duration_secs(&self) -> f64 {
        self.active
            .as_ref()
            .map_or(0.0, |active| active.record.duration_secs())
    }

    pub fn volume(&self) -> VolumePercent {
        self.volume
    }

    pub fn generation(&self) -> WidgetGeneration {
        self.generation
    }

    pub fn active_clip(&self) -> Option<(&ClipId, &ClipRecord)> {
        self.active
            .as_ref()
            .map(|active| (&active.id, &active.record))
    }

    /// Re-reads the widget position and checks the end boundary.
    ///
    /// Boundary checks are suspended while seeking, because the widget
    /// may briefly report a position outside the excerpt before the
    /// initial seek lands. The boundary fires at most once per load.
    fn refresh_position(&mut self) -> Option<EngineEvent> {
        let active = self.active.as_ref()?;
        let absolute = match active.widget.current_time() {
            Ok(secs) => secs,
            Err(WidgetUnready) => return None,
        };
        let record = &active.record;
        self.position_secs = (absolute - record.start_time_secs).clamp(0.0, record.duration_secs());
        if self.phase == PlaybackPhase::Seeking {
            return None;
        }
        if absolute >= record.end_time_secs && !self.advance_pending {
            self.advance_pending = true;
            info!("clip {} reached its end boundary", active.id);
            return Some(EngineEvent::AdvanceRequested);
        }
        None
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn effective_volume(user: VolumePercent, record: &ClipRecord) -> VolumePercent {
    let hint = record.volume_hint.map_or(100, |hint| hint.get());
    user.scaled_by_hint(hint)
}

// MARK: Tests

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::widget::{PlayerState, VideoWidget, WidgetResult, WidgetUnready};
    use crate::domain::VolumePercent;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        Seek(f64, bool),
        Play,
        Pause,
        SetVolume(u8),
    }

    pub struct MockState {
        pub ready: bool,
        pub time_secs: f64,
        pub state: PlayerState,
        pub commands: Vec<Command>,
    }

    /// Scripted widget: tests mutate the shared state to simulate the
    /// widget's own behavior between engine calls.
    #[derive(Clone)]
    pub struct MockWidget(pub Rc<RefCell<MockState>>);

    impl MockWidget {
        pub fn ready() -> Self {
            MockWidget(Rc::new(RefCell::new(MockState {
                ready: true,
                time_secs: 0.0,
                state: PlayerState::Unstarted,
                commands: Vec::new(),
            })))
        }

        pub fn unready() -> Self {
            let widget = Self::ready();
            widget.0.borrow_mut().ready = false;
            widget
        }

        pub fn set_time(&self, secs: f64) {
            self.0.borrow_mut().time_secs = secs;
        }

        pub fn set_state(&self, state: PlayerState) {
            self.0.borrow_mut().state = state;
        }

        pub fn commands(&self) -> Vec<Command> {
            self.0.borrow().commands.clone()
        }
    }

    impl VideoWidget for MockWidget {
        fn seek_to(&mut self, position_secs: f64, allow_seek_ahead: bool) -> WidgetResult<()> {
            let mut state = self.0.borrow_mut();
            if !state.ready {
                return Err(WidgetUnready);
            }
            state.time_secs = position_secs;
            state.commands.push(Command::Seek(position_secs, allow_seek_ahead));
            Ok(())
        }

        fn play_video(&mut self) -> WidgetResult<()> {
            let mut state = self.0.borrow_mut();
            if !state.ready {
                return Err(WidgetUnready);
            }
            state.state = PlayerState::Playing;
            state.commands.push(Command::Play);
            Ok(())
        }

        fn pause_video(&mut self) -> WidgetResult<()> {
            let mut state = self.0.borrow_mut();
            if !state.ready {
                return Err(WidgetUnready);
            }
            state.state = PlayerState::Paused;
            state.commands.push(Command::Pause);
            Ok(())
        }

        fn set_volume(&mut self, volume: VolumePercent) -> WidgetResult<()> {
            let mut state = self.0.borrow_mut();
            if !state.ready {
                return Err(WidgetUnready);
            }
            state.commands.push(Command::SetVolume(volume.value()));
            Ok(())
        }

        fn current_time(&self) -> WidgetResult<f64> {
            let state = self.0.borrow();
            if !state.ready {
                return Err(WidgetUnready);
            }
            Ok(state.time_secs)
        }

        fn player_state(&self) -> WidgetResult<PlayerState> {
            let state = self.0.borrow();
            if !state.ready {
                return Err(WidgetUnready);
            }
            Ok(state.state)
        }
    }
}
