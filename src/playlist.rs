// SPDX-License-Identifier: MPL-2.0
//! Playlist sequencer for managing clip order and navigation state.
//!
//! This component owns the ordered clip ids and the current index,
//! providing a single source of truth for which clip is active. Indices
//! are stable for the lifetime of one catalog load; nothing reorders the
//! sequence while playing.

use crate::catalog::ClipsDocument;
use crate::domain::ClipId;

/// Navigates an ordered sequence of clips with wraparound at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<ClipId>,
    current_index: usize,
}

impl Playlist {
    /// Creates a new empty playlist.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_index: 0,
        }
    }

    /// Builds the playlist from a loaded clips document, in entry order.
    pub fn from_catalog(clips: &ClipsDocument) -> Self {
        Self {
            entries: clips.ids().copied().collect(),
            current_index: 0,
        }
    }

    /// Sets the current index if it is in range.
    ///
    /// An out-of-range index is swallowed as a no-op and reported via the
    /// return value; the UI event source already constrains the range, so
    /// this is a caller error, not a fatal condition.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    /// Advances to the next clip, wrapping last to first.
    ///
    /// Returns `None` on an empty playlist; a playlist of size 1
    /// re-selects itself.
    pub fn next(&mut self) -> Option<&ClipId> {
        if self.entries.is_empty() {
            self.current_index = 0;
            return None;
        }
        self.current_index = (self.current_index + 1) % self.entries.len();
        self.entries.get(self.current_index)
    }

    /// Steps back to the previous clip, wrapping first to last.
    ///
    /// Returns `None` on an empty playlist; a playlist of size 1
    /// re-selects itself.
    pub fn previous(&mut self) -> Option<&ClipId> {
        if self.entries.is_empty() {
            self.current_index = 0;
            return None;
        }
        let len = self.entries.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.entries.get(self.current_index)
    }

    /// The id of the current clip, if the playlist is non-empty.
    pub fn current(&self) -> Option<&ClipId> {
        self.entries.get(self.current_index)
    }

    /// The current index. Meaningless when the playlist is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the total number of clips.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the playlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}
