//! Bounded per-source input history with edge queries.
//!
//! ```text
//! add_input(f₁₄) ─→ [ f₁₄ │ f₁₃ │ f₁₂ │ ... │ f₅ ]   f₄..f₀ evicted
//!                     ^0    ^1    ^2         ^9
//! ```
//!
//! Index 0 is always the most recent frame. `add_input` runs once per tick
//! even when nothing changed, so an index means "that many ticks ago".

mod gamepad;
mod keyboard;

pub use gamepad::GamepadSnapshot;
pub use keyboard::KeyboardSnapshot;

use std::collections::VecDeque;

/// Frames kept per source.
pub const SNAPSHOT_CAPACITY: usize = 10;

/// Most-recent-first ring of frames, never longer than its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    frames: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(SNAPSHOT_CAPACITY)
    }
}

impl<T> History<T> {
    /// History holding at most `capacity` frames (at least one).
    ///
    /// Only the default capacity is allocated up front. Larger histories grow
    /// as frames arrive.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity.min(SNAPSHOT_CAPACITY) + 1),
            capacity,
        }
    }

    /// Insert at index 0, dropping the oldest frame once full.
    pub fn push(&mut self, frame: T) {
        self.frames.push_front(frame);
        self.frames.truncate(self.capacity);
    }

    /// Frame `frames_ago` ticks back. `None` past the recorded history.
    #[inline]
    pub fn get(&self, frames_ago: usize) -> Option<&T> {
        self.frames.get(frames_ago)
    }

    #[inline]
    pub fn latest(&self) -> Option<&T> {
        self.frames.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Frames from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.frames.iter()
    }
}

/// Rising edge: active now, not active one frame ago.
#[inline]
fn rising(now: bool, prev: bool) -> bool {
    now && !prev
}

/// Falling edge: not active now, active one frame ago.
#[inline]
fn falling(now: bool, prev: bool) -> bool {
    !now && prev
}
