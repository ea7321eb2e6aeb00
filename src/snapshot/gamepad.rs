//! Gamepad history.

use super::{History, falling, rising};
use crate::input::{Axis, GamepadFrame};
use crate::types::{ButtonPosition, Hand};

/// Last [`SNAPSHOT_CAPACITY`](super::SNAPSHOT_CAPACITY) gamepad frames.
///
/// A button counts as active when its value is above zero.
#[derive(Debug, Clone, Default)]
pub struct GamepadSnapshot {
    history: History<GamepadFrame>,
}

impl GamepadSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's frame. Push an empty frame on ticks with no pad.
    pub fn add_input(&mut self, frame: GamepadFrame) {
        self.history.push(frame);
    }

    /// Whether `position` was active `frames_ago` ticks back.
    pub fn is_button(&self, position: ButtonPosition, frames_ago: usize) -> bool {
        self.history
            .get(frames_ago)
            .is_some_and(|frame| frame.is_button_active(position))
    }

    pub fn is_button_down(&self, position: ButtonPosition) -> bool {
        rising(self.is_button(position, 0), self.is_button(position, 1))
    }

    pub fn is_button_up(&self, position: ButtonPosition) -> bool {
        falling(self.is_button(position, 0), self.is_button(position, 1))
    }

    pub fn is_button_pressed(&self, position: ButtonPosition) -> bool {
        self.is_button(position, 0)
    }

    /// Fixed-point `(x, y)` of `hand`'s stick in the latest frame.
    pub fn get_axes(&self, hand: Hand) -> Option<(i64, i64)> {
        self.history
            .latest()
            .and_then(|frame| frame.axis(hand))
            .map(|axis: &Axis| axis.value)
    }

    #[inline]
    pub fn history(&self) -> &History<GamepadFrame> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
