//! Keyboard history.

use super::{History, falling, rising};
use crate::input::KeyboardFrame;
use crate::types::Key;

/// Last [`SNAPSHOT_CAPACITY`](super::SNAPSHOT_CAPACITY) keyboard frames.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSnapshot {
    history: History<KeyboardFrame>,
}

impl KeyboardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's frame. Call once per tick, changed or not.
    pub fn add_input(&mut self, frame: KeyboardFrame) {
        self.history.push(frame);
    }

    /// Whether `key` was held `frames_ago` ticks back. `false` past history.
    pub fn is_key(&self, key: Key, frames_ago: usize) -> bool {
        self.history
            .get(frames_ago)
            .is_some_and(|frame| frame.is_key_down(key))
    }

    /// Pressed this tick.
    pub fn is_key_down(&self, key: Key) -> bool {
        rising(self.is_key(key, 0), self.is_key(key, 1))
    }

    /// Released this tick.
    pub fn is_key_up(&self, key: Key) -> bool {
        falling(self.is_key(key, 0), self.is_key(key, 1))
    }

    /// Held this tick.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.is_key(key, 0)
    }

    #[inline]
    pub fn history(&self) -> &History<KeyboardFrame> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SNAPSHOT_CAPACITY;

    fn keys(keys: &[Key]) -> KeyboardFrame {
        KeyboardFrame::from(keys)
    }

    #[test]
    fn test_key_down_only_on_first_frame() {
        let mut snapshot = KeyboardSnapshot::new();
        snapshot.add_input(keys(&[Key::KeyW]));
        assert!(snapshot.is_key_down(Key::KeyW));
        assert!(snapshot.is_key_pressed(Key::KeyW));

        snapshot.add_input(keys(&[Key::KeyW]));
        assert!(!snapshot.is_key_down(Key::KeyW));
        assert!(snapshot.is_key_pressed(Key::KeyW));
    }

    #[test]
    fn test_key_up_after_release() {
        let mut snapshot = KeyboardSnapshot::new();
        snapshot.add_input(keys(&[Key::KeyW]));
        assert!(!snapshot.is_key_up(Key::KeyW));

        snapshot.add_input(keys(&[]));
        assert!(snapshot.is_key_up(Key::KeyW));
        assert!(!snapshot.is_key_pressed(Key::KeyW));

        snapshot.add_input(keys(&[]));
        assert!(!snapshot.is_key_up(Key::KeyW));
    }

    #[test]
    fn test_empty_snapshot_reports_nothing() {
        let snapshot = KeyboardSnapshot::new();
        assert!(!snapshot.is_key(Key::KeyA, 0));
        assert!(!snapshot.is_key_down(Key::KeyA));
        assert!(!snapshot.is_key_up(Key::KeyA));
    }

    #[test]
    fn test_history_bound_after_fifteen_ticks() {
        let mut snapshot = KeyboardSnapshot::new();
        for tick in 0..15 {
            // only tick 5 holds W, which is 9 ticks before the last one
            let frame = if tick == 5 { keys(&[Key::KeyW]) } else { keys(&[]) };
            snapshot.add_input(frame);
        }
        assert_eq!(snapshot.len(), SNAPSHOT_CAPACITY);
        assert!(snapshot.is_key(Key::KeyW, 9));
        assert!(!snapshot.is_key(Key::KeyW, 8));
        assert!(!snapshot.is_key(Key::KeyW, 10));
    }

    #[test]
    fn test_clear_resets_edges() {
        let mut snapshot = KeyboardSnapshot::new();
        snapshot.add_input(keys(&[Key::Space]));
        snapshot.clear();
        assert!(snapshot.is_empty());

        snapshot.add_input(keys(&[]));
        assert!(!snapshot.is_key_up(Key::Space));
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut snapshot = KeyboardSnapshot::new();
        snapshot.add_input(keys(&[Key::KeyA]));
        for _ in 0..3 {
            assert!(snapshot.is_key_down(Key::KeyA));
        }
        assert_eq!(snapshot.len(), 1);
    }
}
