//! Keyboard frame: the set of keys held during one polling instant.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{WireError, WireResult};
use crate::types::{InputType, Key};

bitflags! {
    /// Raw key set. Bit `i` is key id `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyBits: u128 {
        const _ = !0;
    }
}

impl KeyBits {
    #[inline]
    pub const fn key(key: Key) -> Self {
        Self::from_bits_retain(1u128 << key.id())
    }
}

impl Default for KeyBits {
    fn default() -> Self {
        Self::empty()
    }
}

/// Keys pressed during one tick.
///
/// Stored as a bitset, so order and duplicates in the producer's list do not
/// matter and iteration is always ascending by key id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct KeyboardFrame {
    keys: KeyBits,
}

impl KeyboardFrame {
    pub const INPUT_TYPE: InputType = InputType::Keyboard;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw bits, rejecting ids with no [`Key`].
    pub fn try_from_bits(bits: u128) -> WireResult<Self> {
        let unknown = bits >> Key::ALL.len();
        if unknown != 0 {
            let id = Key::ALL.len() as u32 + unknown.trailing_zeros();
            return Err(WireError::UnknownKey(id as u8));
        }
        Ok(Self {
            keys: KeyBits::from_bits_retain(bits),
        })
    }

    /// Build from the 16 key-set bytes as they sit on the wire.
    pub fn try_from_bytes(bytes: [u8; 16]) -> WireResult<Self> {
        Self::try_from_bits(u128::from_le_bytes(bytes))
    }

    /// Mark `key` as held. Setting it twice is a no-op.
    pub fn set_key(&mut self, key: Key) {
        self.keys.insert(KeyBits::key(key));
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(KeyBits::key(key));
    }

    /// Whether `key` is held in this frame.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(KeyBits::key(key))
    }

    /// Held keys, ascending by id.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|key| self.is_key_down(*key))
    }

    #[inline]
    pub fn bits(&self) -> u128 {
        self.keys.bits()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.bits().count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys = KeyBits::empty();
    }
}

impl FromIterator<Key> for KeyboardFrame {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut frame = Self::new();
        for key in iter {
            frame.set_key(key);
        }
        frame
    }
}

impl From<Vec<Key>> for KeyboardFrame {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<&[Key]> for KeyboardFrame {
    fn from(keys: &[Key]) -> Self {
        keys.iter().copied().collect()
    }
}

impl From<KeyboardFrame> for Vec<Key> {
    fn from(frame: KeyboardFrame) -> Self {
        frame.keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let frame = KeyboardFrame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
    }

    #[test]
    fn test_set_key_only_once() {
        let mut frame = KeyboardFrame::new();
        frame.set_key(Key::KeyB);
        frame.set_key(Key::KeyB);
        assert_eq!(frame.len(), 1);
        assert!(frame.is_key_down(Key::KeyB));
        assert!(!frame.is_key_down(Key::KeyA));
    }

    #[test]
    fn test_release_key() {
        let mut frame = KeyboardFrame::from(vec![Key::KeyA, Key::KeyD]);
        frame.release_key(Key::KeyA);
        assert!(!frame.is_key_down(Key::KeyA));
        assert!(frame.is_key_down(Key::KeyD));
    }

    #[test]
    fn test_keys_ascending_regardless_of_input_order() {
        let frame = KeyboardFrame::from(vec![Key::IntlRo, Key::ArrowDown, Key::Minus, Key::ArrowDown]);
        let keys: Vec<Key> = frame.keys().collect();
        assert_eq!(keys, [Key::ArrowDown, Key::Minus, Key::IntlRo]);
    }

    #[test]
    fn test_bits_match_key_ids() {
        let frame = KeyboardFrame::from(&[Key::Null, Key::ArrowLeft][..]);
        assert_eq!(frame.bits(), 0b101);
        assert_eq!(KeyboardFrame::try_from_bits(0b101), Ok(frame));

        let mut bytes = [0u8; 16];
        bytes[0] = 0b101;
        assert_eq!(KeyboardFrame::try_from_bytes(bytes), Ok(frame));
    }

    #[test]
    fn test_try_from_bits_rejects_unknown_ids() {
        assert_eq!(
            KeyboardFrame::try_from_bits(1u128 << 69),
            Err(WireError::UnknownKey(69))
        );
        assert_eq!(
            KeyboardFrame::try_from_bits((1u128 << 127) | (1u128 << 100)),
            Err(WireError::UnknownKey(100))
        );
    }

    #[test]
    fn test_serde_as_key_list() {
        let frame = KeyboardFrame::from(vec![Key::KeyW, Key::Space]);
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"["Space","KeyW"]"#);
        let back: KeyboardFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
