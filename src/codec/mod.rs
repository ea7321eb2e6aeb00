//! Wire frame schema and the codec that packs input frames into it.
//!
//! One wire frame is three segments back to back, little-endian, no padding:
//!
//! ```text
//! offset  len  field
//!  0       1   keyboard tag (4)
//!  1      16   key bits, bit i = key id i
//! 17       1   mouse tag (3)
//! 18       4   x      u32
//! 22       4   y      u32
//! 26       1   isDown (bit 0)
//! 27       1   gamepad tag (1, or 0 for an empty slot)
//! 28       2   button count u16
//! 30       2   axis count   u16
//! 32      5b   buttons: position u8, value u32
//! 32+5b  17a   axes: hand u8, x i64, y i64
//! ```
//!
//! Callers allocate one buffer of [`WireConfig::wire_frame_len`] bytes and reuse
//! it every tick. Decoding checks every segment tag and never trusts a wire
//! count or enum code.

pub mod buffer;
mod gamepad;
mod keyboard;
mod mouse;

pub use buffer::WireBuffer;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cursor::ByteReader;
use crate::error::{WireError, WireResult};
use crate::input::{GamepadFrame, KeyboardFrame, MouseFrame};
use crate::types::InputType;

// =============================================================================
// LAYOUT
// =============================================================================

pub const KEYBOARD_OFFSET: usize = 0;
/// Tag + 128-bit key set.
pub const KEYBOARD_LENGTH: usize = 1 + 16;
/// Bits in the key set. Ids past the last [`Key`](crate::Key) are always 0.
pub const KEYBOARD_KEY_COUNT: usize = 128;

pub const MOUSE_OFFSET: usize = KEYBOARD_OFFSET + KEYBOARD_LENGTH;
/// Tag + x + y + isDown.
pub const MOUSE_LENGTH: usize = 1 + 4 + 4 + 1;

pub const GAMEPAD_OFFSET: usize = MOUSE_OFFSET + MOUSE_LENGTH;
/// Tag + button count + axis count.
pub const GAMEPAD_HEADER_LENGTH: usize = 1 + 2 + 2;
/// Position + value.
pub const BUTTON_LENGTH: usize = 1 + 4;
/// Hand + x + y.
pub const AXIS_LENGTH: usize = 1 + 8 + 8;

pub const DEFAULT_MAX_BUTTONS: u16 = 20;
pub const DEFAULT_MAX_AXES: u16 = 10;

/// Exact size of a gamepad segment holding `buttons` buttons and `axes` axes.
///
/// Saturates at `usize::MAX`. Never reached for counts that fit the `u16`
/// count fields.
#[inline]
pub const fn gamepad_byte_length(buttons: usize, axes: usize) -> usize {
    GAMEPAD_HEADER_LENGTH
        .saturating_add(buttons.saturating_mul(BUTTON_LENGTH))
        .saturating_add(axes.saturating_mul(AXIS_LENGTH))
}

// =============================================================================
// CONFIG
// =============================================================================

/// Gamepad capacity of a wire frame. Both sides must agree on it.
///
/// Maxima are `u16` because the counts travel as `u16`, so any configured
/// capacity can be written and every frame length fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    pub max_buttons: u16,
    pub max_axes: u16,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            max_buttons: DEFAULT_MAX_BUTTONS,
            max_axes: DEFAULT_MAX_AXES,
        }
    }
}

impl WireConfig {
    pub fn new(max_buttons: u16, max_axes: u16) -> Self {
        Self {
            max_buttons,
            max_axes,
        }
    }

    /// Bytes needed for a whole wire frame at this capacity.
    #[inline]
    pub const fn wire_frame_len(&self) -> usize {
        KEYBOARD_LENGTH
            + MOUSE_LENGTH
            + gamepad_byte_length(self.max_buttons as usize, self.max_axes as usize)
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// Everything one tick puts on the wire.
///
/// The wire has a single gamepad slot. `None` is written as a `Null` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireFrame {
    pub keyboard: KeyboardFrame,
    pub mouse: MouseFrame,
    pub gamepad: Option<GamepadFrame>,
}

impl WireFrame {
    pub fn new(keyboard: KeyboardFrame, mouse: MouseFrame) -> Self {
        Self {
            keyboard,
            mouse,
            gamepad: None,
        }
    }

    /// Put `gamepad` in the slot, replacing any earlier one this tick.
    pub fn with_gamepad(mut self, gamepad: GamepadFrame) -> Self {
        self.gamepad = Some(gamepad);
        self
    }
}

// =============================================================================
// CODEC
// =============================================================================

/// Encodes and decodes wire frames at a fixed gamepad capacity.
///
/// Stateless apart from its config, so one codec serves any number of buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireCodec {
    config: WireConfig,
}

impl WireCodec {
    pub fn new(config: WireConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> WireConfig {
        self.config
    }

    /// Buffer size this codec expects.
    #[inline]
    pub fn frame_len(&self) -> usize {
        self.config.wire_frame_len()
    }

    pub fn encode_keyboard(&self, buf: &mut [u8], frame: &KeyboardFrame) -> WireResult<()> {
        keyboard::encode(buf, frame)
    }

    pub fn decode_keyboard(&self, buf: &[u8]) -> WireResult<KeyboardFrame> {
        keyboard::decode(buf)
    }

    pub fn encode_mouse(&self, buf: &mut [u8], frame: &MouseFrame) -> WireResult<()> {
        mouse::encode(buf, frame)
    }

    pub fn decode_mouse(&self, buf: &[u8]) -> WireResult<MouseFrame> {
        mouse::decode(buf)
    }

    /// Write `frame` into the gamepad slot.
    ///
    /// Counts above the configured maximum are rejected, never truncated.
    pub fn encode_gamepad(&self, buf: &mut [u8], frame: &GamepadFrame) -> WireResult<()> {
        gamepad::encode(buf, frame, &self.config)
    }

    /// Mark the gamepad slot empty.
    pub fn encode_no_gamepad(&self, buf: &mut [u8]) -> WireResult<()> {
        gamepad::encode_null(buf)
    }

    /// Read the gamepad slot. `None` if it holds a `Null` tag.
    pub fn decode_gamepad(&self, buf: &[u8]) -> WireResult<Option<GamepadFrame>> {
        gamepad::decode(buf, &self.config)
    }

    /// Write all three segments. Segments are written in wire order, so a
    /// failed gamepad leaves keyboard and mouse already in place.
    pub fn encode_frame(&self, buf: &mut [u8], frame: &WireFrame) -> WireResult<()> {
        trace!(
            "encode frame: {} keys, mouse ({}, {}), gamepad {}",
            frame.keyboard.len(),
            frame.mouse.x,
            frame.mouse.y,
            frame.gamepad.is_some()
        );
        self.encode_keyboard(buf, &frame.keyboard)?;
        self.encode_mouse(buf, &frame.mouse)?;
        match &frame.gamepad {
            Some(gamepad) => self.encode_gamepad(buf, gamepad),
            None => self.encode_no_gamepad(buf),
        }
    }

    pub fn decode_frame(&self, buf: &[u8]) -> WireResult<WireFrame> {
        let frame = WireFrame {
            keyboard: self.decode_keyboard(buf)?,
            mouse: self.decode_mouse(buf)?,
            gamepad: self.decode_gamepad(buf)?,
        };
        trace!(
            "decoded frame: {} keys, mouse ({}, {}), gamepad {}",
            frame.keyboard.len(),
            frame.mouse.x,
            frame.mouse.y,
            frame.gamepad.is_some()
        );
        Ok(frame)
    }
}

/// Read the tag at the reader's position and reject anything but `expected`.
fn expect_tag(reader: &mut ByteReader<'_>, expected: InputType) -> WireResult<()> {
    let offset = reader.offset();
    let found = reader.read_u8()?;
    if found != expected.tag() {
        return Err(WireError::TypeTagMismatch {
            offset,
            expected,
            found,
        });
    }
    Ok(())
}
