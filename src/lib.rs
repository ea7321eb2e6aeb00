//! # pogp-input
//!
//! Per-tick input marshaling. Keyboard, mouse and gamepad state from one
//! polling instant is packed into a single fixed-layout byte buffer that can be
//! copied into another runtime's memory (a WASM sandbox, a worker) and decoded
//! there into bounded histories with edge queries.
//!
//! ## Architecture
//!
//! ```text
//! producer                          │ boundary │                  consumer
//!                                   │          │
//! KeyboardFrame ─┐                  │          │                 ┌─→ KeyboardSnapshot ─→ is_key_down / is_key_up
//! MouseFrame    ─┼─→ WireCodec ─→ [u8; wire_frame_len] ─→ WireCodec ─┼─→ MouseFrame
//! GamepadFrame  ─┘   encode_frame   │          │    decode_frame  └─→ GamepadSnapshot ─→ is_button_down / get_axes
//!                                   │          │
//! ```
//!
//! Producer and consumer run strictly in sequence within a tick. The buffer is
//! allocated once and reused.
//!
//! ## Modules
//!
//! - [`types`] - Closed input vocabulary (Key, ButtonPosition, Hand, InputType)
//! - [`cursor`] - Bounds-checked byte reader/writer with bit-packed booleans
//! - [`input`] - Frame values and fixed-point helpers
//! - [`codec`] - Wire layout, config and encode/decode
//! - [`snapshot`] - Bounded most-recent-first histories
//! - [`session`] - Per-tick consumer driver

pub mod codec;
pub mod cursor;
pub mod error;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod types;

pub use codec::{
    WireBuffer, WireCodec, WireConfig, WireFrame, gamepad_byte_length, GAMEPAD_OFFSET,
    KEYBOARD_LENGTH, KEYBOARD_OFFSET, MOUSE_LENGTH, MOUSE_OFFSET,
};
pub use cursor::{ByteReader, ByteWriter};
pub use error::{WireError, WireResult};
pub use input::{
    Axis, Button, GamepadFrame, KeyboardFrame, MouseFrame, from_fixed, to_fixed,
};
pub use session::InputState;
pub use snapshot::{GamepadSnapshot, History, KeyboardSnapshot, SNAPSHOT_CAPACITY};
pub use types::{ButtonPosition, Hand, InputType, Key, ParseKeyError};

// =============================================================================
// Host exports
// =============================================================================

/// Wire frame size at the default gamepad capacity, for hosts that allocate
/// the buffer inside the consumer's memory.
#[unsafe(no_mangle)]
pub extern "C" fn pog_wire_frame_len() -> u32 {
    u32::try_from(WireConfig::default().wire_frame_len()).unwrap_or(u32::MAX)
}

/// Gamepad segment size for `buttons` buttons and `axes` axes. Saturates at
/// `u32::MAX`.
#[unsafe(no_mangle)]
pub extern "C" fn pog_gamepad_byte_length(buttons: u32, axes: u32) -> u32 {
    let len = gamepad_byte_length(buttons as usize, axes as usize);
    u32::try_from(len).unwrap_or(u32::MAX)
}
