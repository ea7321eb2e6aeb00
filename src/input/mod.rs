//! Structured input frames: what one polling instant looks like before it
//! is packed onto the wire and after it is unpacked.
//!
//! ```text
//! platform poll ─→ KeyboardFrame ─┐
//!               ─→ MouseFrame    ─┼─→ codec::encode_frame ─→ [u8] ─→ codec::decode_frame
//!               ─→ GamepadFrame  ─┘
//! ```
//!
//! Frames are plain values. They know nothing about where they came from.

pub mod fixed_point;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;

pub use fixed_point::{FIXED_POINT_SCALE, button_value, from_fixed, to_fixed};
pub use gamepad::{Axis, Button, GamepadFrame, STANDARD_BUTTON_LAYOUT};
pub use keyboard::{KeyBits, KeyboardFrame};
pub use mouse::MouseFrame;
