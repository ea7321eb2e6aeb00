//! Input vocabulary shared by both sides of the wire.
//!
//! Every enum here is a closed set of small integer codes. Decoding never
//! trusts a wire byte: conversion goes through `TryFrom<u8>` and unknown codes
//! surface as [`WireError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{WireError, WireResult};

// =============================================================================
// INPUT TYPE
// =============================================================================

/// Type tag written at the start of every segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum InputType {
    Null = 0,
    Gamepad = 1,
    Touch = 2,
    Mouse = 3,
    Keyboard = 4,
    Custom = 5,
}

impl InputType {
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for InputType {
    type Error = WireError;

    fn try_from(value: u8) -> WireResult<Self> {
        match value {
            0 => Ok(Self::Null),
            1 => Ok(Self::Gamepad),
            2 => Ok(Self::Touch),
            3 => Ok(Self::Mouse),
            4 => Ok(Self::Keyboard),
            5 => Ok(Self::Custom),
            other => Err(WireError::UnknownInputType(other)),
        }
    }
}

// =============================================================================
// HAND
// =============================================================================

/// Which side of the controller an axis pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Hand {
    #[default]
    Null = 0,
    Left = 1,
    Right = 2,
}

impl TryFrom<u8> for Hand {
    type Error = WireError;

    fn try_from(value: u8) -> WireResult<Self> {
        match value {
            0 => Ok(Self::Null),
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            other => Err(WireError::UnknownHand(other)),
        }
    }
}

// =============================================================================
// BUTTON POSITION
// =============================================================================

/// Physical location of a gamepad button.
///
/// Positions are named by where the button sits, not by what is printed on
/// it, so "A" on one pad and "Cross" on another both map to
/// [`ButtonPosition::RightFaceBottom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonPosition {
    #[default]
    Null = 0,

    LeftFaceTop = 1,
    LeftFaceRight = 2,
    LeftFaceBottom = 3,
    LeftFaceLeft = 4,
    LeftShoulderFront = 5,
    LeftShoulderBack = 6,
    LeftThumbstick = 7,

    RightFaceTop = 8,
    RightFaceRight = 9,
    RightFaceBottom = 10,
    RightFaceLeft = 11,
    RightShoulderFront = 12,
    RightShoulderBack = 13,
    RightThumbstick = 14,

    Middle = 15,
    MiddleLeft = 16,
    MiddleRight = 17,
}

impl TryFrom<u8> for ButtonPosition {
    type Error = WireError;

    fn try_from(value: u8) -> WireResult<Self> {
        match value {
            0 => Ok(Self::Null),
            1 => Ok(Self::LeftFaceTop),
            2 => Ok(Self::LeftFaceRight),
            3 => Ok(Self::LeftFaceBottom),
            4 => Ok(Self::LeftFaceLeft),
            5 => Ok(Self::LeftShoulderFront),
            6 => Ok(Self::LeftShoulderBack),
            7 => Ok(Self::LeftThumbstick),
            8 => Ok(Self::RightFaceTop),
            9 => Ok(Self::RightFaceRight),
            10 => Ok(Self::RightFaceBottom),
            11 => Ok(Self::RightFaceLeft),
            12 => Ok(Self::RightShoulderFront),
            13 => Ok(Self::RightShoulderBack),
            14 => Ok(Self::RightThumbstick),
            15 => Ok(Self::Middle),
            16 => Ok(Self::MiddleLeft),
            17 => Ok(Self::MiddleRight),
            other => Err(WireError::UnknownButtonPosition(other)),
        }
    }
}

// =============================================================================
// KEY
// =============================================================================

/// A W3C `KeyboardEvent.code` string with no matching [`Key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key code {0:?}")]
pub struct ParseKeyError(pub String);

macro_rules! key_codes {
    ($($name:ident = $id:literal),* $(,)?) => {
        /// Physical keyboard key, named after its W3C `KeyboardEvent.code`.
        ///
        /// The discriminant is the key id, i.e. the bit index in the
        /// keyboard segment's 128-bit set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Key {
            $($name = $id),*
        }

        impl Key {
            /// Every key, in ascending id order.
            pub const ALL: &'static [Key] = &[$(Key::$name),*];

            /// The W3C `KeyboardEvent.code` this key is named after.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Key::$name => stringify!($name)),*
                }
            }
        }

        impl TryFrom<u8> for Key {
            type Error = WireError;

            fn try_from(value: u8) -> WireResult<Self> {
                match value {
                    $($id => Ok(Key::$name),)*
                    other => Err(WireError::UnknownKey(other)),
                }
            }
        }

        impl FromStr for Key {
            type Err = ParseKeyError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $(stringify!($name) => Ok(Key::$name),)*
                    other => Err(ParseKeyError(other.to_string())),
                }
            }
        }
    };
}

key_codes! {
    Null = 0,

    ArrowDown = 1,
    ArrowLeft = 2,
    ArrowRight = 3,
    ArrowUp = 4,

    Backspace = 5,
    Tab = 6,
    CapsLock = 7,
    Enter = 8,
    ShiftLeft = 9,
    ShiftRight = 10,
    ControlLeft = 11,
    MetaLeft = 12,
    AltLeft = 13,
    Space = 14,
    AltRight = 15,
    MetaRight = 16,
    ContextMenu = 17,
    ControlRight = 18,

    Backquote = 19,
    Digit1 = 20,
    Digit2 = 21,
    Digit3 = 22,
    Digit4 = 23,
    Digit5 = 24,
    Digit6 = 25,
    Digit7 = 26,
    Digit8 = 27,
    Digit9 = 28,
    Digit0 = 29,
    Minus = 30,
    Equal = 31,
    IntlYen = 32,
    KeyQ = 33,
    KeyW = 34,
    KeyE = 35,
    KeyR = 36,
    KeyT = 37,
    KeyY = 38,
    KeyU = 39,
    KeyI = 40,
    KeyO = 41,
    KeyP = 42,
    BracketLeft = 43,
    BracketRight = 44,
    Backslash = 45,
    KeyA = 46,
    KeyS = 47,
    KeyD = 48,
    KeyF = 49,
    KeyG = 50,
    KeyH = 51,
    KeyJ = 52,
    KeyK = 53,
    KeyL = 54,
    Semicolon = 55,
    Quote = 56,
    IntlBackslash = 57,
    KeyZ = 58,
    KeyX = 59,
    KeyC = 60,
    KeyV = 61,
    KeyB = 62,
    KeyN = 63,
    KeyM = 64,
    Comma = 65,
    Period = 66,
    Slash = 67,
    IntlRo = 68,
}

impl Key {
    /// Bit index of this key in the keyboard segment.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
