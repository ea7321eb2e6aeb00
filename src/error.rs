//! Error types for the wire codec.
//!
//! Every fallible operation in the crate returns [`WireResult`]. Errors are
//! raised before the offending field touches the buffer, so a failed write
//! never leaves half a field behind.

use thiserror::Error;

use crate::types::InputType;

/// Result alias used throughout the codec.
pub type WireResult<T> = Result<T, WireError>;

/// Everything that can go wrong while marshaling input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// An integer does not fit the field it was written to.
    #[error("overflow: tried to write {kind} {value}, must be {min} to {max}")]
    Overflow {
        kind: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },

    /// Not enough room left in the buffer for the next field.
    #[error("buffer overrun: needed {needed} bytes at offset {offset}, only {remaining} left")]
    BufferOverrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A segment did not start with the tag its offset calls for.
    #[error("type tag mismatch at offset {offset}: expected {expected:?}, found {found}")]
    TypeTagMismatch {
        offset: usize,
        expected: InputType,
        found: u8,
    },

    /// More buttons or axes than the configured maximum.
    #[error("{kind} count {count} exceeds configured maximum {max}")]
    CapacityExceeded {
        kind: &'static str,
        count: usize,
        max: usize,
    },

    /// A key bit is set for an id with no `Key` variant.
    #[error("unknown key id {0}")]
    UnknownKey(u8),

    #[error("unknown button position {0}")]
    UnknownButtonPosition(u8),

    #[error("unknown hand {0}")]
    UnknownHand(u8),

    #[error("unknown input type {0}")]
    UnknownInputType(u8),

    /// A length-prefixed string was not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
}
