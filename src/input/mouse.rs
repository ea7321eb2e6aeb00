//! Mouse frame.

use serde::{Deserialize, Serialize};

use crate::types::InputType;

/// Pointer position in whole pixels plus the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MouseFrame {
    pub x: u32,
    pub y: u32,
    pub is_down: bool,
}

impl MouseFrame {
    pub const INPUT_TYPE: InputType = InputType::Mouse;

    pub fn new(x: u32, y: u32, is_down: bool) -> Self {
        Self { x, y, is_down }
    }

    /// Position from fractional client coordinates. Truncates toward zero and
    /// clamps negatives to 0.
    pub fn from_client(x: f64, y: f64, is_down: bool) -> Self {
        Self {
            x: x.trunc() as u32,
            y: y.trunc() as u32,
            is_down,
        }
    }
}
