//! Gamepad frame and the W3C "standard" gamepad mapping.

use serde::{Deserialize, Serialize};

use super::fixed_point::{button_value, to_fixed};
use crate::types::{ButtonPosition, Hand, InputType};

/// Button index → position for the W3C "standard" gamepad layout.
///
/// Indices past the end of this table (vendor extras) are dropped.
pub const STANDARD_BUTTON_LAYOUT: [ButtonPosition; 17] = [
    ButtonPosition::RightFaceBottom,    // 0  A / Cross
    ButtonPosition::RightFaceRight,     // 1  B / Circle
    ButtonPosition::RightFaceLeft,      // 2  X / Square
    ButtonPosition::RightFaceTop,       // 3  Y / Triangle
    ButtonPosition::LeftShoulderFront,  // 4  L1
    ButtonPosition::RightShoulderFront, // 5  R1
    ButtonPosition::LeftShoulderBack,   // 6  L2
    ButtonPosition::RightShoulderBack,  // 7  R2
    ButtonPosition::MiddleLeft,         // 8  Select
    ButtonPosition::MiddleRight,        // 9  Start
    ButtonPosition::LeftThumbstick,     // 10
    ButtonPosition::RightThumbstick,    // 11
    ButtonPosition::LeftFaceTop,        // 12 d-pad up
    ButtonPosition::LeftFaceBottom,     // 13 d-pad down
    ButtonPosition::LeftFaceLeft,       // 14 d-pad left
    ButtonPosition::LeftFaceRight,      // 15 d-pad right
    ButtonPosition::Middle,             // 16 Home
];

/// Standard axis index pairs per stick.
const STANDARD_AXES: [(Hand, usize, usize); 2] = [(Hand::Left, 0, 1), (Hand::Right, 2, 3)];

/// One button reading. `value` is fixed point, `10000 == fully pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Button {
    pub position: ButtonPosition,
    pub value: u32,
}

impl Button {
    pub fn new(position: ButtonPosition, value: u32) -> Self {
        Self { position, value }
    }

    /// Any non-zero pressure counts as held.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.value > 0
    }
}

/// One stick reading: fixed-point `(x, y)`, each in `-10000..=10000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Axis {
    pub hand: Hand,
    pub value: (i64, i64),
}

impl Axis {
    pub fn new(hand: Hand, x: i64, y: i64) -> Self {
        Self { hand, value: (x, y) }
    }
}

/// Buttons and axes of one gamepad during one tick.
///
/// Order is preserved through the wire. Lookups by position or hand return
/// the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GamepadFrame {
    pub buttons: Vec<Button>,
    pub axes: Vec<Axis>,
}

impl GamepadFrame {
    pub const INPUT_TYPE: InputType = InputType::Gamepad;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, position: ButtonPosition, value: u32) -> Self {
        self.buttons.push(Button::new(position, value));
        self
    }

    pub fn with_axis(mut self, hand: Hand, x: i64, y: i64) -> Self {
        self.axes.push(Axis::new(hand, x, y));
        self
    }

    /// Build from W3C standard-mapping arrays of `GamepadButton.value` and
    /// `Gamepad.axes`, converting to fixed point.
    ///
    /// A stick is mapped only if both of its axis indices are present.
    pub fn from_standard(buttons: &[f64], axes: &[f64]) -> Self {
        let buttons = buttons
            .iter()
            .zip(STANDARD_BUTTON_LAYOUT)
            .map(|(&value, position)| Button::new(position, button_value(value)))
            .collect();

        let axes = STANDARD_AXES
            .iter()
            .filter_map(|&(hand, x, y)| {
                let (&x, &y) = (axes.get(x)?, axes.get(y)?);
                Some(Axis::new(hand, to_fixed(x), to_fixed(y)))
            })
            .collect();

        Self { buttons, axes }
    }

    pub fn button(&self, position: ButtonPosition) -> Option<&Button> {
        self.buttons.iter().find(|b| b.position == position)
    }

    pub fn axis(&self, hand: Hand) -> Option<&Axis> {
        self.axes.iter().find(|a| a.hand == hand)
    }

    /// Whether `position` is present with a non-zero value.
    pub fn is_button_active(&self, position: ButtonPosition) -> bool {
        self.button(position).is_some_and(Button::is_active)
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.axes.is_empty()
    }
}
