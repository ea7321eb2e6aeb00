//! Gamepad segment: tag, counts, then buttons and axes in caller order.

use super::{AXIS_LENGTH, BUTTON_LENGTH, GAMEPAD_OFFSET, WireConfig, gamepad_byte_length};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{WireError, WireResult};
use crate::input::{Axis, Button, GamepadFrame};
use crate::types::{ButtonPosition, Hand, InputType};

fn check_count(kind: &'static str, count: usize, max: u16) -> WireResult<()> {
    let max = max as usize;
    if count > max {
        return Err(WireError::CapacityExceeded { kind, count, max });
    }
    Ok(())
}

pub(super) fn encode(buf: &mut [u8], frame: &GamepadFrame, config: &WireConfig) -> WireResult<()> {
    let (buttons, axes) = (frame.buttons.len(), frame.axes.len());
    check_count("button", buttons, config.max_buttons)?;
    check_count("axis", axes, config.max_axes)?;

    let mut writer = ByteWriter::at(buf, GAMEPAD_OFFSET);
    writer.ensure(gamepad_byte_length(buttons, axes))?;

    writer.write_u8(GamepadFrame::INPUT_TYPE.tag())?;
    writer.write_u16(buttons as u64)?;
    writer.write_u16(axes as u64)?;

    for button in &frame.buttons {
        writer.write_u8(button.position as u8)?;
        writer.write_u32(button.value)?;
    }
    for axis in &frame.axes {
        writer.write_u8(axis.hand as u8)?;
        writer.write_i64(axis.value.0)?;
        writer.write_i64(axis.value.1)?;
    }
    Ok(())
}

/// Empty slot: `Null` tag, zero counts.
pub(super) fn encode_null(buf: &mut [u8]) -> WireResult<()> {
    let mut writer = ByteWriter::at(buf, GAMEPAD_OFFSET);
    writer.ensure(gamepad_byte_length(0, 0))?;

    writer.write_u8(InputType::Null.tag())?;
    writer.write_u16(0u16)?;
    writer.write_u16(0u16)
}

pub(super) fn decode(buf: &[u8], config: &WireConfig) -> WireResult<Option<GamepadFrame>> {
    let mut reader = ByteReader::at(buf, GAMEPAD_OFFSET);
    reader.ensure(gamepad_byte_length(0, 0))?;

    let found = reader.read_u8()?;
    if found == InputType::Null.tag() {
        return Ok(None);
    }
    if found != GamepadFrame::INPUT_TYPE.tag() {
        return Err(WireError::TypeTagMismatch {
            offset: GAMEPAD_OFFSET,
            expected: GamepadFrame::INPUT_TYPE,
            found,
        });
    }

    let buttons = reader.read_u16()? as usize;
    let axes = reader.read_u16()? as usize;
    check_count("button", buttons, config.max_buttons)?;
    check_count("axis", axes, config.max_axes)?;
    reader.ensure(buttons * BUTTON_LENGTH + axes * AXIS_LENGTH)?;

    let mut frame = GamepadFrame {
        buttons: Vec::with_capacity(buttons),
        axes: Vec::with_capacity(axes),
    };
    for _ in 0..buttons {
        let position = ButtonPosition::try_from(reader.read_u8()?)?;
        frame.buttons.push(Button::new(position, reader.read_u32()?));
    }
    for _ in 0..axes {
        let hand = Hand::try_from(reader.read_u8()?)?;
        let x = reader.read_i64()?;
        let y = reader.read_i64()?;
        frame.axes.push(Axis::new(hand, x, y));
    }
    Ok(Some(frame))
}
