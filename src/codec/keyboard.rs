//! Keyboard segment: tag, then one bit per key id, ascending.

use super::{KEYBOARD_KEY_COUNT, KEYBOARD_LENGTH, KEYBOARD_OFFSET, expect_tag};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::WireResult;
use crate::input::KeyboardFrame;

pub(super) fn encode(buf: &mut [u8], frame: &KeyboardFrame) -> WireResult<()> {
    let mut writer = ByteWriter::at(buf, KEYBOARD_OFFSET);
    writer.ensure(KEYBOARD_LENGTH)?;

    writer.write_u8(KeyboardFrame::INPUT_TYPE.tag())?;
    let bits = frame.bits();
    for id in 0..KEYBOARD_KEY_COUNT {
        writer.write_bool(bits & (1u128 << id) != 0)?;
    }
    Ok(())
}

pub(super) fn decode(buf: &[u8]) -> WireResult<KeyboardFrame> {
    let mut reader = ByteReader::at(buf, KEYBOARD_OFFSET);
    reader.ensure(KEYBOARD_LENGTH)?;

    expect_tag(&mut reader, KeyboardFrame::INPUT_TYPE)?;
    let mut bits = 0u128;
    for id in 0..KEYBOARD_KEY_COUNT {
        if reader.read_bool()? {
            bits |= 1u128 << id;
        }
    }
    KeyboardFrame::try_from_bits(bits)
}
