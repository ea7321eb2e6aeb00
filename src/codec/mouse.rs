//! Mouse segment: tag, x, y, isDown.

use super::{MOUSE_LENGTH, MOUSE_OFFSET, expect_tag};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::WireResult;
use crate::input::MouseFrame;

pub(super) fn encode(buf: &mut [u8], frame: &MouseFrame) -> WireResult<()> {
    let mut writer = ByteWriter::at(buf, MOUSE_OFFSET);
    writer.ensure(MOUSE_LENGTH)?;

    writer.write_u8(MouseFrame::INPUT_TYPE.tag())?;
    writer.write_u32(frame.x)?;
    writer.write_u32(frame.y)?;
    writer.write_bool(frame.is_down)?;
    writer.pad_to_byte();
    Ok(())
}

pub(super) fn decode(buf: &[u8]) -> WireResult<MouseFrame> {
    let mut reader = ByteReader::at(buf, MOUSE_OFFSET);
    reader.ensure(MOUSE_LENGTH)?;

    expect_tag(&mut reader, MouseFrame::INPUT_TYPE)?;
    Ok(MouseFrame {
        x: reader.read_u32()?,
        y: reader.read_u32()?,
        is_down: reader.read_bool()?,
    })
}
