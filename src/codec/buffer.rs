//! Owned, reusable wire buffer.

use super::{WireCodec, WireConfig, WireFrame};
use crate::error::WireResult;

/// A wire frame's worth of bytes plus the codec that sized it.
///
/// Allocated once and overwritten every tick. The host copies
/// [`as_slice`](Self::as_slice) (or hands out [`as_mut_ptr`](Self::as_mut_ptr))
/// into the consumer's memory between encode and decode.
#[derive(Debug, Clone)]
pub struct WireBuffer {
    codec: WireCodec,
    bytes: Vec<u8>,
}

impl Default for WireBuffer {
    fn default() -> Self {
        Self::new(WireConfig::default())
    }
}

impl WireBuffer {
    pub fn new(config: WireConfig) -> Self {
        let codec = WireCodec::new(config);
        Self {
            bytes: vec![0; codec.frame_len()],
            codec,
        }
    }

    #[inline]
    pub fn codec(&self) -> &WireCodec {
        &self.codec
    }

    pub fn encode(&mut self, frame: &WireFrame) -> WireResult<()> {
        self.codec.encode_frame(&mut self.bytes, frame)
    }

    pub fn decode(&self) -> WireResult<WireFrame> {
        self.codec.decode_frame(&self.bytes)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw pointer for hosts that share the buffer across an FFI boundary.
    /// Valid for [`len`](Self::len) bytes while `self` is alive and unmoved.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
