//! Consumer-side per-tick driver.
//!
//! [`InputState`] is what lives on the far side of the wire: each tick it
//! decodes the frame the host just wrote, feeds the snapshot histories and
//! bumps a reactive tick counter.
//!
//! ```text
//! host writes bytes ─→ ingest(bytes) ─→ decode_frame
//!                                         ├─→ keyboard.add_input
//!                                         ├─→ gamepad.add_input (empty if slot is Null)
//!                                         ├─→ mouse = latest
//!                                         └─→ tick.set(n + 1)
//! ```

use log::{debug, warn};
use spark_signals::{Signal, signal};

use crate::codec::{WireCodec, WireConfig, WireFrame};
use crate::error::WireResult;
use crate::input::MouseFrame;
use crate::snapshot::{GamepadSnapshot, KeyboardSnapshot};

/// Snapshot histories plus the latest mouse state for one input source.
pub struct InputState {
    codec: WireCodec,
    keyboard: KeyboardSnapshot,
    gamepad: GamepadSnapshot,
    mouse: MouseFrame,
    /// Frames ingested since creation. Not reset by [`clear`](Self::clear).
    tick: Signal<u64>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(WireConfig::default())
    }
}

impl InputState {
    pub fn new(config: WireConfig) -> Self {
        Self {
            codec: WireCodec::new(config),
            keyboard: KeyboardSnapshot::new(),
            gamepad: GamepadSnapshot::new(),
            mouse: MouseFrame::default(),
            tick: signal(0),
        }
    }

    /// Decode one wire frame and record it.
    ///
    /// A rejected frame changes nothing, so the histories never hold a
    /// partial tick.
    pub fn ingest(&mut self, bytes: &[u8]) -> WireResult<()> {
        let frame = self.codec.decode_frame(bytes).map_err(|err| {
            warn!("dropping wire frame at tick {}: {err}", self.tick.get());
            err
        })?;
        self.record(frame);
        Ok(())
    }

    /// Record an already decoded frame.
    pub fn record(&mut self, frame: WireFrame) {
        self.keyboard.add_input(frame.keyboard);
        self.gamepad.add_input(frame.gamepad.unwrap_or_default());
        self.mouse = frame.mouse;
        self.tick.set(self.tick.get() + 1);
    }

    /// Forget all held input, as on focus loss.
    pub fn clear(&mut self) {
        debug!("clearing input state at tick {}", self.tick.get());
        self.keyboard.clear();
        self.gamepad.clear();
        self.mouse.is_down = false;
    }

    #[inline]
    pub fn keyboard(&self) -> &KeyboardSnapshot {
        &self.keyboard
    }

    #[inline]
    pub fn gamepad(&self) -> &GamepadSnapshot {
        &self.gamepad
    }

    #[inline]
    pub fn mouse(&self) -> MouseFrame {
        self.mouse
    }

    #[inline]
    pub fn codec(&self) -> &WireCodec {
        &self.codec
    }

    /// Number of frames ingested so far.
    pub fn tick(&self) -> u64 {
        self.tick.get()
    }

    /// Reactive handle on the tick counter. Reading it inside an effect
    /// re-runs the effect after every ingested frame.
    pub fn tick_signal(&self) -> Signal<u64> {
        self.tick.clone()
    }
}
