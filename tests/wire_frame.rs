//! End-to-end tick flow: producer thread encodes, consumer decodes into
//! snapshots.
//!
//! Mirrors the deployment pattern: the producer polls and packs one wire frame
//! per tick, the bytes cross a boundary (here a channel), and the consumer
//! ingests them before running its game logic.
//!
//! Run with: cargo test --test wire_frame -- --nocapture

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

use pogp_input::{
    ButtonPosition, GamepadFrame, Hand, InputState, Key, KeyboardFrame, MouseFrame, WireBuffer,
    WireConfig, WireError, WireFrame, pog_wire_frame_len,
};
use spark_signals::effect;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// SCRIPTED PRODUCER
// =============================================================================

/// Ten ticks of a player tapping W, holding A, and nudging the left stick.
fn scripted_ticks() -> Vec<WireFrame> {
    (0..10u32)
        .map(|tick| {
            let mut keys = vec![Key::KeyA];
            if tick % 4 == 0 {
                keys.push(Key::KeyW);
            }
            let mut frame = WireFrame::new(
                KeyboardFrame::from(keys),
                MouseFrame::new(tick * 10, 100, tick == 3),
            );
            if tick >= 2 {
                let pressure = if tick == 5 { 10_000 } else { 0 };
                frame = frame.with_gamepad(
                    GamepadFrame::from_standard(&[pressure as f64 / 10_000.0], &[0.5, -0.25]),
                );
            }
            frame
        })
        .collect()
}

#[test]
fn test_producer_consumer_ticks() {
    init_logging();

    let frames = scripted_ticks();
    let (tx, rx) = mpsc::channel::<Vec<u8>>();

    let to_send = frames.clone();
    let producer = thread::spawn(move || {
        let mut buffer = WireBuffer::default();
        for frame in &to_send {
            buffer.encode(frame).unwrap();
            tx.send(buffer.as_slice().to_vec()).unwrap();
        }
    });

    let mut state = InputState::default();
    let mut w_downs = 0;
    let mut w_ups = 0;
    let mut a_down_ticks = Vec::new();

    for (tick, bytes) in rx.iter().enumerate() {
        assert_eq!(bytes.len(), pog_wire_frame_len() as usize);
        state.ingest(&bytes).unwrap();

        let keyboard = state.keyboard();
        if keyboard.is_key_down(Key::KeyW) {
            w_downs += 1;
        }
        if keyboard.is_key_up(Key::KeyW) {
            w_ups += 1;
        }
        if keyboard.is_key_down(Key::KeyA) {
            a_down_ticks.push(tick);
        }
        assert!(keyboard.is_key_pressed(Key::KeyA));

        let gamepad = state.gamepad();
        assert_eq!(gamepad.is_button_down(ButtonPosition::RightFaceBottom), tick == 5);
        assert_eq!(gamepad.is_button_up(ButtonPosition::RightFaceBottom), tick == 6);
        let expected_axes = (tick >= 2).then_some((5000, -2500));
        assert_eq!(gamepad.get_axes(Hand::Left), expected_axes);

        assert_eq!(state.mouse(), frames[tick].mouse);
    }
    producer.join().unwrap();

    // W held on ticks 0, 4, 8 and released on 1, 5, 9
    assert_eq!(w_downs, 3);
    assert_eq!(w_ups, 3);
    assert_eq!(a_down_ticks, [0]);
    assert_eq!(state.tick(), 10);
    assert_eq!(state.keyboard().len(), 10);
    assert!(state.keyboard().is_key(Key::KeyW, 9));
    assert!(state.keyboard().is_key(Key::KeyW, 5));
    assert!(!state.keyboard().is_key(Key::KeyW, 8));
    assert!(!state.keyboard().is_key(Key::KeyW, 10));
}

#[test]
fn test_focus_loss_clears_held_input() {
    init_logging();

    let mut buffer = WireBuffer::default();
    let mut state = InputState::default();
    let held = WireFrame::new(
        KeyboardFrame::from(vec![Key::Space]),
        MouseFrame::new(3, 4, true),
    );

    buffer.encode(&held).unwrap();
    state.ingest(buffer.as_slice()).unwrap();
    state.clear();

    // The next tick after regaining focus sees a fresh press, not a hold.
    state.ingest(buffer.as_slice()).unwrap();
    assert!(state.keyboard().is_key_down(Key::Space));
    assert_eq!(state.keyboard().len(), 1);
}

#[test]
fn test_mismatched_capacity_is_rejected() {
    init_logging();

    let mut producer = WireBuffer::new(WireConfig::new(20, 10));
    let mut consumer = InputState::new(WireConfig::new(4, 2));

    let pad = GamepadFrame::from_standard(&[1.0; 17], &[]);
    producer
        .encode(&WireFrame::default().with_gamepad(pad))
        .unwrap();

    let err = consumer.ingest(producer.as_slice()).unwrap_err();
    assert_eq!(
        err,
        WireError::CapacityExceeded {
            kind: "button",
            count: 17,
            max: 4
        }
    );
    assert_eq!(consumer.tick(), 0);
}

#[test]
fn test_tick_signal_follows_ingest() {
    init_logging();

    let mut buffer = WireBuffer::default();
    let mut state = InputState::default();
    let seen = Rc::new(Cell::new(0u64));
    let seen_clone = seen.clone();
    let tick = state.tick_signal();
    let _e = effect(move || seen_clone.set(tick.get()));

    for _ in 0..3 {
        buffer.encode(&WireFrame::default()).unwrap();
        state.ingest(buffer.as_slice()).unwrap();
    }
    assert_eq!(seen.get(), 3);
}
