//! Integration tests for bind transactions against a scripted transport.
//!
//! These exercise the full driver path (encode, start frame, data
//! frames, end frame) and the abort/continue semantics around transport
//! failures, without touching hardware.

use ch57x_keyboard::codes::{keys, media, mouse, Modifier};
use ch57x_keyboard::{Keyboard, KeyboardError, Macro, MacroKey, Step};
use ch57x_transport::{Transport, TransportError, FRAME_SIZE};

/// Records every frame it accepts; optionally fails one write attempt.
#[derive(Default)]
struct MockTransport {
    written: Vec<[u8; FRAME_SIZE]>,
    attempts: usize,
    fail_on_attempt: Option<usize>,
}

impl MockTransport {
    fn failing_on(attempt: usize) -> Self {
        MockTransport {
            fail_on_attempt: Some(attempt),
            ..Default::default()
        }
    }
}

impl Transport for MockTransport {
    fn write_frame(&mut self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_on_attempt == Some(attempt) {
            return Err(TransportError::HidError("scripted failure".into()));
        }
        self.written.push(*frame);
        Ok(())
    }
}

fn is_start(frame: &[u8; FRAME_SIZE]) -> bool {
    frame[0] == 0xa1 && frame[1] == 0x01
}

fn is_end(frame: &[u8; FRAME_SIZE]) -> bool {
    frame[0] == 0xaa && frame[1] == 0xaa
}

#[test]
fn chord_transaction_is_start_data_end_in_order() {
    let mut m = Macro::new(MacroKey::K1);
    m.add(Modifier::SHIFT, keys::A).unwrap();
    m.add_code(keys::B).unwrap();

    let mut keyboard = Keyboard::new(MockTransport::default());
    keyboard.bind(&m).unwrap();

    let written = &keyboard.into_transport().written;
    assert_eq!(written.len(), 5);
    assert!(is_start(&written[0]));
    assert!(is_end(&written[4]));

    // Sentinel, then the two user steps, in chord order
    assert_eq!(&written[1][3..6], &[0, 0, 0]);
    assert_eq!(&written[2][3..6], &[1, 0x02, 0x04]);
    assert_eq!(&written[3][3..6], &[2, 0x00, 0x05]);
}

#[test]
fn media_transaction_is_three_frames() {
    let m = Macro::seeded(MacroKey::K5, Step::plain(media::PLAY));

    let mut keyboard = Keyboard::new(MockTransport::default());
    keyboard.bind(&m).unwrap();

    let written = &keyboard.into_transport().written;
    assert_eq!(written.len(), 3);
    assert!(is_start(&written[0]));
    assert_eq!(written[1][0], 5);
    assert_eq!(written[1][1], 0x12);
    assert_eq!(written[1][2], 0xCD);
    assert!(is_end(&written[2]));
}

#[test]
fn transport_failure_aborts_without_end_frame() {
    // Three data frames (sentinel + two steps); fail the second one.
    // Attempts: 0 = start, 1 = sentinel, 2 = data #1 (fails here).
    let mut m = Macro::new(MacroKey::K2);
    m.add_code(keys::A).unwrap();
    m.add_code(keys::B).unwrap();

    let mut keyboard = Keyboard::new(MockTransport::failing_on(2));
    let err = keyboard.bind(&m).unwrap_err();
    assert!(matches!(err, KeyboardError::Transport(_)));

    let written = &keyboard.into_transport().written;
    assert_eq!(written.len(), 2);
    assert!(is_start(&written[0]));
    // Nothing after the failure, and in particular no end frame
    assert!(written.iter().all(|f| !is_end(f)));
}

#[test]
fn unsupported_macro_sends_nothing() {
    let empty = Macro::new(MacroKey::K3);

    let mut keyboard = Keyboard::new(MockTransport::default());
    let err = keyboard.bind(&empty).unwrap_err();
    assert!(matches!(err, KeyboardError::UnsupportedMacroType(_)));

    // Not even a start frame: the device must not be left mid-transaction
    assert!(keyboard.into_transport().written.is_empty());
}

#[test]
fn bind_all_reports_failures_and_continues() {
    let bad = Macro::new(MacroKey::K4); // empty: unsupported kind
    let good = Macro::seeded(MacroKey::K9, Step::plain(mouse::WHEEL_UP));

    let mut keyboard = Keyboard::new(MockTransport::default());
    let failures = keyboard.bind_all(&[bad, good]);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, MacroKey::K4);
    assert!(matches!(
        failures[0].1,
        KeyboardError::UnsupportedMacroType(_)
    ));

    // The good macro still ran its full transaction
    let written = &keyboard.into_transport().written;
    assert_eq!(written.len(), 3);
    assert_eq!(written[1][0], 9);
    assert_eq!(written[1][5], 0x01);
}

#[test]
fn bind_all_survives_a_transport_failure_mid_batch() {
    let first = Macro::seeded(MacroKey::K1, Step::plain(media::MUTE));
    let second = Macro::seeded(MacroKey::K2, Step::plain(media::NEXT));

    // Attempt 1 is the first macro's data frame; its transaction dies,
    // the second macro still binds.
    let mut keyboard = Keyboard::new(MockTransport::failing_on(1));
    let failures = keyboard.bind_all(&[first, second]);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, MacroKey::K1);

    let written = &keyboard.into_transport().written;
    // start (macro 1), then start/data/end of macro 2
    assert_eq!(written.len(), 4);
    assert!(is_start(&written[1]));
    assert_eq!(written[2][0], 2);
    assert_eq!(written[2][2], media::NEXT.value());
    assert!(is_end(&written[3]));
}

#[test]
fn hello_is_a_single_zero_frame() {
    let mut keyboard = Keyboard::new(MockTransport::default());
    keyboard.hello().unwrap();

    let written = &keyboard.into_transport().written;
    assert_eq!(written.len(), 1);
    assert!(written[0].iter().all(|&b| b == 0));
}
