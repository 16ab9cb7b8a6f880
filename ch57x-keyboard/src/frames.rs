//! Frame encoder: the wire format for installing macro bindings.
//!
//! Every bind transaction is start frame, one or more data frames, end
//! frame, each exactly 64 zero-padded bytes (the transport adds the
//! report-ID prefix). Data frame layout depends on the macro kind:
//!
//! ```text
//! byte    0     1            2     3    4    5     6
//! keys    slot  layer+kind   len   idx  mod  code        (one frame per step)
//! media   slot  layer+kind   code  0    0    0
//! button  slot  layer+kind   code  0    0    0
//! wheel   slot  layer+kind   0     0    0    code  mod
//! ```
//!
//! The wheel layout is not the button layout shifted; the code really
//! does move to byte 5 with the modifier trailing at byte 6.

use tracing::warn;

use ch57x_transport::FRAME_SIZE;

use crate::codes::Code;
use crate::error::KeyboardError;
use crate::macros::{Macro, MacroKind, Step};

/// One 64-byte output report payload
pub type Frame = [u8; FRAME_SIZE];

/// Opens a bind transaction
pub fn start_frame() -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = 0xa1;
    frame[1] = 0x01;
    frame
}

/// Closes a bind transaction
pub fn end_frame() -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = 0xaa;
    frame[1] = 0xaa;
    frame
}

/// Common header: target slot at byte 0, then the layer and kind wire
/// constants summed into byte 1. Summing is safe because the two value
/// ranges never overlap bits.
fn header(m: &Macro) -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = m.key().value();
    frame[1] = m.layer().value() + m.kind().value();
    frame
}

/// Encode the data frames for one macro.
///
/// Fails with [`KeyboardError::UnsupportedMacroType`] before producing
/// any frame when the macro has no encodable kind, so a caller can
/// validate without touching the device.
pub fn encode(m: &Macro) -> Result<Vec<Frame>, KeyboardError> {
    // A non-None kind implies at least one step: the model only locks
    // the kind when it appends a step.
    match (m.kind(), m.steps().first()) {
        (MacroKind::Keys, _) => Ok(encode_keys(m)),
        (MacroKind::Media, Some(first)) => Ok(vec![encode_media(m, *first)]),
        (MacroKind::Mouse, Some(first)) => Ok(vec![encode_mouse(m, *first)]),
        (kind, _) => Err(KeyboardError::UnsupportedMacroType(kind)),
    }
}

/// One frame per step, preceded by the empty sentinel step the firmware
/// requires; without it the device drops the first real step.
///
/// The length byte counts the user-supplied steps only; the sentinel is
/// framing, not part of the chord.
fn encode_keys(m: &Macro) -> Vec<Frame> {
    let mut base = header(m);
    base[2] = m.len() as u8;

    let mut frames = Vec::with_capacity(m.len() + 1);
    let steps = std::iter::once(&Step::EMPTY).chain(m.steps().iter());
    for (index, step) in steps.enumerate() {
        let mut frame = base;
        frame[3] = index as u8;
        frame[4] = step.modifier.bits();
        frame[5] = step.code.value();
        frames.push(frame);
    }
    frames
}

/// Single frame with the media code at byte 2. The firmware can only
/// bind one media code per slot; extra steps are dropped with a warning
/// rather than failing the bind.
fn encode_media(m: &Macro, first: Step) -> Frame {
    if m.len() > 1 {
        warn!(
            "media macro on key {} has {} steps; only the first is bound",
            m.key(),
            m.len()
        );
    }
    let mut frame = header(m);
    frame[2] = first.code.value();
    frame
}

/// Single frame; buttons carry their code at byte 2, wheel events use
/// the distinct byte-5/byte-6 layout. Extra steps are dropped with a
/// warning, like media.
fn encode_mouse(m: &Macro, first: Step) -> Frame {
    if m.len() > 1 {
        warn!(
            "mouse macro on key {} has {} steps; only the first is bound",
            m.key(),
            m.len()
        );
    }
    let mut frame = header(m);
    match first.code {
        Code::MouseButton(button) => {
            frame[2] = button;
        }
        Code::MouseWheel(wheel) => {
            frame[5] = wheel;
            frame[6] = first.modifier.bits();
        }
        // Kind locking keeps key and media codes out of mouse macros;
        // if one ever slips through, the frame stays a no-op.
        Code::Key(_) | Code::Media(_) => {
            warn!("unknown mouse step code {} on key {}", first.code, m.key());
        }
    }
    frame
}
