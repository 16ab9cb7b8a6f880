//! Macro binding interface for CH57x macro keypads
//!
//! The CH57x keypad firmware installs one macro binding per transaction:
//! a start frame, kind-dependent data frames, and an end frame, all sent
//! over the programmable HID interface with mandatory pacing (see
//! [`ch57x_transport::timing`]). This crate provides the typed code
//! space, the macro model with kind locking, the bit-exact frame
//! encoder, and the [`Keyboard`] driver that runs transactions against a
//! transport.
//!
//! ```no_run
//! use ch57x_keyboard::codes::{keys, Modifier};
//! use ch57x_keyboard::{Keyboard, Macro, MacroKey};
//! use ch57x_transport::{find_programmable, hidapi::HidApi, HidTransport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HidApi::new()?;
//! let device = find_programmable(&api)?;
//! let mut keyboard = Keyboard::new(HidTransport::open(&api, &device)?);
//!
//! let mut copy = Macro::new(MacroKey::K1);
//! copy.add(Modifier::CTRL, keys::C)?;
//! keyboard.bind(&copy)?;
//! # Ok(())
//! # }
//! ```

pub mod codes;
pub mod error;
pub mod frames;
pub mod macros;

pub use codes::{Code, Modifier};
pub use error::KeyboardError;
pub use frames::{encode, end_frame, start_frame, Frame};
pub use macros::{Layer, Macro, MacroKey, MacroKind, Step};

use tracing::{debug, info, warn};

use ch57x_transport::{Transport, FRAME_SIZE};

/// A keypad ready to accept bind transactions.
///
/// Owns its transport exclusively. Only one transaction may be in flight
/// against a device handle, and every operation takes `&mut self`, so
/// interleaving is ruled out at compile time.
pub struct Keyboard<T: Transport> {
    transport: T,
}

impl<T: Transport> Keyboard<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send the all-zero probe frame, once, after opening the device.
    pub fn hello(&mut self) -> Result<(), KeyboardError> {
        self.transport.write_frame(&[0u8; FRAME_SIZE])?;
        Ok(())
    }

    /// Install one macro binding.
    ///
    /// Encodes first (an unsupported kind produces no frames), then runs
    /// the transaction: start frame, data frames, end frame. The first
    /// error stops everything; a transport failure mid-transaction leaves
    /// the device without an end frame, and no recovery frame is sent
    /// because the firmware's tolerance for one is unverified.
    pub fn bind(&mut self, m: &Macro) -> Result<(), KeyboardError> {
        let frames = frames::encode(m)?;
        debug!(
            "binding key {} on layer {} ({} data frames)",
            m.key(),
            m.layer().index(),
            frames.len()
        );

        self.transport.write_frame(&frames::start_frame())?;
        for frame in &frames {
            self.transport.write_frame(frame)?;
        }
        self.transport.write_frame(&frames::end_frame())?;
        Ok(())
    }

    /// Install a batch of bindings, best-effort.
    ///
    /// Each macro gets its own transaction. A failure is recorded against
    /// the macro's key slot and the remaining macros are still attempted;
    /// the returned list is empty when everything bound.
    pub fn bind_all(&mut self, macros: &[Macro]) -> Vec<(MacroKey, KeyboardError)> {
        let mut failures = Vec::new();
        for m in macros {
            match self.bind(m) {
                Ok(()) => info!("bound key {}", m.key()),
                Err(e) => {
                    warn!("failed to bind key {}: {e}", m.key());
                    failures.push((m.key(), e));
                }
            }
        }
        failures
    }

    /// Consume the interface and hand the transport back
    pub fn into_transport(self) -> T {
        self.transport
    }
}
