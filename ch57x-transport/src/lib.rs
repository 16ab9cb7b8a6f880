//! HID transport layer for CH57x macro keypad communication
//!
//! This crate owns everything between a 64-byte protocol frame and the
//! wire: enumerating keypad interfaces, opening the programmable one, and
//! writing output reports with the report-ID prefix and the settle delay
//! the firmware demands. Frame contents are produced elsewhere; this layer
//! never inspects them.

pub mod discovery;
pub mod error;

pub use discovery::{device, find_programmable, list_devices, DiscoveredDevice};
pub use error::TransportError;

// Re-exported so consumers construct a HidApi without naming the
// dependency themselves.
pub use hidapi;

use std::thread;
use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use tracing::debug;

/// Size of one protocol frame, excluding the report-ID prefix.
pub const FRAME_SIZE: usize = 64;

/// Report ID prepended to every outgoing frame before transmission.
pub const REPORT_ID: u8 = 0x03;

/// Frame pacing
pub mod timing {
    /// Settle delay after each frame write, in milliseconds. The firmware
    /// misbehaves when frames arrive back-to-back.
    pub const SETTLE_DELAY_MS: u64 = 15;
}

/// Synchronous frame channel to a keypad.
///
/// One write blocks until the device accepts the report and the settle
/// delay has elapsed. `&mut self` means a transport handle can serve only
/// one caller at a time; the protocol has no safe interleaving.
pub trait Transport {
    /// Write one frame, blocking until it is paced out.
    fn write_frame(&mut self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError>;
}

/// hidapi-backed transport for the keypad's programmable interface
pub struct HidTransport {
    device: HidDevice,
    info: DiscoveredDevice,
}

impl HidTransport {
    /// Open the given interface for writing
    pub fn open(api: &HidApi, info: &DiscoveredDevice) -> Result<Self, TransportError> {
        let device = api.open_path(&info.path)?;
        debug!(
            "opened {:04x}:{:04x} interface {}",
            info.vid, info.pid, info.interface
        );
        Ok(Self {
            device,
            info: info.clone(),
        })
    }

    /// Device this transport is attached to
    pub fn info(&self) -> &DiscoveredDevice {
        &self.info
    }
}

impl Transport for HidTransport {
    fn write_frame(&mut self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError> {
        let mut report = [0u8; FRAME_SIZE + 1];
        report[0] = REPORT_ID;
        report[1..].copy_from_slice(frame);

        let sent = self.device.write(&report)?;
        if sent < report.len() {
            return Err(TransportError::ShortWrite {
                sent,
                expected: report.len(),
            });
        }
        debug!("wrote frame: {:02x?}", &frame[..8]);
        thread::sleep(Duration::from_millis(timing::SETTLE_DELAY_MS));
        Ok(())
    }
}
