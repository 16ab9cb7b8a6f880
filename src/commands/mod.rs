//! Command handlers for the CLI application.
//!
//! - `bind`: binding commands (bind, bind-media, bind-mouse, apply)
//! - `utility`: utility commands (list)

pub mod bind;
pub mod utility;

use hidapi::HidApi;

use ch57x_keyboard::Keyboard;
use ch57x_transport::{find_programmable, HidTransport, TransportError};

/// Result type for command handlers
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Process exit codes for device-side failures
pub mod exit_code {
    /// The HID backend could not be initialized on this platform
    pub const HID_UNSUPPORTED: u8 = 1;
    /// No keypad found, no programmable interface, or it failed to open
    pub const DEVICE_UNAVAILABLE: u8 = 2;
}

/// Initialize the HID backend
pub fn hid_api() -> Result<HidApi, TransportError> {
    HidApi::new().map_err(|e| TransportError::HidUnavailable(e.to_string()))
}

/// Open the programmable interface and send the hello probe
pub fn open_keyboard() -> Result<Keyboard<HidTransport>, Box<dyn std::error::Error>> {
    let api = hid_api()?;
    let device = find_programmable(&api)?;
    let transport = HidTransport::open(&api, &device)?;

    let mut keyboard = Keyboard::new(transport);
    keyboard.hello()?;
    println!(
        "connected to {}",
        device.product.as_deref().unwrap_or("keypad")
    );
    Ok(keyboard)
}
