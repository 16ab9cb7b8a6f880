//! Device discovery for CH57x macro keypads

use std::ffi::CString;

use hidapi::HidApi;
use tracing::debug;

use crate::error::TransportError;

/// Device identification
pub mod device {
    /// wch.cn vendor ID (4489)
    pub const VENDOR_ID: u16 = 0x1189;
    /// CH57x macro keypad product ID (34960)
    pub const PRODUCT_ID: u16 = 0x8890;
    /// The programmable interface; the other interfaces carry normal
    /// keyboard traffic and reject bind frames.
    pub const INTERFACE: i32 = 1;
}

/// A candidate HID interface found during enumeration
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub vid: u16,
    pub pid: u16,
    pub interface: i32,
    pub path: CString,
    pub product: Option<String>,
}

impl DiscoveredDevice {
    /// Whether this interface accepts bind transactions
    pub fn is_programmable(&self) -> bool {
        self.interface == device::INTERFACE
    }
}

/// List every interface of every connected keypad
pub fn list_devices(api: &HidApi) -> Vec<DiscoveredDevice> {
    let devices: Vec<DiscoveredDevice> = api
        .device_list()
        .filter(|d| d.vendor_id() == device::VENDOR_ID && d.product_id() == device::PRODUCT_ID)
        .map(|d| DiscoveredDevice {
            vid: d.vendor_id(),
            pid: d.product_id(),
            interface: d.interface_number(),
            path: d.path().to_owned(),
            product: d.product_string().map(str::to_owned),
        })
        .collect();
    debug!("enumerated {} keypad interfaces", devices.len());
    devices
}

/// Select the programmable interface of the first connected keypad.
///
/// Distinguishes "no keypad at all" from "keypad present but interface
/// {INTERFACE} not exposed" in the error message; both map to
/// [`TransportError::DeviceNotFound`].
pub fn find_programmable(api: &HidApi) -> Result<DiscoveredDevice, TransportError> {
    let devices = list_devices(api);
    if devices.is_empty() {
        return Err(TransportError::DeviceNotFound(format!(
            "no keypad with id {:04x}:{:04x} detected",
            device::VENDOR_ID,
            device::PRODUCT_ID
        )));
    }
    devices
        .into_iter()
        .find(DiscoveredDevice::is_programmable)
        .ok_or_else(|| {
            TransportError::DeviceNotFound(format!(
                "keypad found, but it does not expose programmable interface {}",
                device::INTERFACE
            ))
        })
}
