//! Utility command handlers.

use ch57x_transport::{device, list_devices};

use super::{hid_api, CommandResult};

/// List detected keypad interfaces
pub fn list() -> CommandResult {
    let api = hid_api()?;
    let devices = list_devices(&api);

    if devices.is_empty() {
        println!(
            "no keypad with id {:04x}:{:04x} detected",
            device::VENDOR_ID,
            device::PRODUCT_ID
        );
        return Ok(());
    }

    for d in &devices {
        let marker = if d.is_programmable() {
            " (programmable)"
        } else {
            ""
        };
        println!(
            "{:04x}:{:04x} interface {} {}{}",
            d.vid,
            d.pid,
            d.interface,
            d.product.as_deref().unwrap_or("?"),
            marker
        );
    }
    Ok(())
}
