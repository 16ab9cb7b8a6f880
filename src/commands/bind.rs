//! Binding command handlers.

use std::path::Path;

use ch57x_driver::{mapping, sequence};
use ch57x_keyboard::{Macro, Step};

use super::{open_keyboard, CommandResult};

/// Bind a key chord to a key slot
pub fn bind_keys(key: &str, seq: &str, layer: u8) -> CommandResult {
    let slot = sequence::parse_key_slot(key)?;
    let layer = sequence::parse_layer(layer)?;
    let steps = sequence::parse_key_sequence(seq)?;

    let mut m = Macro::new(slot).with_layer(layer);
    for step in steps {
        m.add(step.modifier, step.code)?;
    }
    bind_one(&m)
}

/// Bind a media code to a key slot
pub fn bind_media(key: &str, code: &str, layer: u8) -> CommandResult {
    let slot = sequence::parse_key_slot(key)?;
    let layer = sequence::parse_layer(layer)?;
    let code = sequence::parse_media(code)?;

    bind_one(&Macro::seeded(slot, Step::plain(code)).with_layer(layer))
}

/// Bind a mouse button or wheel action to a key slot
pub fn bind_mouse(key: &str, action: &str, layer: u8) -> CommandResult {
    let slot = sequence::parse_key_slot(key)?;
    let layer = sequence::parse_layer(layer)?;
    let step = sequence::parse_mouse(action)?;

    bind_one(&Macro::seeded(slot, step).with_layer(layer))
}

fn bind_one(m: &Macro) -> CommandResult {
    let mut keyboard = open_keyboard()?;
    keyboard.bind(m)?;
    println!("bound key {}", m.key());
    Ok(())
}

/// Bind every macro from a mapping file.
///
/// Best-effort: a macro that fails is reported and the rest are still
/// attempted; the process still exits 0, matching bind-all semantics.
pub fn apply(file: &Path) -> CommandResult {
    let macros = mapping::load(file)?;
    if macros.is_empty() {
        println!("{} defines no macros", file.display());
        return Ok(());
    }

    let mut keyboard = open_keyboard()?;
    let failures = keyboard.bind_all(&macros);

    println!("bound {}/{} macros", macros.len() - failures.len(), macros.len());
    for (key, err) in &failures {
        eprintln!("error binding key {key}: {err}");
    }
    Ok(())
}
