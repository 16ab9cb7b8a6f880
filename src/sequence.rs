//! Human-readable binding syntax.
//!
//! Turns CLI and mapping-file strings into protocol values from
//! [`ch57x_keyboard`].
//!
//! # Syntax
//!
//! ```text
//! A,B,C            — chord steps, tapped in order
//! Shift+A,Ctrl+C   — modifier combos
//! play / vol-up    — media codes (bind-media)
//! left / wheel-up  — mouse actions (bind-mouse); wheel actions may
//!                    carry modifiers: Ctrl+wheel-up
//! k1..k12, rot1-cw — key slots (the rotary slots are rot1-ccw, rot1,
//!                    rot1-cw and the rot2 counterparts)
//! ```

use std::fmt;

use ch57x_keyboard::codes::{keys, media, mouse, Code, Modifier};
use ch57x_keyboard::{Layer, MacroKey, Step};

/// Error type for parsing binding syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSequenceError {
    EmptySequence,
    EmptyCombo,
    UnknownKey(String),
    UnknownModifier(String),
    UnknownMediaCode(String),
    UnknownMouseAction(String),
    UnknownKeySlot(String),
    InvalidLayer(u8),
    /// Modifiers only exist on the wire for wheel actions.
    ModifierNotSupported(String),
}

impl fmt::Display for ParseSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "empty binding sequence"),
            Self::EmptyCombo => write!(f, "empty key combo"),
            Self::UnknownKey(s) => write!(f, "unknown key: \"{s}\""),
            Self::UnknownModifier(s) => write!(f, "unknown modifier: \"{s}\""),
            Self::UnknownMediaCode(s) => write!(f, "unknown media code: \"{s}\""),
            Self::UnknownMouseAction(s) => write!(f, "unknown mouse action: \"{s}\""),
            Self::UnknownKeySlot(s) => write!(f, "unknown key slot: \"{s}\""),
            Self::InvalidLayer(n) => write!(f, "invalid layer: {n} (expected 1-3)"),
            Self::ModifierNotSupported(s) => {
                write!(f, "modifiers are only supported on wheel actions: \"{s}\"")
            }
        }
    }
}

impl std::error::Error for ParseSequenceError {}

/// Parse a key slot name (`k1`..`k12`, `rot1-ccw`, `rot1`, `rot1-cw`,
/// `rot2-…`; a bare number works for the twelve keys).
pub fn parse_key_slot(s: &str) -> Result<MacroKey, ParseSequenceError> {
    let slot = match s.trim().to_ascii_lowercase().as_str() {
        "k1" | "1" => MacroKey::K1,
        "k2" | "2" => MacroKey::K2,
        "k3" | "3" => MacroKey::K3,
        "k4" | "4" => MacroKey::K4,
        "k5" | "5" => MacroKey::K5,
        "k6" | "6" => MacroKey::K6,
        "k7" | "7" => MacroKey::K7,
        "k8" | "8" => MacroKey::K8,
        "k9" | "9" => MacroKey::K9,
        "k10" | "10" => MacroKey::K10,
        "k11" | "11" => MacroKey::K11,
        "k12" | "12" => MacroKey::K12,
        "rot1-ccw" => MacroKey::Rot1Ccw,
        "rot1" | "rot1-click" => MacroKey::Rot1Click,
        "rot1-cw" => MacroKey::Rot1Cw,
        "rot2-ccw" => MacroKey::Rot2Ccw,
        "rot2" | "rot2-click" => MacroKey::Rot2Click,
        "rot2-cw" => MacroKey::Rot2Cw,
        _ => return Err(ParseSequenceError::UnknownKeySlot(s.trim().to_string())),
    };
    Ok(slot)
}

/// Layer from its 1-based index
pub fn parse_layer(index: u8) -> Result<Layer, ParseSequenceError> {
    Layer::from_index(index).ok_or(ParseSequenceError::InvalidLayer(index))
}

/// Parse a comma-separated chord like `Shift+A,B` into key steps.
pub fn parse_key_sequence(s: &str) -> Result<Vec<Step>, ParseSequenceError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseSequenceError::EmptySequence);
    }

    let mut steps = Vec::new();
    for token in s.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        steps.push(parse_key_step(token)?);
    }

    if steps.is_empty() {
        return Err(ParseSequenceError::EmptySequence);
    }
    Ok(steps)
}

fn parse_key_step(token: &str) -> Result<Step, ParseSequenceError> {
    let (modifier, name) = split_modifiers(token)?;
    let code = keys::from_name(name)
        .ok_or_else(|| ParseSequenceError::UnknownKey(name.to_string()))?;
    Ok(Step::new(modifier, code))
}

/// Media code by name (`play`, `next`, `vol-up`, ...)
pub fn parse_media(s: &str) -> Result<Code, ParseSequenceError> {
    let s = s.trim();
    media::from_name(s).ok_or_else(|| ParseSequenceError::UnknownMediaCode(s.to_string()))
}

/// Mouse action: a button (`left`, `right`, `middle`) or a wheel event,
/// optionally with modifiers (`ctrl+wheel-up`). Only the wheel frame
/// layout has a modifier byte, so modified buttons are rejected.
pub fn parse_mouse(s: &str) -> Result<Step, ParseSequenceError> {
    let (modifier, name) = split_modifiers(s.trim())?;
    let code = mouse::from_name(name)
        .ok_or_else(|| ParseSequenceError::UnknownMouseAction(name.to_string()))?;

    if !modifier.is_none() && !matches!(code, Code::MouseWheel(_)) {
        return Err(ParseSequenceError::ModifierNotSupported(s.trim().to_string()));
    }
    Ok(Step::new(modifier, code))
}

/// Split `Ctrl+Shift+X` into its modifier set and the trailing name.
fn split_modifiers(token: &str) -> Result<(Modifier, &str), ParseSequenceError> {
    if !token.contains('+') {
        return Ok((Modifier::NONE, token));
    }

    let parts: Vec<&str> = token.split('+').collect();
    if parts.len() < 2 {
        return Err(ParseSequenceError::EmptyCombo);
    }

    let mut modifier = Modifier::NONE;
    for part in &parts[..parts.len() - 1] {
        let part = part.trim();
        modifier |= Modifier::from_name(part)
            .ok_or_else(|| ParseSequenceError::UnknownModifier(part.to_string()))?;
    }
    Ok((modifier, parts.last().unwrap().trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_sequence() {
        let steps = parse_key_sequence("A,B,C").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::plain(keys::A),
                Step::plain(keys::B),
                Step::plain(keys::C),
            ]
        );
    }

    #[test]
    fn parse_combo_sequence() {
        let steps = parse_key_sequence("Ctrl+Shift+A,B").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].modifier, Modifier::CTRL | Modifier::SHIFT);
        assert_eq!(steps[0].code, keys::A);
        assert_eq!(steps[1], Step::plain(keys::B));
    }

    #[test]
    fn parse_whitespace_tolerance() {
        let steps = parse_key_sequence(" A , Shift+B , ").unwrap();
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn parse_empty_is_error() {
        assert_eq!(parse_key_sequence(""), Err(ParseSequenceError::EmptySequence));
        assert_eq!(
            parse_key_sequence(" , ,"),
            Err(ParseSequenceError::EmptySequence)
        );
    }

    #[test]
    fn parse_unknown_key_is_error() {
        assert_eq!(
            parse_key_sequence("Foobar"),
            Err(ParseSequenceError::UnknownKey("Foobar".into()))
        );
    }

    #[test]
    fn parse_unknown_modifier_is_error() {
        assert_eq!(
            parse_key_sequence("Hyper+A"),
            Err(ParseSequenceError::UnknownModifier("Hyper".into()))
        );
    }

    #[test]
    fn parse_media_names() {
        assert_eq!(parse_media("play").unwrap(), media::PLAY);
        assert_eq!(parse_media(" Vol-Up ").unwrap(), media::VOLUME_UP);
        assert!(parse_media("eject").is_err());
    }

    #[test]
    fn parse_mouse_button() {
        assert_eq!(parse_mouse("left").unwrap(), Step::plain(mouse::LEFT));
    }

    #[test]
    fn parse_wheel_with_modifier() {
        let step = parse_mouse("Ctrl+wheel-up").unwrap();
        assert_eq!(step.modifier, Modifier::CTRL);
        assert_eq!(step.code, mouse::WHEEL_UP);
    }

    #[test]
    fn parse_modified_button_is_rejected() {
        assert!(matches!(
            parse_mouse("Ctrl+left"),
            Err(ParseSequenceError::ModifierNotSupported(_))
        ));
    }

    #[test]
    fn parse_key_slots() {
        assert_eq!(parse_key_slot("k1").unwrap(), MacroKey::K1);
        assert_eq!(parse_key_slot("12").unwrap(), MacroKey::K12);
        assert_eq!(parse_key_slot("rot1").unwrap(), MacroKey::Rot1Click);
        assert_eq!(parse_key_slot("ROT2-CW").unwrap(), MacroKey::Rot2Cw);
        assert!(parse_key_slot("k13").is_err());
    }

    #[test]
    fn parse_layers() {
        assert_eq!(parse_layer(1).unwrap(), Layer::Layer1);
        assert_eq!(parse_layer(3).unwrap(), Layer::Layer3);
        assert_eq!(parse_layer(4), Err(ParseSequenceError::InvalidLayer(4)));
    }
}
