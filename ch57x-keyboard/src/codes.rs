//! Code space of the wch keypad firmware.
//!
//! Keycodes follow the HID Usage Keyboard/Keypad page (0x07) as consumed
//! by the CH57x firmware; media, mouse-button and wheel codes are the
//! firmware's own values. Constants live in the [`keys`], [`media`] and
//! [`mouse`] submodules.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Raw byte of the Play/Pause media code, the one media code the legacy
/// capability tag reports as 0x02.
const MEDIA_PLAY_VALUE: u8 = 0xCD;

/// A device code, tagged by the frame-layout family it belongs to.
///
/// Frame layout dispatch is by variant; [`Code::legacy_tag`] exists only
/// for the firmware's coarse capability check and must not be used to
/// pick a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// HID keyboard usage
    Key(u8),
    /// Media/consumer code
    Media(u8),
    /// Mouse button code
    MouseButton(u8),
    /// Mouse wheel code
    MouseWheel(u8),
}

impl Code {
    /// Raw byte the firmware expects in a data frame
    pub fn value(self) -> u8 {
        match self {
            Code::Key(v) | Code::Media(v) | Code::MouseButton(v) | Code::MouseWheel(v) => v,
        }
    }

    /// Coarse capability tag: 0x01 for keys, 0x02 for media Play only,
    /// 0x03 for everything else.
    ///
    /// The Play exception is firmware behavior, not a derivable rule;
    /// every other media code reports 0x03.
    pub fn legacy_tag(self) -> u8 {
        match self {
            Code::Key(_) => 0x01,
            Code::Media(v) if v == MEDIA_PLAY_VALUE => 0x02,
            Code::Media(_) | Code::MouseButton(_) | Code::MouseWheel(_) => 0x03,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Code::Key(v) => write!(f, "{}", keys::name(v)),
            Code::Media(v) => write!(f, "{}", media::name(v)),
            Code::MouseButton(v) => write!(f, "{}", mouse::button_name(v)),
            Code::MouseWheel(v) => write!(f, "{}", mouse::wheel_name(v)),
        }
    }
}

/// An 8-bit modifier flag set.
///
/// Flags combine with `|`; [`Modifier::NONE`] means no modifier. The bit
/// positions match the modifier byte of a standard HID keyboard report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifier(u8);

impl Modifier {
    pub const NONE: Modifier = Modifier(0);
    pub const CTRL: Modifier = Modifier(0x01);
    pub const SHIFT: Modifier = Modifier(0x02);
    pub const ALT: Modifier = Modifier(0x04);
    pub const WIN: Modifier = Modifier(0x08);
    pub const RCTRL: Modifier = Modifier(0x10);
    pub const RSHIFT: Modifier = Modifier(0x20);
    pub const RALT: Modifier = Modifier(0x40);
    pub const RWIN: Modifier = Modifier(0x80);

    /// Raw bitmask as sent in the frame
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Parse a modifier name to its flag.
    pub fn from_name(name: &str) -> Option<Modifier> {
        match name.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "lctrl" => Some(Modifier::CTRL),
            "shift" | "lshift" => Some(Modifier::SHIFT),
            "alt" | "option" | "lalt" => Some(Modifier::ALT),
            "win" | "gui" | "super" | "cmd" | "lwin" => Some(Modifier::WIN),
            "rctrl" | "rcontrol" => Some(Modifier::RCTRL),
            "rshift" => Some(Modifier::RSHIFT),
            "ralt" | "altgr" => Some(Modifier::RALT),
            "rwin" | "rgui" => Some(Modifier::RWIN),
            _ => None,
        }
    }
}

impl BitOr for Modifier {
    type Output = Modifier;

    fn bitor(self, rhs: Modifier) -> Modifier {
        Modifier(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Modifier) {
        self.0 |= rhs.0;
    }
}

/// HID Usage Keyboard/Keypad page (0x07)
pub mod keys {
    use super::Code;

    pub const NONE: Code = Code::Key(0x00);

    pub const A: Code = Code::Key(0x04);
    pub const B: Code = Code::Key(0x05);
    pub const C: Code = Code::Key(0x06);
    pub const D: Code = Code::Key(0x07);
    pub const E: Code = Code::Key(0x08);
    pub const F: Code = Code::Key(0x09);
    pub const G: Code = Code::Key(0x0A);
    pub const H: Code = Code::Key(0x0B);
    pub const I: Code = Code::Key(0x0C);
    pub const J: Code = Code::Key(0x0D);
    pub const K: Code = Code::Key(0x0E);
    pub const L: Code = Code::Key(0x0F);
    pub const M: Code = Code::Key(0x10);
    pub const N: Code = Code::Key(0x11);
    pub const O: Code = Code::Key(0x12);
    pub const P: Code = Code::Key(0x13);
    pub const Q: Code = Code::Key(0x14);
    pub const R: Code = Code::Key(0x15);
    pub const S: Code = Code::Key(0x16);
    pub const T: Code = Code::Key(0x17);
    pub const U: Code = Code::Key(0x18);
    pub const V: Code = Code::Key(0x19);
    pub const W: Code = Code::Key(0x1A);
    pub const X: Code = Code::Key(0x1B);
    pub const Y: Code = Code::Key(0x1C);
    pub const Z: Code = Code::Key(0x1D);

    pub const N1: Code = Code::Key(0x1E);
    pub const N2: Code = Code::Key(0x1F);
    pub const N3: Code = Code::Key(0x20);
    pub const N4: Code = Code::Key(0x21);
    pub const N5: Code = Code::Key(0x22);
    pub const N6: Code = Code::Key(0x23);
    pub const N7: Code = Code::Key(0x24);
    pub const N8: Code = Code::Key(0x25);
    pub const N9: Code = Code::Key(0x26);
    pub const N0: Code = Code::Key(0x27);

    pub const ENTER: Code = Code::Key(0x28);
    pub const ESCAPE: Code = Code::Key(0x29);
    pub const BACKSPACE: Code = Code::Key(0x2A);
    pub const TAB: Code = Code::Key(0x2B);
    pub const SPACE: Code = Code::Key(0x2C);
    pub const MINUS: Code = Code::Key(0x2D);
    pub const EQUAL: Code = Code::Key(0x2E);
    pub const LEFT_BRACKET: Code = Code::Key(0x2F);
    pub const RIGHT_BRACKET: Code = Code::Key(0x30);
    pub const BACKSLASH: Code = Code::Key(0x31);
    pub const NONUS_HASH: Code = Code::Key(0x32);
    pub const SEMICOLON: Code = Code::Key(0x33);
    pub const QUOTE: Code = Code::Key(0x34);
    pub const GRAVE: Code = Code::Key(0x35);
    pub const COMMA: Code = Code::Key(0x36);
    pub const DOT: Code = Code::Key(0x37);
    pub const SLASH: Code = Code::Key(0x38);
    pub const CAPS_LOCK: Code = Code::Key(0x39);

    pub const F1: Code = Code::Key(0x3A);
    pub const F2: Code = Code::Key(0x3B);
    pub const F3: Code = Code::Key(0x3C);
    pub const F4: Code = Code::Key(0x3D);
    pub const F5: Code = Code::Key(0x3E);
    pub const F6: Code = Code::Key(0x3F);
    pub const F7: Code = Code::Key(0x40);
    pub const F8: Code = Code::Key(0x41);
    pub const F9: Code = Code::Key(0x42);
    pub const F10: Code = Code::Key(0x43);
    pub const F11: Code = Code::Key(0x44);
    pub const F12: Code = Code::Key(0x45);

    pub const PRINT_SCREEN: Code = Code::Key(0x46);
    pub const SCROLL_LOCK: Code = Code::Key(0x47);
    pub const PAUSE: Code = Code::Key(0x48);
    pub const INSERT: Code = Code::Key(0x49);
    pub const HOME: Code = Code::Key(0x4A);
    pub const PAGE_UP: Code = Code::Key(0x4B);
    pub const DELETE: Code = Code::Key(0x4C);
    pub const END: Code = Code::Key(0x4D);
    pub const PAGE_DOWN: Code = Code::Key(0x4E);
    pub const RIGHT: Code = Code::Key(0x4F);
    pub const LEFT: Code = Code::Key(0x50);
    pub const DOWN: Code = Code::Key(0x51);
    pub const UP: Code = Code::Key(0x52);

    pub const NUM_LOCK: Code = Code::Key(0x53);
    pub const KP_SLASH: Code = Code::Key(0x54);
    pub const KP_ASTERISK: Code = Code::Key(0x55);
    pub const KP_MINUS: Code = Code::Key(0x56);
    pub const KP_PLUS: Code = Code::Key(0x57);
    pub const KP_ENTER: Code = Code::Key(0x58);
    pub const KP_1: Code = Code::Key(0x59);
    pub const KP_2: Code = Code::Key(0x5A);
    pub const KP_3: Code = Code::Key(0x5B);
    pub const KP_4: Code = Code::Key(0x5C);
    pub const KP_5: Code = Code::Key(0x5D);
    pub const KP_6: Code = Code::Key(0x5E);
    pub const KP_7: Code = Code::Key(0x5F);
    pub const KP_8: Code = Code::Key(0x60);
    pub const KP_9: Code = Code::Key(0x61);
    pub const KP_0: Code = Code::Key(0x62);
    pub const KP_DOT: Code = Code::Key(0x63);
    pub const NONUS_BACKSLASH: Code = Code::Key(0x64);
    pub const APPLICATION: Code = Code::Key(0x65);
    pub const POWER: Code = Code::Key(0x66);
    pub const KP_EQUAL: Code = Code::Key(0x67);

    /// Name of a keyboard usage code, for diagnostics
    pub fn name(code: u8) -> &'static str {
        match code {
            0x00 => "None",
            0x04 => "A", 0x05 => "B", 0x06 => "C", 0x07 => "D",
            0x08 => "E", 0x09 => "F", 0x0A => "G", 0x0B => "H",
            0x0C => "I", 0x0D => "J", 0x0E => "K", 0x0F => "L",
            0x10 => "M", 0x11 => "N", 0x12 => "O", 0x13 => "P",
            0x14 => "Q", 0x15 => "R", 0x16 => "S", 0x17 => "T",
            0x18 => "U", 0x19 => "V", 0x1A => "W", 0x1B => "X",
            0x1C => "Y", 0x1D => "Z",
            0x1E => "1", 0x1F => "2", 0x20 => "3", 0x21 => "4",
            0x22 => "5", 0x23 => "6", 0x24 => "7", 0x25 => "8",
            0x26 => "9", 0x27 => "0",
            0x28 => "Enter", 0x29 => "Escape", 0x2A => "Backspace",
            0x2B => "Tab", 0x2C => "Space", 0x2D => "-", 0x2E => "=",
            0x2F => "[", 0x30 => "]", 0x31 => "\\", 0x32 => "#",
            0x33 => ";", 0x34 => "'", 0x35 => "`", 0x36 => ",",
            0x37 => ".", 0x38 => "/", 0x39 => "CapsLock",
            0x3A => "F1", 0x3B => "F2", 0x3C => "F3", 0x3D => "F4",
            0x3E => "F5", 0x3F => "F6", 0x40 => "F7", 0x41 => "F8",
            0x42 => "F9", 0x43 => "F10", 0x44 => "F11", 0x45 => "F12",
            0x46 => "PrintScr", 0x47 => "ScrollLock", 0x48 => "Pause",
            0x49 => "Insert", 0x4A => "Home", 0x4B => "PageUp",
            0x4C => "Delete", 0x4D => "End", 0x4E => "PageDown",
            0x4F => "Right", 0x50 => "Left", 0x51 => "Down", 0x52 => "Up",
            0x53 => "NumLock", 0x54 => "KP/", 0x55 => "KP*", 0x56 => "KP-",
            0x57 => "KP+", 0x58 => "KPEnter",
            0x59 => "KP1", 0x5A => "KP2", 0x5B => "KP3", 0x5C => "KP4",
            0x5D => "KP5", 0x5E => "KP6", 0x5F => "KP7", 0x60 => "KP8",
            0x61 => "KP9", 0x62 => "KP0", 0x63 => "KP.",
            0x64 => "NonUS\\", 0x65 => "App", 0x66 => "Power",
            0x67 => "KP=",
            _ => "?",
        }
    }

    /// Look up a keyboard code by name or alias.
    pub fn from_name(name: &str) -> Option<Code> {
        let code = match name.to_ascii_lowercase().as_str() {
            "a" => A, "b" => B, "c" => C, "d" => D, "e" => E, "f" => F,
            "g" => G, "h" => H, "i" => I, "j" => J, "k" => K, "l" => L,
            "m" => M, "n" => N, "o" => O, "p" => P, "q" => Q, "r" => R,
            "s" => S, "t" => T, "u" => U, "v" => V, "w" => W, "x" => X,
            "y" => Y, "z" => Z,
            "1" => N1, "2" => N2, "3" => N3, "4" => N4, "5" => N5,
            "6" => N6, "7" => N7, "8" => N8, "9" => N9, "0" => N0,
            "enter" | "return" => ENTER,
            "escape" | "esc" => ESCAPE,
            "backspace" | "bspace" => BACKSPACE,
            "tab" => TAB,
            "space" => SPACE,
            "minus" | "-" => MINUS,
            "equal" | "=" => EQUAL,
            "lbracket" | "[" => LEFT_BRACKET,
            "rbracket" | "]" => RIGHT_BRACKET,
            "backslash" | "bslash" | "\\" => BACKSLASH,
            "nonus-hash" => NONUS_HASH,
            "semicolon" | "scolon" | ";" => SEMICOLON,
            "quote" | "'" => QUOTE,
            "grave" | "`" => GRAVE,
            "comma" | "," => COMMA,
            "dot" | "period" | "." => DOT,
            "slash" | "/" => SLASH,
            "capslock" | "caps" => CAPS_LOCK,
            "f1" => F1, "f2" => F2, "f3" => F3, "f4" => F4,
            "f5" => F5, "f6" => F6, "f7" => F7, "f8" => F8,
            "f9" => F9, "f10" => F10, "f11" => F11, "f12" => F12,
            "printscreen" | "pscreen" | "prtsc" => PRINT_SCREEN,
            "scrolllock" => SCROLL_LOCK,
            "pause" => PAUSE,
            "insert" | "ins" => INSERT,
            "home" => HOME,
            "pageup" | "pgup" => PAGE_UP,
            "delete" | "del" => DELETE,
            "end" => END,
            "pagedown" | "pgdown" => PAGE_DOWN,
            "right" => RIGHT,
            "left" => LEFT,
            "down" => DOWN,
            "up" => UP,
            "numlock" => NUM_LOCK,
            "kp-slash" => KP_SLASH,
            "kp-asterisk" | "kp-star" => KP_ASTERISK,
            "kp-minus" => KP_MINUS,
            "kp-plus" => KP_PLUS,
            "kp-enter" => KP_ENTER,
            "kp1" => KP_1, "kp2" => KP_2, "kp3" => KP_3, "kp4" => KP_4,
            "kp5" => KP_5, "kp6" => KP_6, "kp7" => KP_7, "kp8" => KP_8,
            "kp9" => KP_9, "kp0" => KP_0,
            "kp-dot" => KP_DOT,
            "nonus-backslash" => NONUS_BACKSLASH,
            "app" | "application" | "menu" => APPLICATION,
            "power" => POWER,
            "kp-equal" => KP_EQUAL,
            _ => return None,
        };
        Some(code)
    }
}

/// Media codes. Only Play carries the 0x02 legacy tag; see
/// [`Code::legacy_tag`].
pub mod media {
    use super::{Code, MEDIA_PLAY_VALUE};

    pub const PLAY: Code = Code::Media(MEDIA_PLAY_VALUE);
    pub const PREV: Code = Code::Media(0xB6);
    pub const NEXT: Code = Code::Media(0xB5);
    pub const MUTE: Code = Code::Media(0xE2);
    pub const VOLUME_UP: Code = Code::Media(0xE9);
    pub const VOLUME_DOWN: Code = Code::Media(0xEA);

    pub fn name(code: u8) -> &'static str {
        match code {
            0xCD => "Play",
            0xB6 => "Prev",
            0xB5 => "Next",
            0xE2 => "Mute",
            0xE9 => "Vol+",
            0xEA => "Vol-",
            _ => "?",
        }
    }

    /// Look up a media code by name.
    pub fn from_name(name: &str) -> Option<Code> {
        let code = match name.to_ascii_lowercase().as_str() {
            "play" | "playpause" | "play-pause" => PLAY,
            "prev" | "previous" => PREV,
            "next" => NEXT,
            "mute" => MUTE,
            "vol-up" | "volup" | "volume-up" => VOLUME_UP,
            "vol-down" | "voldown" | "volume-down" => VOLUME_DOWN,
            _ => return None,
        };
        Some(code)
    }
}

/// Mouse button and wheel codes
pub mod mouse {
    use super::Code;

    pub const LEFT: Code = Code::MouseButton(0x01);
    pub const RIGHT: Code = Code::MouseButton(0x02);
    pub const MIDDLE: Code = Code::MouseButton(0x04);

    /// Wheel rest position; bindable but a no-op on the device.
    pub const WHEEL_NEUTRAL: Code = Code::MouseWheel(0x00);
    pub const WHEEL_UP: Code = Code::MouseWheel(0x01);
    pub const WHEEL_DOWN: Code = Code::MouseWheel(0xFF);

    pub fn button_name(code: u8) -> &'static str {
        match code {
            0x01 => "MouseLeft",
            0x02 => "MouseRight",
            0x04 => "MouseMiddle",
            _ => "?",
        }
    }

    pub fn wheel_name(code: u8) -> &'static str {
        match code {
            0x00 => "WheelNeutral",
            0x01 => "WheelUp",
            0xFF => "WheelDown",
            _ => "?",
        }
    }

    /// Look up a mouse action (button or wheel) by name.
    pub fn from_name(name: &str) -> Option<Code> {
        let code = match name.to_ascii_lowercase().as_str() {
            "left" | "mouse-left" | "mouse1" => LEFT,
            "right" | "mouse-right" | "mouse2" => RIGHT,
            "middle" | "mouse-middle" | "mouse3" => MIDDLE,
            "wheel-up" | "wheelup" => WHEEL_UP,
            "wheel-down" | "wheeldown" => WHEEL_DOWN,
            _ => return None,
        };
        Some(code)
    }
}
