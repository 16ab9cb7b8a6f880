//! Macro model: the bindable unit consumed by the frame encoder.
//!
//! A [`Macro`] targets one key slot on one layer and holds an ordered,
//! type-homogeneous sequence of steps. The kind is inferred from the
//! first code added and locked from then on; appending a code of a
//! different family fails with [`KeyboardError::TypeMixing`] instead of
//! silently coercing; the firmware has no frame layout for mixed
//! sequences.

use std::fmt;

use crate::codes::{keys, Code, Modifier};
use crate::error::KeyboardError;

/// Physical key slot a macro is assigned to: the twelve keys plus the
/// six rotary-encoder events. The discriminant is the slot-id byte sent
/// in every data frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MacroKey {
    K1 = 1,
    K2,
    K3,
    K4,
    K5,
    K6,
    K7,
    K8,
    K9,
    K10,
    K11,
    K12,
    /// First encoder, counter-clockwise turn
    Rot1Ccw,
    /// First encoder, push
    Rot1Click,
    /// First encoder, clockwise turn
    Rot1Cw,
    Rot2Ccw,
    Rot2Click,
    Rot2Cw,
}

impl MacroKey {
    /// Slot-id byte (byte 0 of every data frame)
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MacroKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MacroKey::K1 => "k1",
            MacroKey::K2 => "k2",
            MacroKey::K3 => "k3",
            MacroKey::K4 => "k4",
            MacroKey::K5 => "k5",
            MacroKey::K6 => "k6",
            MacroKey::K7 => "k7",
            MacroKey::K8 => "k8",
            MacroKey::K9 => "k9",
            MacroKey::K10 => "k10",
            MacroKey::K11 => "k11",
            MacroKey::K12 => "k12",
            MacroKey::Rot1Ccw => "rot1-ccw",
            MacroKey::Rot1Click => "rot1",
            MacroKey::Rot1Cw => "rot1-cw",
            MacroKey::Rot2Ccw => "rot2-ccw",
            MacroKey::Rot2Click => "rot2",
            MacroKey::Rot2Cw => "rot2-cw",
        };
        write!(f, "{name}")
    }
}

/// Key-mapping bank. The firmware keeps three independent banks selected
/// by a physical switch; a binding lives on exactly one of them. The
/// discriminant is the wire constant summed into byte 1 of data frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Layer {
    #[default]
    Layer1 = 0x10,
    Layer2 = 0x20,
    Layer3 = 0x30,
}

impl Layer {
    /// Wire constant for byte 1
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Layer from its 1-based index
    pub fn from_index(index: u8) -> Option<Layer> {
        match index {
            1 => Some(Layer::Layer1),
            2 => Some(Layer::Layer2),
            3 => Some(Layer::Layer3),
            _ => None,
        }
    }

    /// 1-based index
    pub fn index(self) -> u8 {
        match self {
            Layer::Layer1 => 1,
            Layer::Layer2 => 2,
            Layer::Layer3 => 3,
        }
    }
}

/// Locked category of a macro, determining frame layout. The
/// discriminant is the wire constant summed into byte 1 of data frames;
/// layer and kind ranges never overlap bits, so the sum is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MacroKind {
    /// No steps added yet; not encodable
    #[default]
    None = 0x00,
    Keys = 0x01,
    Media = 0x02,
    Mouse = 0x03,
}

impl MacroKind {
    /// Wire constant for byte 1
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Kind implied by a code's family
    pub fn of(code: Code) -> MacroKind {
        match code {
            Code::Key(_) => MacroKind::Keys,
            Code::Media(_) => MacroKind::Media,
            Code::MouseButton(_) | Code::MouseWheel(_) => MacroKind::Mouse,
        }
    }
}

impl fmt::Display for MacroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MacroKind::None => "none",
            MacroKind::Keys => "keys",
            MacroKind::Media => "media",
            MacroKind::Mouse => "mouse",
        };
        write!(f, "{name}")
    }
}

/// One (modifier, code) element of a macro's sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub modifier: Modifier,
    pub code: Code,
}

impl Step {
    /// Framing placeholder: no modifier, zero key code. Prepended to
    /// key-kind macros by the encoder; never a user-visible binding.
    pub const EMPTY: Step = Step {
        modifier: Modifier::NONE,
        code: keys::NONE,
    };

    pub fn new(modifier: Modifier, code: Code) -> Step {
        Step { modifier, code }
    }

    /// Step with no modifier
    pub fn plain(code: Code) -> Step {
        Step::new(Modifier::NONE, code)
    }
}

/// The bindable unit: a target key slot on a layer with an ordered,
/// type-homogeneous step sequence.
///
/// Built empty (or seeded with one step), grown with [`Macro::add`], and
/// consumed once by the frame encoder. Step order matters for key
/// chords; media and mouse macros only ever encode their first step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    key: MacroKey,
    layer: Layer,
    kind: MacroKind,
    steps: Vec<Step>,
}

impl Macro {
    /// Empty macro on layer 1 with no kind yet
    pub fn new(key: MacroKey) -> Macro {
        Macro {
            key,
            layer: Layer::default(),
            kind: MacroKind::None,
            steps: Vec::new(),
        }
    }

    /// Macro seeded with one step; the kind locks to the step's code
    /// family immediately.
    pub fn seeded(key: MacroKey, step: Step) -> Macro {
        Macro {
            key,
            layer: Layer::default(),
            kind: MacroKind::of(step.code),
            steps: vec![step],
        }
    }

    /// Move the macro to another layer
    pub fn with_layer(mut self, layer: Layer) -> Macro {
        self.layer = layer;
        self
    }

    pub fn key(&self) -> MacroKey {
        self.key
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn kind(&self) -> MacroKind {
        self.kind
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of user-supplied steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step.
    ///
    /// The first step locks the macro's kind to the code's family; later
    /// steps of a different family fail with
    /// [`KeyboardError::TypeMixing`] and leave the macro unchanged.
    pub fn add(&mut self, modifier: Modifier, code: Code) -> Result<(), KeyboardError> {
        let offered = MacroKind::of(code);
        if self.kind == MacroKind::None {
            self.kind = offered;
        } else if self.kind != offered {
            return Err(KeyboardError::TypeMixing {
                locked: self.kind,
                offered,
            });
        }
        self.steps.push(Step::new(modifier, code));
        Ok(())
    }

    /// Append an unmodified code
    pub fn add_code(&mut self, code: Code) -> Result<(), KeyboardError> {
        self.add(Modifier::NONE, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{media, mouse};

    #[test]
    fn new_macro_is_empty_and_kindless() {
        let m = Macro::new(MacroKey::K1);
        assert_eq!(m.kind(), MacroKind::None);
        assert_eq!(m.layer(), Layer::Layer1);
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn first_add_locks_kind() {
        let mut m = Macro::new(MacroKey::K1);
        m.add_code(keys::A).unwrap();
        assert_eq!(m.kind(), MacroKind::Keys);

        let mut m = Macro::new(MacroKey::K2);
        m.add_code(media::MUTE).unwrap();
        assert_eq!(m.kind(), MacroKind::Media);

        let mut m = Macro::new(MacroKey::K3);
        m.add_code(mouse::LEFT).unwrap();
        assert_eq!(m.kind(), MacroKind::Mouse);

        // Both wheel and button codes map to the mouse kind
        let mut m = Macro::new(MacroKey::K4);
        m.add_code(mouse::WHEEL_UP).unwrap();
        assert_eq!(m.kind(), MacroKind::Mouse);
    }

    #[test]
    fn seeded_macro_infers_kind() {
        let m = Macro::seeded(MacroKey::K5, Step::plain(media::PLAY));
        assert_eq!(m.kind(), MacroKind::Media);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn keys_macro_rejects_every_other_family() {
        let mut m = Macro::new(MacroKey::K1);
        m.add(Modifier::SHIFT, keys::A).unwrap();

        for code in [media::PLAY, media::MUTE, mouse::LEFT, mouse::WHEEL_DOWN] {
            let err = m.add_code(code).unwrap_err();
            match err {
                KeyboardError::TypeMixing { locked, .. } => assert_eq!(locked, MacroKind::Keys),
                other => panic!("expected TypeMixing, got {other}"),
            }
        }

        // Rejected steps must not grow the sequence, and the macro stays
        // usable for matching codes.
        assert_eq!(m.len(), 1);
        m.add_code(keys::B).unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn media_macro_rejects_keys_and_mouse() {
        let mut m = Macro::seeded(MacroKey::K6, Step::plain(media::NEXT));
        assert!(matches!(
            m.add_code(keys::A),
            Err(KeyboardError::TypeMixing {
                locked: MacroKind::Media,
                offered: MacroKind::Keys,
            })
        ));
        assert!(matches!(
            m.add_code(mouse::MIDDLE),
            Err(KeyboardError::TypeMixing {
                locked: MacroKind::Media,
                offered: MacroKind::Mouse,
            })
        ));
    }

    #[test]
    fn mouse_macro_accepts_both_mouse_families() {
        // Buttons and wheel events share the mouse kind; mixing them is
        // legal at the model level (the encoder only reads the first).
        let mut m = Macro::seeded(MacroKey::Rot1Cw, Step::plain(mouse::WHEEL_UP));
        m.add_code(mouse::LEFT).unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn with_layer_moves_the_binding() {
        let m = Macro::new(MacroKey::K7).with_layer(Layer::Layer3);
        assert_eq!(m.layer(), Layer::Layer3);
        assert_eq!(m.layer().value(), 0x30);
    }

    #[test]
    fn slot_ids_match_the_wire() {
        assert_eq!(MacroKey::K1.value(), 1);
        assert_eq!(MacroKey::K12.value(), 12);
        assert_eq!(MacroKey::Rot1Ccw.value(), 13);
        assert_eq!(MacroKey::Rot2Cw.value(), 18);
    }

    #[test]
    fn layer_index_round_trip() {
        for index in 1..=3 {
            assert_eq!(Layer::from_index(index).unwrap().index(), index);
        }
        assert_eq!(Layer::from_index(0), None);
        assert_eq!(Layer::from_index(4), None);
    }
}
