//! Declarative key mapping files.
//!
//! A mapping file is TOML with one `[[macros]]` table per binding, each
//! naming a key slot and exactly one action:
//!
//! ```toml
//! [[macros]]
//! key = "k1"
//! keys = "Ctrl+A,B"
//!
//! [[macros]]
//! key = "k5"
//! layer = 2
//! media = "play"
//!
//! [[macros]]
//! key = "rot1-cw"
//! mouse = "wheel-up"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use ch57x_keyboard::{KeyboardError, Macro, Step};

use crate::sequence::{self, ParseSequenceError};

/// Deserialized mapping file
#[derive(Debug, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub macros: Vec<MacroEntry>,
}

/// One `[[macros]]` table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroEntry {
    /// Target key slot name
    pub key: String,
    /// Target layer (1-3), defaulting to 1
    pub layer: Option<u8>,
    /// Chord sequence, e.g. `"Ctrl+A,B"`
    pub keys: Option<String>,
    /// Media code name, e.g. `"play"`
    pub media: Option<String>,
    /// Mouse action, e.g. `"wheel-up"` or `"ctrl+wheel-up"`
    pub mouse: Option<String>,
}

/// Error type for loading a mapping file.
#[derive(Debug)]
pub enum MappingError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    /// A field of the entry for `key` failed to parse
    Entry(String, ParseSequenceError),
    /// The entry defines no action at all
    MissingAction(String),
    /// The entry defines more than one of `keys`/`media`/`mouse`
    MultipleActions(String),
    /// The steps could not be assembled into a macro
    Build(String, KeyboardError),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "cannot read mapping file: {e}"),
            Self::Parse(e) => write!(f, "invalid mapping file: {e}"),
            Self::Entry(key, e) => write!(f, "macro for \"{key}\": {e}"),
            Self::MissingAction(key) => {
                write!(f, "macro for \"{key}\": no keys/media/mouse action given")
            }
            Self::MultipleActions(key) => {
                write!(f, "macro for \"{key}\": more than one action given")
            }
            Self::Build(key, e) => write!(f, "macro for \"{key}\": {e}"),
        }
    }
}

impl std::error::Error for MappingError {}

/// Load a mapping file and build its macros
pub fn load(path: &Path) -> Result<Vec<Macro>, MappingError> {
    let text = fs::read_to_string(path).map_err(MappingError::Read)?;
    parse(&text)
}

/// Parse mapping-file text and build its macros
pub fn parse(text: &str) -> Result<Vec<Macro>, MappingError> {
    let file: MappingFile = toml::from_str(text).map_err(MappingError::Parse)?;
    file.macros.iter().map(build_entry).collect()
}

fn build_entry(entry: &MacroEntry) -> Result<Macro, MappingError> {
    let slot = sequence::parse_key_slot(&entry.key)
        .map_err(|e| MappingError::Entry(entry.key.clone(), e))?;
    let layer = sequence::parse_layer(entry.layer.unwrap_or(1))
        .map_err(|e| MappingError::Entry(entry.key.clone(), e))?;

    let m = match (&entry.keys, &entry.media, &entry.mouse) {
        (Some(seq), None, None) => {
            let steps = sequence::parse_key_sequence(seq)
                .map_err(|e| MappingError::Entry(entry.key.clone(), e))?;
            let mut m = Macro::new(slot);
            for step in steps {
                m.add(step.modifier, step.code)
                    .map_err(|e| MappingError::Build(entry.key.clone(), e))?;
            }
            m
        }
        (None, Some(name), None) => {
            let code = sequence::parse_media(name)
                .map_err(|e| MappingError::Entry(entry.key.clone(), e))?;
            Macro::seeded(slot, Step::plain(code))
        }
        (None, None, Some(action)) => {
            let step = sequence::parse_mouse(action)
                .map_err(|e| MappingError::Entry(entry.key.clone(), e))?;
            Macro::seeded(slot, step)
        }
        (None, None, None) => return Err(MappingError::MissingAction(entry.key.clone())),
        _ => return Err(MappingError::MultipleActions(entry.key.clone())),
    };

    Ok(m.with_layer(layer))
}
