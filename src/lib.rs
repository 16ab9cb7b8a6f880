// CH57x Macro Keypad Driver - Shared Library
// Binding syntax parsing and mapping-file loading for the CLI

pub mod mapping;
pub mod sequence;
