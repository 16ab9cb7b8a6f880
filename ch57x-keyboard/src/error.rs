//! Binding error types

use ch57x_transport::TransportError;
use thiserror::Error;

use crate::macros::MacroKind;

/// Errors from building or binding macros
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// A step's code family conflicts with the macro's locked kind.
    ///
    /// The offending step is rejected; the macro is unchanged and stays
    /// usable.
    #[error("cannot mix a {offered} step into a {locked} macro")]
    TypeMixing {
        locked: MacroKind,
        offered: MacroKind,
    },

    /// The macro has no frame layout: nothing was ever added to it, or
    /// its kind is one the firmware does not understand.
    #[error("cannot bind a macro of kind {0}")]
    UnsupportedMacroType(MacroKind),

    /// Transport failure. Aborts the current transaction immediately; no
    /// further frames (including the end frame) are sent.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
