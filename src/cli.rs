// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ch57x_driver")]
#[command(author, version, about = "CH57x Macro Keypad Linux Driver")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List detected keypad interfaces
    #[command(visible_alias = "ls")]
    List,

    /// Bind a key chord to a key slot
    #[command(visible_alias = "b")]
    Bind {
        /// Target key slot (k1-k12, rot1-ccw, rot1, rot1-cw, rot2-...)
        key: String,

        /// Chord sequence, e.g. "Ctrl+A,B"
        sequence: String,

        /// Target layer (1-3)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
        layer: u8,
    },

    /// Bind a media code to a key slot
    #[command(visible_alias = "bm")]
    BindMedia {
        /// Target key slot
        key: String,

        /// Media code (play, prev, next, mute, vol-up, vol-down)
        code: String,

        /// Target layer (1-3)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
        layer: u8,
    },

    /// Bind a mouse button or wheel action to a key slot
    BindMouse {
        /// Target key slot
        key: String,

        /// Mouse action (left, right, middle, wheel-up, wheel-down);
        /// wheel actions accept modifiers, e.g. "ctrl+wheel-up"
        action: String,

        /// Target layer (1-3)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
        layer: u8,
    },

    /// Bind every macro from a TOML mapping file
    #[command(visible_alias = "a")]
    Apply {
        /// Mapping file path
        file: PathBuf,
    },
}
