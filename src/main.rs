//! CH57x Macro Keypad Driver CLI
//!
//! A command-line interface for programming CH57x-based macro keypads.

use std::process::ExitCode;

use clap::Parser;

use ch57x_keyboard::KeyboardError;
use ch57x_transport::TransportError;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;
use commands::exit_code;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::utility::list(),
        Commands::Bind {
            key,
            sequence,
            layer,
        } => commands::bind::bind_keys(&key, &sequence, layer),
        Commands::BindMedia { key, code, layer } => commands::bind::bind_media(&key, &code, layer),
        Commands::BindMouse { key, action, layer } => {
            commands::bind::bind_mouse(&key, &action, layer)
        }
        Commands::Apply { file } => commands::bind::apply(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for(e.as_ref())
        }
    }
}

/// Map device-side failures to the documented exit codes; anything else
/// is a generic failure.
fn exit_code_for(error: &(dyn std::error::Error + 'static)) -> ExitCode {
    let transport = error.downcast_ref::<TransportError>().or_else(|| {
        error
            .downcast_ref::<KeyboardError>()
            .and_then(|k| match k {
                KeyboardError::Transport(t) => Some(t),
                _ => None,
            })
    });

    match transport {
        Some(TransportError::HidUnavailable(_)) => ExitCode::from(exit_code::HID_UNSUPPORTED),
        Some(_) => ExitCode::from(exit_code::DEVICE_UNAVAILABLE),
        None => ExitCode::FAILURE,
    }
}
