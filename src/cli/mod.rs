//! Command-line front end for the engine
//!
//! The binary in `src/bin/tictactoe.rs` only parses arguments and sets up
//! logging; the subcommands live here so they can be tested.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Call once, at startup.
///
/// `RUST_LOG` wins when set; otherwise `debug` with `--verbose` and
/// `warn` without.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
