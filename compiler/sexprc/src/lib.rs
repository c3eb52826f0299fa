//! Command-line host for the sexpr script engine.
//!
//! The binary is a thin argument parser over [`commands`]; everything it does
//! is available here so it can be driven with in-memory input and output.

pub mod commands;

pub use commands::{
    demo, open_parser, parse_forms, parse_run_options, run_script, CommandOutcome, RunOptions,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`, once per process.
/// Does nothing when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
