//! Driver library for the `xqc` binary: the lex command and the tracing
//! surface. The lexer crates themselves stay silent; everything
//! observable lives here.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call once at startup; later calls are no-ops. Output is gated on
/// `RUST_LOG`, e.g. `RUST_LOG=xqc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
