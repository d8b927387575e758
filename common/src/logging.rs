//! Structured logging initialization
//!
//! Provides consistent logging initialization for the generator binaries.

use std::io::{self, IsTerminal};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guard that keeps the tracing subscriber active.
/// Drop this at the end of main to flush logs.
pub struct LogGuard;

/// Initialize structured logging for a component.
///
/// Defaults to `info`; `RUST_LOG` overrides the filter. Colours are only
/// used when stdout is a terminal.
///
/// # Example
/// ```ignore
/// let _guard = init_logging("generate-configs");
/// info!("Starting up...");
/// ```
pub fn init_logging(component: &str) -> LogGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = fmt::layer()
        .with_target(false)
        .with_ansi(io::stdout().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    debug!(component, "Logging initialized");

    LogGuard
}
