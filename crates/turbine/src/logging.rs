//! Logging system setup.
//!
//! Initializes the tracing-based logging used throughout the add-on.
//! Hosts that already install a global subscriber can skip this entirely;
//! it exists for standalone harnesses and development runs.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging.
///
/// The filter respects the `RUST_LOG` environment variable, falling back
/// to `level`. With `json_format` the output is structured JSON, useful
/// for log aggregation systems.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: &str, json_format: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json_format {
        registry
            .with(fmt::layer().json().with_target(false))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()?;
    }

    Ok(())
}
