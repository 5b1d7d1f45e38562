//! Telemetry and logging initialization
//!
//! Structured logging with `tracing` and `tracing-subscriber`.
//! stdout is reserved for JSON-RPC, all logs go to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `--verbose` is passed
pub const VERBOSE_FILTER: &str = "debug,tokio=info";

/// Build the env filter: `RUST_LOG` wins, otherwise `default_level`
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing subscriber
///
/// # Arguments
/// * `default_level` - Filter directive used when `RUST_LOG` is unset (e.g. "info", "error")
/// * `json_format` - If true, outputs logs in JSON format for machine parsing
///
/// # Example
/// ```
/// doc_common::telemetry::init_tracing("info", false);
/// tracing::info!("Application started");
/// ```
pub fn init_tracing(default_level: &str, json_format: bool) {
    let env_filter = build_filter(default_level);

    // try_init: a second initialization in the same process is ignored
    if json_format {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr), // Never write to stdout
            )
            .with(env_filter)
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr) // Never write to stdout
                    .with_target(false)
                    .compact(),
            )
            .with(env_filter)
            .try_init();
    }
}
