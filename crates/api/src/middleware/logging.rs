//! Tracing subscriber setup.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the configured
/// level. Output format is `json` for production or anything else (pretty)
/// for local development.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    if config.format == "json" {
        builder.json().with_current_span(true).init();
    } else {
        builder.pretty().init();
    }
}
