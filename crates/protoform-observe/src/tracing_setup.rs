//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! use protoform_observe::tracing_setup::{LogFormat, init_tracing};
//!
//! // Human-readable output
//! init_tracing(LogFormat::Pretty).unwrap();
//! ```
//!
//! ```no_run
//! // One JSON object per event, for log shippers
//! protoform_observe::tracing_setup::init_tracing(
//!     protoform_observe::tracing_setup::LogFormat::Json,
//! )
//! .unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format of the `fmt` layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the global tracing subscriber.
///
/// - Installs a structured `fmt` layer with target visibility and span
///   close timing, plain or JSON.
/// - Respects `RUST_LOG`, falling back to `info`.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::debug!(?format, "Tracing initialized");
    Ok(())
}

/// Install a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call takes effect.
pub fn init_test_tracing() {
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("Test tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_events_reach_installed_subscriber() {
        init_test_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        init_test_tracing();
        init_test_tracing();
        assert!(init_tracing(LogFormat::Json).is_err());
    }
}
