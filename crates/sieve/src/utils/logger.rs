use std::sync::Once;

use tracing_forest::ForestLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

/// Installs the process-wide `tracing` subscriber for the sieve's spans and events.
///
/// Set the `RUST_LOG` environment variable to `debug` or `trace` to see the sieve's events, and
/// `RUST_LOGGER` to `forest` for a span tree instead of flat lines. Only the first call installs a
/// subscriber; later calls (and calls after another subscriber was installed) are no-ops.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let logger_type = std::env::var("RUST_LOGGER").unwrap_or_else(|_| "flat".to_string());
        let result = match logger_type.as_str() {
            "forest" => Registry::default().with(env_filter).with(ForestLayer::default()).try_init(),
            other => {
                let unknown = other != "flat";
                let result = tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_file(false)
                    .with_target(false)
                    .with_thread_names(false)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .finish()
                    .try_init();
                if unknown {
                    tracing::warn!("unknown RUST_LOGGER {other:?}, using the flat logger");
                }
                result
            }
        };
        if let Err(err) = result {
            tracing::debug!("logger already installed: {err}");
        }
    });
}
