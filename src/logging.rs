//! Tracing subscriber setup for the `aeos` binary.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::runtime_config::LogFormat;

const DEFAULT_FILTER: &str = "aeos=info,aeos_lib=info";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// Later calls are no-ops, and an already-installed subscriber is left alone.
pub fn init(format: LogFormat) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let installed = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
