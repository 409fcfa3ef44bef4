//! Tracing initialization.

use std::sync::Once;

use pawsense_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "PAWSENSE_LOG";

/// Used when `PAWSENSE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pawsense=info";

static INIT: Once = Once::new();

/// Initialize logging from `PAWSENSE_LOG`.
///
/// Format: `PAWSENSE_LOG=pawsense_transitions=debug,pawsense_ingest=warn`.
/// Falls back to `pawsense=info`. Idempotent.
pub fn init_tracing() {
    install(
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        false,
    );
}

/// Initialize logging from config. `PAWSENSE_LOG` still wins when set and
/// valid; otherwise every `pawsense*` target logs at `log_level`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config_directive(&config.log_level)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, config.json_output);
}

/// Initialize logging with an explicit filter directive, ignoring the
/// environment. For hosts that embed the library.
pub fn init_tracing_with_filter(directive: &str, json: bool) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, json);
}

/// Filter directive for a bare level such as `debug`. Target matching is by
/// prefix, so `pawsense=` covers every workspace crate. Anything already
/// shaped like a directive passes through.
pub fn config_directive(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("pawsense={level}")
    }
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // The host may already own the global subscriber.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
    });
}
