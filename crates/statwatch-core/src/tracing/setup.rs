//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "STATWATCH_LOG";

/// Initialize the statwatch tracing/logging system.
///
/// Reads `STATWATCH_LOG` for per-target log levels.
/// Format: `STATWATCH_LOG=statwatch_monitor=debug,statwatch_agent=info`
///
/// Falls back to `default_filter` (normally `observability.log_level`
/// from the config) if `STATWATCH_LOG` is not set or is invalid.
///
/// Log output goes to stderr so stdout carries alert lines only.
/// Calling this more than once is a no-op.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
