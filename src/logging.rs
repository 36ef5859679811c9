//! Diagnostic logging to standard error.
//!
//! Frames go to standard output, so diagnostics (skipped records, invalid
//! colors, state file activity) are written to standard error as plain
//! `LEVEL message` lines.
//!
//! `RUST_LOG` takes precedence over the default level:
//! ```bash
//! RUST_LOG=pbar=debug pbar --parallel < updates.jsonl
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Level used when `RUST_LOG` is not set.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging with the given default level.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
pub fn init_with_level(level: &str) {
    INIT.call_once(|| {
        // RUST_LOG env var takes precedence over the default
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Initialize logging at [`DEFAULT_LEVEL`].
pub fn init() {
    init_with_level(DEFAULT_LEVEL);
}
