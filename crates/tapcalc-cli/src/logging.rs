//! Log output for the command line
//!
//! Library events go to stderr so stdout stays clean for display output.
//! `RUST_LOG` takes precedence over the verbosity flags:
//!
//! ```bash
//! RUST_LOG=tapcalc=debug tapcalc press 1 2 + 3 =
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Verbosity;

static INIT: Once = Once::new();

/// Builds the filter for a verbosity level unless `RUST_LOG` is set
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity.filter_directive())
    }
}

/// Initialize logging for a verbosity level.
///
/// Call once at startup. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_level(true)
            .with_filter(filter_for(verbosity));

        // Another subscriber may already be installed by an embedding host
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
