//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with prompts and animation frames on
//! stdout. The level comes from `[logging] level` in the config file;
//! `RUST_LOG` takes precedence:
//!
//! ```bash
//! RUST_LOG=ezconsole=debug ezconsole prompt --kind integer "Age"
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Build the filter directive for `config`: the level applies to ezconsole's
/// own targets, everything else stays at `warn`.
fn filter_directive(config: &LoggingConfig) -> String {
    format!("warn,ezconsole={}", config.level)
}

/// Initialize logging. Only the first call takes effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directive(config))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

/// Initialize logging at the default `warn` level.
pub fn init() {
    init_with_config(&LoggingConfig::default());
}
