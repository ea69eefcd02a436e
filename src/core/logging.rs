//! Logging setup.
//!
//! Two layers on one registry:
//! - JSON lines to a daily rolling file under the data directory
//! - human-readable output on stderr (stdout carries command output)
//!
//! `log` macros are bridged into `tracing` (tracing-subscriber's `tracing-log`
//! feature) so both styles end up in the same sinks.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::AppConfig;

const LOG_FILE_PREFIX: &str = "creature-dice.log";

/// Initialize logging for the command-line driver.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the config.
/// Returns the file writer's guard when file logging is active; keep it
/// alive until exit so buffered lines are flushed.
pub fn init(config: &AppConfig) -> Option<WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(build_filter(&config.logging.filter));

    let log_dir = config.log_dir();
    let (file_layer, guard) = if config.logging.file_logging && ensure_dir(&log_dir) {
        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // JSON for easy parsing/ingestion
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true)
            .with_filter(build_filter(&config.logging.filter));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    // try_init also installs the `log` -> `tracing` bridge
    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {e}");
        return guard;
    }

    tracing::debug!(log_dir = %log_dir.display(), "Logging initialized");
    guard
}

fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| directive_filter(fallback))
}

fn directive_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn ensure_dir(dir: &Path) -> bool {
    if dir.exists() {
        return true;
    }
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to create logs directory {}: {e}", dir.display());
            false
        }
    }
}
