//! Logging initialization
//!
//! Builds the tracing subscriber used by the CLI: env-filtered, local-time
//! stamped console output, with an optional daily-rolling log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Initializes global tracing output.
///
/// `default_filter` applies when `RUST_LOG` is unset. When `log_dir` is
/// given, output goes to a daily-rolling file in that directory instead of
/// stderr; the returned guard must be held for the life of the process so
/// buffered lines are flushed on exit.
pub fn init(default_filter: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "tripmap.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
