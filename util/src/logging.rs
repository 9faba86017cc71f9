//! Tracing subscriber setup shared by the binaries in this workspace.

use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory the rolling log files are written to.
pub const LOG_DIR: &str = "logs";

/// Installs the global subscriber: an `EnvFilter` taken from `LOG_LEVEL`
/// (falling back to `default_filter`), a daily-rolling file layer and an
/// optional console layer. The console layer writes to stderr; stdout is
/// reserved for report output.
///
/// The returned guard flushes the file writer on drop, so keep it alive
/// for the lifetime of the process.
pub fn init_logging(log_file: &str, default_filter: &str, log_to_stdout: bool) -> WorkerGuard {
    fs::create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(console_layer).init();
    } else {
        registry.init();
    }

    guard
}
