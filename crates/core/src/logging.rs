use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_DIR_ENV: &str = "HIERSCOPE_LOG_DIR";

/// `$HIERSCOPE_LOG_DIR`, falling back to `~/.hierscope/logs`.
pub fn default_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".hierscope/logs")
}

pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    init_logging_in(&default_log_dir(), component, to_stderr)
}

/// Install the global subscriber writing to `log_dir`. If a subscriber is
/// already installed the existing one is kept.
pub fn init_logging_in(log_dir: &Path, component: &str, to_stderr: bool) -> WorkerGuard {
    let _ = std::fs::create_dir_all(log_dir);

    // Roll daily, with the component name as the prefix
    let file_appender = tracing_appender::rolling::daily(log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer: no ANSI colors, output to file
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let installed = if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()
    } else {
        registry.try_init()
    };
    if installed.is_err() {
        tracing::debug!(component, "global subscriber already installed");
    }

    guard
}
