//! Tracing subscriber setup.
//!
//! One-shot commands log to stderr. The dashboard owns the terminal, so it
//! logs to a file through a non-blocking writer instead.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "SLABOARD_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter with precedence: CLI flag > `SLABOARD_LOG` > config > `warn`.
///
/// Directives that fail to parse fall through to the next source.
pub fn build_env_filter(flag: Option<&str>, configured: Option<&str>) -> EnvFilter {
    let env_value = std::env::var(LOG_ENV).ok();
    [flag, env_value.as_deref(), configured]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a stderr subscriber for CLI commands
pub fn init_stderr(flag: Option<&str>, configured: Option<&str>) {
    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(flag, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        );
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Install a file subscriber for the dashboard.
///
/// The returned guard flushes pending lines on drop and must be held until
/// the dashboard exits. Returns `None` if the log file cannot be created, in
/// which case nothing is logged.
pub fn init_file(path: &Path, flag: Option<&str>, configured: Option<&str>) -> Option<WorkerGuard> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let file_name = path.file_name()?;
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(flag, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        );
    let _ = tracing::subscriber::set_global_default(subscriber);

    Some(guard)
}
