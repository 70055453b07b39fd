use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Environment variable that switches file logging on
pub const DEBUG_ENV: &str = "DISKPROBE_DEBUG";

/// Directory the rolling log files go to
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("diskprobe")
}

/// Non-blocking writer over a daily rolling file in `log_dir`
///
/// Returns `None` when the directory or file cannot be created.
fn file_writer(log_dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("diskprobe")
        .filename_suffix("log")
        .build(log_dir);

    appender.ok().map(tracing_appender::non_blocking)
}

/// Initialize logging based on DISKPROBE_DEBUG environment variable
///
/// Returns `None` when logging is off, when the log directory is unusable, or
/// when a global subscriber was already installed by the host.
pub fn init_logging() -> Option<WorkerGuard> {
    std::env::var_os(DEBUG_ENV)?;

    let log_dir = log_dir();
    let (non_blocking, guard) = file_writer(&log_dir)?;

    let installed = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .try_init();
    if installed.is_err() {
        return None;
    }

    tracing::info!("diskprobe logging initialized in {}", log_dir.display());
    Some(guard)
}
