//! Logging setup using the tracing ecosystem.
//!
//! Log output goes to a daily rotating file so it never draws over the
//! table. The level is taken from `RUST_LOG`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "lazytable=info,warn";

/// File name prefix of the rotated log files.
const LOG_FILE_PREFIX: &str = "lazytable.log";

/// Keeps the background log writer alive. Drop it last.
#[must_use = "logs are lost once the guard is dropped"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Initialize logging into the default log directory.
///
/// Logs are stored in the platform-specific local data directory:
/// - Linux: `~/.local/share/lazytable/logs/`
/// - macOS: `~/Library/Application Support/lazytable/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\lazytable\logs\`
///
/// Configure the level via `RUST_LOG`, e.g. `RUST_LOG=lazytable=debug`
/// for state transitions or `lazytable=trace` to also see every pending
/// field change.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created,
/// or if a global subscriber is already set.
pub fn init() -> anyhow::Result<LogGuard> {
    let log_dir = get_log_directory()?;
    init_in(&log_dir)
}

/// Initialize logging into `log_dir`.
pub fn init_in(log_dir: &Path) -> anyhow::Result<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(std::env::var("RUST_LOG").ok().as_deref()));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "LazyTable starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(LogGuard { _worker: worker })
}

/// Build the level filter from a `RUST_LOG` value.
///
/// Missing or unparsable directives fall back to the default filter.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("lazytable").join("logs"))
}

/// Get the path where logs are stored, for display to the user.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("LazyTable shutting down");
}
