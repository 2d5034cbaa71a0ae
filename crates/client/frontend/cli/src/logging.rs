//! File logging for the terminal client.
//!
//! The game owns stdout, so tracing output goes to
//! `<log dir>/<session id>/client.log` only.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Session id derived from the wall clock: `session_<unix seconds>`.
pub fn session_id() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{seconds}")
}

/// Get the platform-specific log directory.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/dragon-quest/logs`
/// - Linux: `~/.cache/dragon-quest/logs` (or `$XDG_CACHE_HOME/dragon-quest/logs`)
/// - Windows: `%LOCALAPPDATA%\dragon-quest\logs`
/// - Fallback: `./logs`
pub fn log_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    directories::ProjectDirs::from("", "", "dragon-quest")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Installs the global subscriber writing to the session log file.
///
/// The filter defaults to `info` and honors `RUST_LOG`. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn setup_logging(log_dir: &Path, session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}
