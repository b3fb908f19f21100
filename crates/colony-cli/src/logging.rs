//! File logging for one play session.

use std::fs::File;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Truncate `path` and send all tracing output there.
///
/// `RUST_LOG` picks the level when set; otherwise `info`.
///
/// The returned guard flushes the writer when dropped, so it has to live
/// until the game exits.
pub fn init(path: &Path) -> Result<WorkerGuard, String> {
    let file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {e}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(guard)
}
