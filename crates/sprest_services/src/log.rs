use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{self, EnvFilter, Layer, filter};

pub const LOG_ENV: &str = "SPREST_LOG";

/// Installs the global subscriber: human-readable output on stderr, plus a
/// daily-rolling JSON log under `log_dir` when one is given. `SPREST_LOG`
/// overrides the level derived from `verbose`.
pub fn init_tracing(verbose: bool, log_dir: Option<PathBuf>) -> anyhow::Result<Option<Guard>> {
    let level = if verbose { "sprest=debug" } else { "sprest=info" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir.as_ref() {
        Some(dir) => {
            let (writer, guard) = prepare_writer(dir.clone());

            // Only our own crates end up in the file log
            let filter = filter::filter_fn(|metadata| metadata.target().starts_with("sprest_"));

            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_timer(tracing_subscriber::fmt::time::uptime())
                .with_thread_ids(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(filter);
            (Some(layer), Some(Guard(guard)))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        debug!(path = %dir.display(), "JSON file logging initialized");
    }
    Ok(guard)
}

fn prepare_writer(log_dir: PathBuf) -> (non_blocking::NonBlocking, WorkerGuard) {
    let append = tracing_appender::rolling::daily(log_dir, "sprest.log");
    tracing_appender::non_blocking(append)
}

/// Keeps the background log writer alive; dropping it flushes pending lines.
pub struct Guard(#[allow(dead_code)] WorkerGuard);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_installs_once() {
        let dir = tempfile::tempdir().unwrap();

        let first = init_tracing(true, Some(dir.path().to_path_buf()));
        let second = init_tracing(false, None);

        assert!(matches!(first, Ok(Some(_))));
        assert!(second.is_err());
    }
}
