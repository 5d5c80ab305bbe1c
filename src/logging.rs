//! File-backed log output.
//!
//! The terminal belongs to the game while it runs, so log lines can only go to a file.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global log subscriber, appending plain-text records to the file at `path`.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// - [`std::io::Error`] if the file cannot be opened for appending.
/// - A report if a global subscriber is already installed.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install the log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use tracing::info;

    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = env::temp_dir().join(format!("mazequest-logging-{}", process::id()));
        fs::create_dir_all(&dir).expect("temporary directory should be created");
        let path = dir.join("mazequest.log");

        init(&path).expect("subscriber should install");
        info!("log file test");

        assert!(path.is_file(), "log file should exist after init");
        assert!(
            init(&path).is_err(),
            "a second global subscriber should be refused"
        );

        fs::remove_dir_all(&dir).expect("temporary directory should be removed");
    }
}
