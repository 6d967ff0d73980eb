use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

use crate::error::ShellError;

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "DECOY_OS_LOG";

/// Initialize tracing if `DECOY_OS_LOG` names a writable path.
///
/// A full-screen TUI owns stdout and stderr, so logs go to a file or nowhere.
/// Safe to call multiple times; only the first subscriber wins.
pub fn init_default() {
    if let Ok(path) = std::env::var(LOG_PATH_ENV) {
        let _ = init_to_file(PathBuf::from(path));
    }
}

pub fn init_to_file(path: PathBuf) -> Result<(), ShellError> {
    let file = File::create(&path).map_err(|source| ShellError::LogFile {
        path: path.clone(),
        source,
    })?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
