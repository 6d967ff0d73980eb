use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can surface while standing up or tearing down the shell.
///
/// Everything inside the desktop itself is total and infallible; errors only
/// exist at the terminal and logging boundary.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
