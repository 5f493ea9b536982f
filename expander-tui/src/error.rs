//! Application error types.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
