// Error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile '{0}' not found in pass store or in the profile directory")]
    ProfileNotFound(String),
    #[error("{command} failed: {stderr}")]
    Backend { command: String, stderr: String },
    #[error("Error reading profile file {}: {}", .path.display(), .source)]
    ProfileFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    ConfigParse(String),
    #[error("HOME is not set")]
    HomeNotSet,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
