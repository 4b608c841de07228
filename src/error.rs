//! Error types shared by the navigator and keyboard

use std::time::Duration;

/// Failures that abort a single operation.
///
/// Everything else the browser can run into (unmounted storage, a target
/// that vanished, a full input buffer) degrades to a visible state instead
/// of an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The display lock was not acquired in time; nothing was mutated.
    #[error("display lock not acquired within {timeout:?}")]
    LockTimeout { timeout: Duration },

    /// A navigate target that could escape the current directory.
    #[error("invalid entry name: {0:?}")]
    InvalidName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
