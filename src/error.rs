use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OmniError>;

#[derive(Debug, Error)]
pub enum OmniError {
    /// Missing or malformed configuration. The user has to fix the file.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid task: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("cannot reach mail server: {0}")]
    Connect(String),
}

impl OmniError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        OmniError::Io {
            context: context.into(),
            source,
        }
    }
}
