use thiserror::Error;

/// Top-level error type used across the entire engine.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("config error: {0}")]
    Config(String),

    #[error("history source error: {0}")]
    Source(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;
