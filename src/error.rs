// File: src/error.rs
// Recommending itself never fails; only loading a corpus or settings can.

use thiserror::Error;

/// Errors raised while loading a corpus of turns.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read
    #[error("I/O error reading corpus: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a list of lists of strings
    #[error("Malformed corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while assembling settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// An event name outside trampoline, dmt and tumbling.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown event '{0}'")]
pub struct UnknownEvent(pub String);
