//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Labeling App
//!
//! Every fallible app-level operation returns `Result<T, AppError>`. Session
//! and codec failures bubble up from the `annotr` crate; config failures
//! carry the offending path for diagnostics.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all app-level operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Codec failure from the annotation engine.
    #[error("Session error: {0}")]
    Session(#[from] annotr::SessionError),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}
