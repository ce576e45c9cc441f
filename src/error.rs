//! Unified error handling for the galsync crate
//!
//! Most failure modes in this crate are deliberately non-errors: a fetch
//! failure becomes an empty listing page, a missing registry file becomes an
//! empty registry, and a malformed store line is skipped at parse time. The
//! unified [`Error`] therefore stays small and covers only the paths that do
//! propagate: fetcher construction, configuration, and I/O at the edges.

use std::io;
use thiserror::Error;

pub use crate::utils::error::FetchError;

/// Unified error type for the galsync crate
#[derive(Error, Debug)]
pub enum Error {
    /// Fetcher construction and request errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
