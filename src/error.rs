//! Errors raised while loading selector input.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to read or accept a selector input document.
pub enum SelectorError {
    /// The input file could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// The input file is not a valid selector document.
    #[error("failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two contexts or sections share an identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),
    /// The appointment group names a code missing from the context list.
    #[error("appointment group refers to unknown code: {0}")]
    UnknownCode(String),
}

/// Result alias for selector loading.
pub type Result<T> = std::result::Result<T, SelectorError>;
