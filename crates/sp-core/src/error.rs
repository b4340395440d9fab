//! Shared error type.
//!
//! Behaviors and holders are total over well-typed input, so the only thing
//! that can fail at run time is writing to the caller's output sink.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sp-*` crates.
pub type SpResult<T> = Result<T, SpError>;
