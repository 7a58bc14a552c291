//! Error types for the kconfig-diff2frag CLI.
//!
//! Input content never fails: lines that match no rule are dropped.
//! The only errors are faults on the underlying streams.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for diff-to-fragment conversion.
#[derive(Error, Debug)]
pub enum Diff2FragError {
    /// Reading the diff failed (including input that is not valid UTF-8).
    #[error("failed to read diff input: {0}")]
    Read(#[source] io::Error),

    /// Writing the fragment failed (including a closed pipe).
    #[error("failed to write fragment output: {0}")]
    Write(#[source] io::Error),
}

impl Diff2FragError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Diff2FragError::Read(_) => exit_codes::IO_FAILURE,
            Diff2FragError::Write(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for diff-to-fragment operations.
pub type Result<T> = std::result::Result<T, Diff2FragError>;
