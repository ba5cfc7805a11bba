//! Error types for share decoding and secret reconstruction.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the decoder, the rational type and the interpolation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Unsupported base {0}: expected a base between 2 and 36")]
    UnsupportedBase(u32),

    #[error("Invalid base tag '{0}'")]
    InvalidBase(String),

    #[error("Invalid share label '{0}': expected an integer x-coordinate")]
    InvalidShareLabel(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Duplicate x values: {0}")]
    DuplicateX(BigInt),

    #[error("Not an integer")]
    NotAnInteger,

    #[error("Non-integer secret")]
    NonIntegerSecret,

    #[error("Negative secret found")]
    NegativeSecret,

    #[error("Expected {expected} shares, found {found}")]
    ShareCountMismatch { expected: usize, found: usize },

    #[error("Invalid threshold: k = {k} must be between 1 and n = {n}")]
    InvalidThreshold { n: usize, k: usize },
}

/// A failed reconstruction, carrying the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Interpolation failed: {cause}")]
pub struct ReconstructError {
    #[source]
    cause: ShareError,
}

impl ReconstructError {
    /// The error that aborted the reconstruction.
    pub fn cause(&self) -> &ShareError {
        &self.cause
    }
}

impl From<ShareError> for ReconstructError {
    fn from(cause: ShareError) -> Self {
        Self { cause }
    }
}

/// Failure to load an input document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ShareError> = std::result::Result<T, E>;
