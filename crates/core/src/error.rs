//! Billet errors

use thiserror::Error;

/// Why an identifier was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Normalized digit count is not 44, 47 or 48
    Length(usize),
    /// Neither the ordinary nor the guide layout validated
    ChecksumMismatch,
    /// Guide reference digit (barcode index 2) is not 6, 7, 8 or 9
    UnknownReference(char),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Length(len) => write!(f, "unexpected digit count {len}"),
            Rejection::ChecksumMismatch => write!(f, "check digits do not match any layout"),
            Rejection::UnknownReference(c) => write!(f, "unknown value reference '{c}'"),
        }
    }
}

/// Errors that can occur while parsing an identifier
///
/// There is a single failure kind: callers should treat it as
/// "not a usable identifier" and must not retry the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BilletError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(Rejection),
}

impl BilletError {
    /// The reason recorded for the rejection
    pub fn rejection(&self) -> Rejection {
        match self {
            BilletError::InvalidIdentifier(rejection) => *rejection,
        }
    }
}

/// Result alias for billet parsing
pub type BilletResult<T> = Result<T, BilletError>;
