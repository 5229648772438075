//! Checksum errors

use billet_core::{BilletError, Rejection};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}

impl From<ChecksumError> for BilletError {
    fn from(_: ChecksumError) -> Self {
        BilletError::InvalidIdentifier(Rejection::ChecksumMismatch)
    }
}
