//! Billet Checksum - Modulus algorithms and check digits
//!
//! # Key Types
//! - `Algorithm`: Mod10 or Mod11
//! - `Remap`: Folds out-of-range results back into a single digit
//! - `DigitRule`: An algorithm paired with its remap table

pub mod digit;
pub mod error;
pub mod modulus;

pub use digit::{compute_digit, Algorithm, DigitRule, Remap};
pub use error::ChecksumError;
pub use modulus::{mod10, mod11};
