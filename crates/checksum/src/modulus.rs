//! Modulus 10 and modulus 11 checksums
//!
//! Both scan the digits right to left. The results are raw: mod-10 yields
//! 1..=10 and mod-11 yields 1..=11. Folding 10/11 into a single digit is the
//! job of [`crate::digit::Remap`].

use crate::error::ChecksumError;

/// Iterate digit values right to left, rejecting anything that is not 0-9.
fn digits_rev(digits: &str) -> impl Iterator<Item = Result<u32, ChecksumError>> + '_ {
    digits
        .char_indices()
        .rev()
        .map(|(position, c)| c.to_digit(10).ok_or(ChecksumError::NonDigit { position, found: c }))
}

/// Modulus 10 with alternating weights 2, 1, 2, 1, ...
///
/// The decimal digits of each product are summed (14 counts as 1 + 4).
/// Returns `10 - total % 10`, so 10 when the total is a multiple of ten.
pub fn mod10(digits: &str) -> Result<u32, ChecksumError> {
    let mut weight = 2;
    let mut total = 0;

    for digit in digits_rev(digits) {
        let product = digit? * weight;
        total += product / 10 + product % 10;
        weight = (weight % 2) + 1;
    }

    Ok(10 - total % 10)
}

/// Modulus 11 with weights cycling 2..=9.
///
/// Returns `11 - total % 11`, in the range 1..=11.
pub fn mod11(digits: &str) -> Result<u32, ChecksumError> {
    let mut weight = 2;
    let mut total = 0;

    for digit in digits_rev(digits) {
        total += digit? * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }

    Ok(11 - total % 11)
}
