//! Check digit calculation
//!
//! A check digit is a modulus result rendered as a string, optionally
//! passed through a remap table. The tables differ per layout, so they are
//! kept together with their algorithm as a [`DigitRule`].

use strum_macros::Display;

use crate::error::ChecksumError;
use crate::modulus::{mod10, mod11};

/// Modulus algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Algorithm {
    #[strum(serialize = "mod10")]
    Mod10,
    #[strum(serialize = "mod11")]
    Mod11,
}

impl Algorithm {
    /// Raw modulus result for `digits`
    pub fn checksum(&self, digits: &str) -> Result<u32, ChecksumError> {
        match self {
            Algorithm::Mod10 => mod10(digits),
            Algorithm::Mod11 => mod11(digits),
        }
    }
}

/// Raw-result to replacement-digit table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remap(&'static [(&'static str, &'static str)]);

impl Remap {
    /// Mod-10 on lines and guide mod-10: 10 -> 0
    pub const TEN_TO_ZERO: Remap = Remap(&[("10", "0")]);

    /// Guide mod-11: 10 -> 0, 11 -> 0
    pub const OVERFLOW_TO_ZERO: Remap = Remap(&[("10", "0"), ("11", "0")]);

    /// Ordinary barcode mod-11: 10 -> 1, 11 -> 1
    pub const OVERFLOW_TO_ONE: Remap = Remap(&[("10", "1"), ("11", "1")]);

    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self(pairs)
    }

    /// Replacement for `raw`, if the table has one
    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(from, _)| *from == raw)
            .map(|(_, to)| *to)
    }
}

/// Compute a check digit for `digits`.
///
/// Without a remap, or when the remap has no entry for the raw result, the
/// raw result is returned unchanged (which may be `"10"` or `"11"`).
pub fn compute_digit(
    digits: &str,
    algorithm: Algorithm,
    remap: Option<&Remap>,
) -> Result<String, ChecksumError> {
    let raw = algorithm.checksum(digits)?.to_string();

    Ok(match remap.and_then(|table| table.get(&raw)) {
        Some(mapped) => mapped.to_string(),
        None => raw,
    })
}

/// An algorithm together with the remap table its layout uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRule {
    pub algorithm: Algorithm,
    pub remap: Remap,
}

impl DigitRule {
    /// The three block digits of an ordinary line
    pub const LINE_BLOCK: DigitRule = DigitRule::new(Algorithm::Mod10, Remap::TEN_TO_ZERO);

    /// The general digit of an ordinary barcode (position 4)
    pub const ORDINARY_BARCODE: DigitRule =
        DigitRule::new(Algorithm::Mod11, Remap::OVERFLOW_TO_ONE);

    /// Guide documents with reference 6 or 7
    pub const GUIDE_MOD10: DigitRule = DigitRule::new(Algorithm::Mod10, Remap::TEN_TO_ZERO);

    /// Guide documents with reference 8 or 9
    pub const GUIDE_MOD11: DigitRule = DigitRule::new(Algorithm::Mod11, Remap::OVERFLOW_TO_ZERO);

    pub const fn new(algorithm: Algorithm, remap: Remap) -> Self {
        Self { algorithm, remap }
    }

    /// Rule selected by a guide's value reference digit (barcode index 2).
    pub fn for_reference(reference: char) -> Option<DigitRule> {
        match reference {
            '6' | '7' => Some(DigitRule::GUIDE_MOD10),
            '8' | '9' => Some(DigitRule::GUIDE_MOD11),
            _ => None,
        }
    }

    pub fn digit(&self, digits: &str) -> Result<String, ChecksumError> {
        compute_digit(digits, self.algorithm, Some(&self.remap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_remap_returns_raw() {
        assert_eq!(compute_digit("1234", Algorithm::Mod10, None).unwrap(), "4");
        assert_eq!(compute_digit("8888", Algorithm::Mod10, None).unwrap(), "10");
        assert_eq!(compute_digit("0", Algorithm::Mod11, None).unwrap(), "11");
    }

    #[test]
    fn test_remap_hit_substitutes() {
        let digit = compute_digit("8888", Algorithm::Mod10, Some(&Remap::TEN_TO_ZERO)).unwrap();
        assert_eq!(digit, "0");

        let digit =
            compute_digit("9999999999", Algorithm::Mod11, Some(&Remap::OVERFLOW_TO_ONE)).unwrap();
        assert_eq!(digit, "1");

        let digit = compute_digit("0", Algorithm::Mod11, Some(&Remap::OVERFLOW_TO_ZERO)).unwrap();
        assert_eq!(digit, "0");
    }

    #[test]
    fn test_remap_miss_returns_raw() {
        let digit = compute_digit("1234", Algorithm::Mod11, Some(&Remap::OVERFLOW_TO_ONE)).unwrap();
        assert_eq!(digit, "3");

        // TEN_TO_ZERO has no entry for 11
        let digit = compute_digit("0", Algorithm::Mod11, Some(&Remap::TEN_TO_ZERO)).unwrap();
        assert_eq!(digit, "11");
    }

    #[test]
    fn test_custom_remap() {
        const TABLE: Remap = Remap::new(&[("4", "X")]);
        assert_eq!(compute_digit("1234", Algorithm::Mod10, Some(&TABLE)).unwrap(), "X");
    }

    #[test]
    fn test_rule_for_reference() {
        assert_eq!(DigitRule::for_reference('6'), Some(DigitRule::GUIDE_MOD10));
        assert_eq!(DigitRule::for_reference('7'), Some(DigitRule::GUIDE_MOD10));
        assert_eq!(DigitRule::for_reference('8'), Some(DigitRule::GUIDE_MOD11));
        assert_eq!(DigitRule::for_reference('9'), Some(DigitRule::GUIDE_MOD11));
        assert_eq!(DigitRule::for_reference('5'), None);
        assert_eq!(DigitRule::for_reference('0'), None);
    }

    #[test]
    fn test_rule_digit_is_single_char() {
        for digits in ["0", "8888", "9999999999", "00000", "1234"] {
            assert_eq!(DigitRule::GUIDE_MOD11.digit(digits).unwrap().len(), 1);
            assert_eq!(DigitRule::ORDINARY_BARCODE.digit(digits).unwrap().len(), 1);
            assert_eq!(DigitRule::LINE_BLOCK.digit(digits).unwrap().len(), 1);
        }
    }
}
