//! Field layouts
//!
//! An identifier is read under one of two layouts. Each layout knows how to
//! derive the missing representation and how to check every embedded digit.
//! - `ordinary`: bank billets (47-digit line)
//! - `guide`: tax and utility guides (48-digit line)

pub mod guide;
pub mod ordinary;

use billet_core::{BilletResult, IdentifierKind, LayoutKind};

/// Line and barcode of an identifier read under one layout, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub line: String,
    pub barcode: String,
    pub layout: LayoutKind,
}

impl Candidate {
    /// Derive the representation the caller did not supply.
    ///
    /// Returns `Ok(None)` when the input cannot be read under `layout` at all
    /// (a 47-digit line is never a guide).
    pub fn derive(
        kind: IdentifierKind,
        digits: &str,
        layout: LayoutKind,
    ) -> BilletResult<Option<Self>> {
        let (line, barcode) = match (kind, layout) {
            (IdentifierKind::Line, LayoutKind::Ordinary) => {
                match ordinary::line_to_barcode(digits) {
                    Some(barcode) => (digits.to_string(), barcode),
                    None => return Ok(None),
                }
            }
            (IdentifierKind::Barcode, LayoutKind::Ordinary) => {
                (ordinary::barcode_to_line(digits)?, digits.to_string())
            }
            (IdentifierKind::Line, LayoutKind::Guide) => match guide::line_to_barcode(digits) {
                Some(barcode) => (digits.to_string(), barcode),
                None => return Ok(None),
            },
            (IdentifierKind::Barcode, LayoutKind::Guide) => {
                (guide::barcode_to_line(digits)?, digits.to_string())
            }
        };

        Ok(Some(Self {
            line,
            barcode,
            layout,
        }))
    }

    /// Recompute every check digit of line and barcode
    pub fn is_valid(&self) -> BilletResult<bool> {
        match self.layout {
            LayoutKind::Ordinary => ordinary::validate(&self.line, &self.barcode),
            LayoutKind::Guide => guide::validate(&self.line, &self.barcode),
        }
    }
}

/// `true` when `expected` equals the single character at `index`
pub(crate) fn digit_matches(source: &str, index: usize, expected: &str) -> bool {
    source.get(index..index + 1) == Some(expected)
}
