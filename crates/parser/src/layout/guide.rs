//! Tax and utility guide layout
//!
//! Barcode (44):
//! `8 S R D VVVVVVVVVVV EEEE...`
//! product id, segment, value reference, general digit, value, company data.
//!
//! Line (48): the barcode cut into four 11-digit blocks, each followed by
//! its own digit. The reference digit (barcode index 2) picks the algorithm
//! for all five digits.

use billet_checksum::DigitRule;
use billet_core::{BilletError, BilletResult, LayoutKind, Rejection};

use super::digit_matches;

const BARCODE_LEN: usize = 44;
const LINE_LEN: usize = LayoutKind::Guide.line_len();
const BLOCK_LEN: usize = 11;

/// Position of the general check digit in the barcode
const BARCODE_DV: usize = 3;

/// Position of the value reference digit in the barcode
const REFERENCE: usize = 2;

/// Digit rule selected by the barcode's value reference.
pub fn rule(barcode: &str) -> BilletResult<DigitRule> {
    let reference = barcode.chars().nth(REFERENCE).unwrap_or_default();
    DigitRule::for_reference(reference).ok_or_else(|| {
        tracing::debug!(%reference, "Unknown guide value reference");
        BilletError::InvalidIdentifier(Rejection::UnknownReference(reference))
    })
}

/// Build the 48-digit line of a guide barcode.
pub fn barcode_to_line(barcode: &str) -> BilletResult<String> {
    if barcode.len() != BARCODE_LEN || !barcode.is_ascii() {
        return Err(BilletError::InvalidIdentifier(Rejection::Length(barcode.len())));
    }
    let rule = rule(barcode)?;

    let mut line = String::with_capacity(LINE_LEN);
    for start in (0..BARCODE_LEN).step_by(BLOCK_LEN) {
        let block = &barcode[start..start + BLOCK_LEN];
        line.push_str(block);
        line.push_str(&rule.digit(block)?);
    }
    Ok(line)
}

/// Rebuild the barcode by dropping the digits at 11, 23, 35 and 47.
///
/// Only a 48-digit line can be a guide; anything else yields `None`.
pub fn line_to_barcode(line: &str) -> Option<String> {
    if line.len() != LINE_LEN || !line.is_ascii() {
        return None;
    }

    Some(
        (0..LINE_LEN)
            .step_by(BLOCK_LEN + 1)
            .map(|start| &line[start..start + BLOCK_LEN])
            .collect(),
    )
}

/// General digit of a guide barcode, computed without its own position.
pub fn barcode_digit(barcode: &str, rule: &DigitRule) -> BilletResult<String> {
    if barcode.len() != BARCODE_LEN || !barcode.is_ascii() {
        return Err(BilletError::InvalidIdentifier(Rejection::Length(barcode.len())));
    }
    let body = format!("{}{}", &barcode[..BARCODE_DV], &barcode[BARCODE_DV + 1..]);
    Ok(rule.digit(&body)?)
}

/// Check the four line blocks and the barcode general digit.
///
/// Fails with `UnknownReference` when the barcode names no algorithm.
pub fn validate(line: &str, barcode: &str) -> BilletResult<bool> {
    let rule = rule(barcode)?;
    if line.len() != LINE_LEN || !line.is_ascii() || barcode.len() != BARCODE_LEN {
        return Ok(false);
    }

    for start in (0..LINE_LEN).step_by(BLOCK_LEN + 1) {
        let end = start + BLOCK_LEN;
        if !digit_matches(line, end, &rule.digit(&line[start..end])?) {
            tracing::trace!(block_start = start, "Guide line block digit mismatch");
            return Ok(false);
        }
    }

    Ok(digit_matches(barcode, BARCODE_DV, &barcode_digit(barcode, &rule)?))
}
