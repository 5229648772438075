//! Ordinary bank billet layout
//!
//! Barcode (44):
//! `BBB M D FFFF VVVVVVVVVV LLLLLLLLLLLLLLLLLLLLLLLLL`
//! bank, currency, general digit (mod-11), due factor, value, free field.
//!
//! Line (47): three mod-10 blocks, then the general digit, factor and value:
//! `BBBM LLLLL d | LLLLLLLLLL d | LLLLLLLLLL d | D | FFFF VVVVVVVVVV`

use billet_checksum::DigitRule;
use billet_core::{BilletError, BilletResult, LayoutKind, Rejection};

use super::digit_matches;

const BARCODE_LEN: usize = 44;
const LINE_LEN: usize = LayoutKind::Ordinary.line_len();

/// Position of the general check digit in the barcode
const BARCODE_DV: usize = 4;

/// `(start, end)` of each line block; its digit sits at `end`
const LINE_BLOCKS: [(usize, usize); 3] = [(0, 9), (10, 20), (21, 31)];

fn block_digit(block: &str) -> BilletResult<String> {
    Ok(DigitRule::LINE_BLOCK.digit(block)?)
}

/// Build the 47-digit line of a barcode.
pub fn barcode_to_line(barcode: &str) -> BilletResult<String> {
    if barcode.len() != BARCODE_LEN || !barcode.is_ascii() {
        return Err(BilletError::InvalidIdentifier(Rejection::Length(barcode.len())));
    }

    let first = format!("{}{}", &barcode[0..4], &barcode[19..24]);
    let second = &barcode[24..34];
    let third = &barcode[34..44];

    let mut line = String::with_capacity(LINE_LEN);
    line.push_str(&first);
    line.push_str(&block_digit(&first)?);
    line.push_str(second);
    line.push_str(&block_digit(second)?);
    line.push_str(third);
    line.push_str(&block_digit(third)?);
    line.push_str(&barcode[4..5]);
    line.push_str(&barcode[5..19]);
    Ok(line)
}

/// Rebuild the barcode from a line, dropping the three block digits.
///
/// Returns `None` unless `line` has exactly 47 digits.
pub fn line_to_barcode(line: &str) -> Option<String> {
    if line.len() != LINE_LEN || !line.is_ascii() {
        return None;
    }

    Some(
        [&line[0..4], &line[32..47], &line[4..9], &line[10..20], &line[21..31]].concat(),
    )
}

/// General digit of a barcode: mod-11 over every other position.
pub fn barcode_digit(barcode: &str) -> BilletResult<String> {
    if barcode.len() != BARCODE_LEN || !barcode.is_ascii() {
        return Err(BilletError::InvalidIdentifier(Rejection::Length(barcode.len())));
    }
    let body = format!("{}{}", &barcode[..BARCODE_DV], &barcode[BARCODE_DV + 1..]);
    Ok(DigitRule::ORDINARY_BARCODE.digit(&body)?)
}

/// Check the three line blocks and the barcode general digit.
pub fn validate(line: &str, barcode: &str) -> BilletResult<bool> {
    if line.len() != LINE_LEN || !line.is_ascii() || barcode.len() != BARCODE_LEN {
        return Ok(false);
    }

    for (start, end) in LINE_BLOCKS {
        if !digit_matches(line, end, &block_digit(&line[start..end])?) {
            tracing::trace!(block_start = start, "Ordinary line block digit mismatch");
            return Ok(false);
        }
    }

    Ok(digit_matches(barcode, BARCODE_DV, &barcode_digit(barcode)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARCODE: &str = "00197100000000123450000002820020490000000017";
    const LINE: &str = "00190000090282002049900000000174710000000012345";

    #[test]
    fn test_barcode_to_line() {
        assert_eq!(barcode_to_line(BARCODE).unwrap(), LINE);
    }

    #[test]
    fn test_line_to_barcode() {
        assert_eq!(line_to_barcode(LINE).unwrap(), BARCODE);
        assert!(line_to_barcode("0019").is_none());
    }

    #[test]
    fn test_line_with_extra_digit_does_not_fit() {
        let line = format!("{LINE}9");
        assert!(line_to_barcode(&line).is_none());
        assert!(!validate(&line, BARCODE).unwrap());
    }

    #[test]
    fn test_round_trip_keeps_fields() {
        let barcode = "23795001000000100001234567890123456789012345";
        let line = barcode_to_line(barcode).unwrap();
        assert_eq!(line, "23791234546789012345767890123457500100000010000");
        assert_eq!(line_to_barcode(&line).unwrap(), barcode);
    }

    #[test]
    fn test_barcode_digit() {
        assert_eq!(barcode_digit(BARCODE).unwrap(), "7");
    }

    #[test]
    fn test_validate() {
        assert!(validate(LINE, BARCODE).unwrap());
    }

    #[test]
    fn test_validate_rejects_block_typo() {
        let mut line = LINE.to_string();
        line.replace_range(12..13, "9");
        assert!(!validate(&line, BARCODE).unwrap());
    }

    #[test]
    fn test_validate_rejects_general_digit() {
        let barcode = format!("{}3{}", &BARCODE[..4], &BARCODE[5..]);
        assert!(!validate(LINE, &barcode).unwrap());
    }

    #[test]
    fn test_barcode_to_line_wrong_length() {
        assert!(barcode_to_line("0019").is_err());
    }
}
