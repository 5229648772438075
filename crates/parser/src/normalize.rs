//! Input normalization and identifier classification

use billet_core::{BilletError, BilletResult, IdentifierKind, Rejection};

/// Digit count of a line with its trailing value digit masked off
const MISSING_VALUE_DIGIT_LEN: usize = 46;

/// Digit count of a line with its whole value segment masked off
const MISSING_VALUE_SEGMENT_LEN: usize = 36;

fn strip(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only the digits of `raw`, repairing two truncated forms.
///
/// 46 digits: one `'0'` is appended to the raw input before stripping again.
/// 36 digits: eleven `'0'`s are appended. Any other length is returned as is.
pub fn normalize(raw: &str) -> String {
    let digits = strip(raw);

    let padding = match digits.len() {
        MISSING_VALUE_DIGIT_LEN => 1,
        MISSING_VALUE_SEGMENT_LEN => 11,
        _ => return digits,
    };

    let mut repaired = String::with_capacity(raw.len() + padding);
    repaired.push_str(raw);
    repaired.extend(std::iter::repeat('0').take(padding));
    strip(&repaired)
}

/// Line or barcode, by digit count of a normalized identifier
pub fn classify(normalized: &str) -> BilletResult<IdentifierKind> {
    match normalized.len() {
        47 | 48 => Ok(IdentifierKind::Line),
        44 => Ok(IdentifierKind::Barcode),
        len => Err(BilletError::InvalidIdentifier(Rejection::Length(len))),
    }
}
