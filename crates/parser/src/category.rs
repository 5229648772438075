//! Document classification from the validated line

use billet_core::DocumentCategory;

/// Fourteen zeros: a credit card slip leaves factor and value blank
const BLANK_FACTOR_AND_VALUE: &str = "00000000000000";

/// Guides always start with the product id `8`
const GUIDE_PRODUCT: u8 = b'8';

/// Category of a validated line.
///
/// A blank factor/value field marks a credit card slip even when the line
/// starts like a guide. Lines starting with `8` are guides whose second
/// digit is the segment; everything else is a bank billet.
pub fn classify_document(line: &str) -> DocumentCategory {
    let tail = line
        .len()
        .checked_sub(BLANK_FACTOR_AND_VALUE.len())
        .and_then(|start| line.get(start..));

    if tail == Some(BLANK_FACTOR_AND_VALUE) || line.get(5..19) == Some(BLANK_FACTOR_AND_VALUE) {
        return DocumentCategory::CreditCard;
    }

    match line.as_bytes() {
        [GUIDE_PRODUCT, segment, ..] => DocumentCategory::from_segment(*segment as char),
        _ => DocumentCategory::BankBillet,
    }
}
