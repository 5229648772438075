//! Field extraction from a validated barcode

use billet_core::{Amount, DocumentCategory, LayoutKind};
use billet_registry::{BankRecord, BankRegistry};
use chrono::{Days, NaiveDate};

/// Day zero of the due date factor
pub fn factor_base_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1997, 10, 7)
}

/// Numeric value of a run of ASCII digits
fn digits_value(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Face value in cents: `[4:15]` on guides, `[9:19]` on billets.
pub fn value(barcode: &str, layout: LayoutKind) -> Amount {
    let range = match layout {
        LayoutKind::Guide => 4..15,
        LayoutKind::Ordinary => 9..19,
    };
    Amount::from_cents(barcode.get(range).map(digits_value).unwrap_or_default())
}

/// Due date from the factor at `[5:9]`.
///
/// Only credit card slips and bank billets carry a factor; a zero factor
/// means no due date.
pub fn due_date(barcode: &str, category: DocumentCategory) -> Option<NaiveDate> {
    if !category.has_due_date() {
        return None;
    }

    let days = barcode.get(5..9).map(digits_value)?;
    if days == 0 {
        return None;
    }
    factor_base_date()?.checked_add_days(Days::new(days))
}

/// Bank whose compensation code opens the barcode.
///
/// Looked up for every category, guides included, even though their first
/// digits are not a bank code.
pub fn bank<R: BankRegistry + ?Sized>(registry: &R, barcode: &str) -> Option<BankRecord> {
    registry.lookup(barcode.get(0..3)?)
}
