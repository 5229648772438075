//! Billet - the decoded document

use std::str::FromStr;

use billet_core::{Amount, BilletError, DocumentCategory, IdentifierKind, LayoutKind};
use billet_registry::{BankRecord, EmptyRegistry};
use chrono::NaiveDate;
use serde::Serialize;

use crate::parser::BilletParser;

/// A fully decoded and validated billet or guide.
///
/// Only [`BilletParser`] builds one, and only after every check digit
/// matched. Line and barcode are always derivable from each other under
/// `layout`.
///
/// # Example
/// ```
/// use billet_core::{DocumentCategory, LayoutKind};
/// use billet_parser::Billet;
///
/// let billet: Billet = "00190.00009 02820.020499 00000.000174 7 10000000012345"
///     .parse()
///     .unwrap();
/// assert_eq!(billet.barcode(), "00197100000000123450000002820020490000000017");
/// assert_eq!(billet.layout(), LayoutKind::Ordinary);
/// assert_eq!(billet.category(), DocumentCategory::BankBillet);
/// assert_eq!(billet.value().to_string(), "123.45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Billet {
    pub(crate) line: String,
    pub(crate) barcode: String,
    pub(crate) input: IdentifierKind,
    pub(crate) layout: LayoutKind,
    pub(crate) is_valid: bool,
    pub(crate) category: DocumentCategory,
    pub(crate) value: Amount,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) bank: Option<BankRecord>,
}

impl Billet {
    /// Parse without bank metadata
    pub fn parse(raw: &str) -> Result<Self, BilletError> {
        BilletParser::new(EmptyRegistry).parse(raw)
    }

    /// Typeable line (47 digits for billets, 48 for guides)
    pub fn line(&self) -> &str {
        &self.line
    }

    /// 44-digit barcode
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Which representation was supplied
    pub fn input(&self) -> IdentifierKind {
        self.input
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Always true: invalid identifiers never produce a `Billet`
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_guide(&self) -> bool {
        self.layout == LayoutKind::Guide
    }

    pub fn category(&self) -> DocumentCategory {
        self.category
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn bank(&self) -> Option<&BankRecord> {
        self.bank.as_ref()
    }
}

impl FromStr for Billet {
    type Err = BilletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
