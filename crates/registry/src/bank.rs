//! Bank record
//!
//! Mirrors one object of the Brazilian bank dataset. Keys are PascalCase in
//! the source file; several fields are null for smaller institutions.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A registered financial institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Compensation code (3 digits), matched against `barcode[0:3]`
    #[serde(rename = "COMPE")]
    pub compe: String,

    /// Settlement participant code (ISPB)
    #[serde(rename = "ISPB")]
    pub ispb: String,

    /// Registered company document (CNPJ)
    #[serde(rename = "Document", default)]
    pub document: Option<String>,

    #[serde(rename = "LongName")]
    pub long_name: String,

    #[serde(rename = "ShortName")]
    pub short_name: String,

    #[serde(rename = "Network", default)]
    pub network: Option<String>,

    /// Institution type (e.g. "Banco Múltiplo")
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,

    /// PIX participant type (DRCT, IDRT)
    #[serde(rename = "PixType", default)]
    pub pix_type: Option<String>,

    /// Issues billets
    #[serde(rename = "Charge", default, deserialize_with = "null_as_default")]
    pub charge: bool,

    /// Issues credit documents (DOC)
    #[serde(rename = "CreditDocument", default, deserialize_with = "null_as_default")]
    pub credit_document: bool,

    #[serde(rename = "LegalCheque", default, deserialize_with = "null_as_default")]
    pub legal_cheque: bool,

    /// Participates in the fraud detection flow
    #[serde(rename = "DetectaFlow", default, deserialize_with = "null_as_default")]
    pub detecta_flow: bool,

    /// Credit portability, participant role
    #[serde(rename = "PCR", default, deserialize_with = "null_as_default")]
    pub pcr: bool,

    /// Credit portability, proponent role
    #[serde(rename = "PCRP", default, deserialize_with = "null_as_default")]
    pub pcrp: bool,

    #[serde(rename = "SalaryPortability", default)]
    pub salary_portability: Option<String>,

    #[serde(rename = "Products", default, deserialize_with = "null_as_default")]
    pub products: Vec<String>,

    #[serde(rename = "Url", default)]
    pub url: Option<String>,

    #[serde(rename = "DateOperationStarted", default)]
    pub date_operation_started: Option<String>,

    #[serde(rename = "DatePixStarted", default)]
    pub date_pix_started: Option<String>,

    #[serde(rename = "DateRegistered", default)]
    pub date_registered: Option<String>,

    #[serde(rename = "DateUpdated", default)]
    pub date_updated: Option<String>,
}

/// Calendar date of an ISO date or timestamp field.
fn iso_date(field: &Option<String>) -> Option<NaiveDate> {
    let value = field.as_deref()?;
    let date = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

impl BankRecord {
    pub fn operation_started(&self) -> Option<NaiveDate> {
        iso_date(&self.date_operation_started)
    }

    pub fn pix_started(&self) -> Option<NaiveDate> {
        iso_date(&self.date_pix_started)
    }

    pub fn registered(&self) -> Option<NaiveDate> {
        iso_date(&self.date_registered)
    }

    pub fn updated(&self) -> Option<NaiveDate> {
        iso_date(&self.date_updated)
    }

    /// Returns true if the bank lists `product` (case-insensitive)
    pub fn offers(&self, product: &str) -> bool {
        self.products.iter().any(|p| p.eq_ignore_ascii_case(product))
    }
}
