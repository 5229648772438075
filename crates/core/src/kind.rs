//! Identifier and layout kinds

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which representation the caller supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Typeable line ("linha digitável"), 47 or 48 digits
    Line,
    /// 44-digit barcode
    Barcode,
}

/// Field layout the identifier validated under
///
/// `Ordinary` is always tried first; `Guide` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Bank billet: 47-digit line, barcode DV at position 4
    Ordinary,
    /// Tax/utility guide: 48-digit line, barcode DV at position 3
    Guide,
}

impl LayoutKind {
    /// Length of the line under this layout
    pub const fn line_len(&self) -> usize {
        match self {
            LayoutKind::Ordinary => 47,
            LayoutKind::Guide => 48,
        }
    }
}
