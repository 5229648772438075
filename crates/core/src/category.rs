//! Document category
//!
//! Derived from fixed digit positions of the line once a layout validated.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What kind of payment document an identifier belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Credit card invoice (no value or due date printed on the slip)
    CreditCard,
    /// Ordinary bank billet
    BankBillet,
    /// Municipal/state/federal tax collection
    TaxCollection,
    /// Water and sewage
    Sanitation,
    /// Gas and electricity
    GasAndEnergy,
    /// Telecommunication
    Telecommunication,
    /// Government agencies
    GovernmentCollection,
    /// Traffic fines and vehicle fees
    TrafficFee,
    /// Guide with an unassigned segment
    UnknownGuide,
}

impl DocumentCategory {
    /// Category for a guide from its segment digit (`line[1]`).
    pub fn from_segment(segment: char) -> Self {
        match segment {
            '1' => DocumentCategory::TaxCollection,
            '2' => DocumentCategory::Sanitation,
            '3' => DocumentCategory::GasAndEnergy,
            '4' => DocumentCategory::Telecommunication,
            '5' => DocumentCategory::GovernmentCollection,
            '7' => DocumentCategory::TrafficFee,
            _ => DocumentCategory::UnknownGuide,
        }
    }

    /// Label as printed to Brazilian users
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::CreditCard => "Cartão de crédito",
            DocumentCategory::BankBillet => "Bancário",
            DocumentCategory::TaxCollection => "Arrecadação de tributo",
            DocumentCategory::Sanitation => "Saneamento",
            DocumentCategory::GasAndEnergy => "Gás e energia",
            DocumentCategory::Telecommunication => "Telecomunicação",
            DocumentCategory::GovernmentCollection => "Arrecadação governamental",
            DocumentCategory::TrafficFee => "Taxa de trânsito",
            DocumentCategory::UnknownGuide => "Desconhecido",
        }
    }

    /// Returns true for the tax/utility guide categories
    pub fn is_guide(&self) -> bool {
        !matches!(
            self,
            DocumentCategory::CreditCard | DocumentCategory::BankBillet
        )
    }

    /// Only bank billets and credit card slips encode a due date factor.
    pub fn has_due_date(&self) -> bool {
        !self.is_guide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_segment() {
        assert_eq!(DocumentCategory::from_segment('1'), DocumentCategory::TaxCollection);
        assert_eq!(DocumentCategory::from_segment('2'), DocumentCategory::Sanitation);
        assert_eq!(DocumentCategory::from_segment('3'), DocumentCategory::GasAndEnergy);
        assert_eq!(DocumentCategory::from_segment('4'), DocumentCategory::Telecommunication);
        assert_eq!(DocumentCategory::from_segment('5'), DocumentCategory::GovernmentCollection);
        assert_eq!(DocumentCategory::from_segment('6'), DocumentCategory::UnknownGuide);
        assert_eq!(DocumentCategory::from_segment('7'), DocumentCategory::TrafficFee);
        assert_eq!(DocumentCategory::from_segment('9'), DocumentCategory::UnknownGuide);
    }

    #[test]
    fn test_due_date_only_for_billets() {
        let dated: Vec<_> = DocumentCategory::iter().filter(|c| c.has_due_date()).collect();
        assert_eq!(
            dated,
            vec![DocumentCategory::CreditCard, DocumentCategory::BankBillet]
        );
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(DocumentCategory::GasAndEnergy.to_string(), "gas_and_energy");
        let parsed: DocumentCategory = "tax_collection".parse().unwrap();
        assert_eq!(parsed, DocumentCategory::TaxCollection);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DocumentCategory::BankBillet.label(), "Bancário");
        assert_eq!(DocumentCategory::TrafficFee.label(), "Taxa de trânsito");
    }
}
