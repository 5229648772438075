//! Parse orchestration
//!
//! `raw -> normalized -> classified -> ordinary candidate -> (valid | guide
//! candidate) -> (valid | rejected)`. The guide layout is only tried when
//! the ordinary one does not validate.

use billet_core::{BilletError, BilletResult, IdentifierKind, LayoutKind, Rejection};
use billet_registry::BankRegistry;

use crate::category::classify_document;
use crate::document::Billet;
use crate::extract;
use crate::layout::Candidate;
use crate::normalize::{classify, normalize};

/// Result of reading an identifier under one layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid(Candidate),
    Invalid,
}

/// Layouts in the order they are tried
const LAYOUTS: [LayoutKind; 2] = [LayoutKind::Ordinary, LayoutKind::Guide];

/// Derive and validate `digits` under a single layout.
pub fn attempt(kind: IdentifierKind, digits: &str, layout: LayoutKind) -> BilletResult<Outcome> {
    let Some(candidate) = Candidate::derive(kind, digits, layout)? else {
        tracing::trace!(%layout, "Identifier does not fit layout");
        return Ok(Outcome::Invalid);
    };

    if candidate.is_valid()? {
        Ok(Outcome::Valid(candidate))
    } else {
        Ok(Outcome::Invalid)
    }
}

/// Decodes identifiers, attaching bank metadata from `R`
#[derive(Debug, Clone, Default)]
pub struct BilletParser<R> {
    registry: R,
}

impl<R: BankRegistry> BilletParser<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Decode `raw` into a validated [`Billet`].
    ///
    /// Fails with [`BilletError::InvalidIdentifier`] when the digit count is
    /// wrong, when no layout validates, or when a guide names an unknown
    /// value reference.
    pub fn parse(&self, raw: &str) -> BilletResult<Billet> {
        let digits = normalize(raw);
        let kind = classify(&digits).inspect_err(|e| {
            tracing::debug!(digits = digits.len(), error = %e, "Rejected identifier");
        })?;
        tracing::trace!(%kind, "Classified identifier");

        let candidate = self.validate(kind, &digits)?;
        Ok(self.build(kind, candidate))
    }

    /// Try each layout in turn; the first that validates wins.
    fn validate(&self, kind: IdentifierKind, digits: &str) -> BilletResult<Candidate> {
        for layout in LAYOUTS {
            match attempt(kind, digits, layout)? {
                Outcome::Valid(candidate) => {
                    tracing::debug!(%kind, %layout, "Identifier validated");
                    return Ok(candidate);
                }
                Outcome::Invalid => {
                    tracing::debug!(%kind, %layout, "Check digits do not match");
                }
            }
        }

        Err(BilletError::InvalidIdentifier(Rejection::ChecksumMismatch))
    }

    fn build(&self, input: IdentifierKind, candidate: Candidate) -> Billet {
        let Candidate {
            line,
            barcode,
            layout,
        } = candidate;

        let category = classify_document(&line);
        let value = extract::value(&barcode, layout);
        let due_date = extract::due_date(&barcode, category);
        let bank = extract::bank(&self.registry, &barcode);

        Billet {
            line,
            barcode,
            input,
            layout,
            is_valid: true,
            category,
            value,
            due_date,
            bank,
        }
    }
}
