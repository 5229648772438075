//! Billet Parser - Decode and validate billet identifiers
//!
//! Accepts either representation of a Brazilian payment slip, the typeable
//! line or the 44-digit barcode, derives the other one and checks every
//! embedded digit. Bank billets are read under the ordinary layout; tax and
//! utility guides under the guide layout, which is tried second.
//!
//! # Key Types
//! - `BilletParser`: Entry point, holds the bank registry
//! - `Billet`: The decoded document
//! - `Candidate`: Line/barcode pair under one layout, before validation

pub mod category;
pub mod document;
pub mod extract;
pub mod layout;
pub mod normalize;
pub mod parser;

pub use category::classify_document;
pub use document::Billet;
pub use layout::Candidate;
pub use normalize::{classify, normalize};
pub use parser::{attempt, BilletParser, Outcome};
