//! Billet Core - Domain types
//!
//! This crate contains the fundamental types shared by the billet crates:
//! - `Amount`: Non-negative face value derived from cents
//! - `DocumentCategory`: What a validated identifier pays for
//! - `IdentifierKind` / `LayoutKind`: Line vs. barcode, ordinary vs. guide
//! - `BilletError`: The single rejection kind

pub mod amount;
pub mod category;
pub mod error;
pub mod kind;

pub use amount::Amount;
pub use category::DocumentCategory;
pub use error::{BilletError, BilletResult, Rejection};
pub use kind::{IdentifierKind, LayoutKind};
