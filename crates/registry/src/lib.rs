//! Billet Registry - Bank metadata
//!
//! The parser attaches a `BankRecord` to every decoded billet whose first
//! three barcode digits match a compensation code. The registry is loaded
//! once and never mutated afterwards.
//!
//! # Key Types
//! - `BankRecord`: One entry of the bank dataset
//! - `BankRegistry`: Lookup by compensation code
//! - `JsonBankRegistry`: Registry loaded from a JSON array
//! - `EmptyRegistry`: Registry with no banks

pub mod bank;
pub mod error;
pub mod registry;

pub use bank::BankRecord;
pub use error::RegistryError;
pub use registry::{BankRegistry, EmptyRegistry, JsonBankRegistry};
