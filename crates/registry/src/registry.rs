//! Bank registry - lookup by compensation code

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::bank::BankRecord;
use crate::error::RegistryError;

/// Read-only source of bank metadata.
///
/// Implementations must be safe for concurrent reads; parsing never mutates
/// the registry.
pub trait BankRegistry: Send + Sync {
    /// Bank with the given 3-digit compensation code, if registered.
    /// A missing bank is not an error.
    fn lookup(&self, compe: &str) -> Option<BankRecord>;
}

impl<T: BankRegistry + ?Sized> BankRegistry for &T {
    fn lookup(&self, compe: &str) -> Option<BankRecord> {
        (**self).lookup(compe)
    }
}

impl<T: BankRegistry + ?Sized> BankRegistry for Arc<T> {
    fn lookup(&self, compe: &str) -> Option<BankRecord> {
        (**self).lookup(compe)
    }
}

/// Registry without any bank
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl BankRegistry for EmptyRegistry {
    fn lookup(&self, _compe: &str) -> Option<BankRecord> {
        None
    }
}

/// Registry loaded from a JSON array of bank objects
#[derive(Debug, Clone, Default)]
pub struct JsonBankRegistry {
    banks: Vec<BankRecord>,

    /// compe -> position in `banks` (first occurrence wins)
    by_compe: HashMap<String, usize>,
}

impl JsonBankRegistry {
    /// Build a registry from already-parsed records
    pub fn new(banks: Vec<BankRecord>) -> Self {
        let mut by_compe = HashMap::with_capacity(banks.len());
        for (position, bank) in banks.iter().enumerate() {
            by_compe.entry(bank.compe.clone()).or_insert(position);
        }
        Self { banks, by_compe }
    }

    /// Load the dataset from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let registry = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            banks = registry.len(),
            "Loaded bank registry"
        );
        Ok(registry)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, RegistryError> {
        let banks: Vec<BankRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(banks))
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let banks: Vec<BankRecord> = serde_json::from_str(json)?;
        Ok(Self::new(banks))
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BankRecord> {
        self.banks.iter()
    }

    /// All banks matching `predicate`, in dataset order
    pub fn filter<P>(&self, predicate: P) -> Vec<&BankRecord>
    where
        P: Fn(&BankRecord) -> bool,
    {
        self.banks.iter().filter(|bank| predicate(bank)).collect()
    }

    /// First bank matching `predicate`
    pub fn first<P>(&self, predicate: P) -> Option<&BankRecord>
    where
        P: Fn(&BankRecord) -> bool,
    {
        self.banks.iter().find(|bank| predicate(bank))
    }

    /// Borrowing variant of [`BankRegistry::lookup`]
    pub fn get(&self, compe: &str) -> Option<&BankRecord> {
        self.by_compe.get(compe).map(|&position| &self.banks[position])
    }
}

impl BankRegistry for JsonBankRegistry {
    fn lookup(&self, compe: &str) -> Option<BankRecord> {
        let bank = self.get(compe).cloned();
        if bank.is_none() {
            tracing::trace!(compe, "No bank registered for compensation code");
        }
        bank
    }
}

impl<'a> IntoIterator for &'a JsonBankRegistry {
    type Item = &'a BankRecord;
    type IntoIter = std::slice::Iter<'a, BankRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.banks.iter()
    }
}
