//! Application context - the bank registry the commands share

use std::path::Path;

use anyhow::Context as _;
use billet_parser::BilletParser;
use billet_registry::JsonBankRegistry;

/// State shared by all commands
pub struct AppContext {
    parser: BilletParser<JsonBankRegistry>,
    has_banks: bool,
}

impl AppContext {
    /// Build the context, loading the bank dataset when a path is given.
    pub fn new(banks: Option<&Path>) -> anyhow::Result<Self> {
        let registry = match banks {
            Some(path) => JsonBankRegistry::from_path(path)
                .with_context(|| format!("Failed to load bank list from {}", path.display()))?,
            None => {
                tracing::debug!("No bank list configured; bank metadata disabled");
                JsonBankRegistry::default()
            }
        };

        Ok(Self {
            parser: BilletParser::new(registry),
            has_banks: banks.is_some(),
        })
    }

    pub fn parser(&self) -> &BilletParser<JsonBankRegistry> {
        &self.parser
    }

    pub fn registry(&self) -> &JsonBankRegistry {
        self.parser.registry()
    }

    /// Returns true if a bank list was configured
    pub fn has_banks(&self) -> bool {
        self.has_banks
    }
}
