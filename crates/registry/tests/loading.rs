//! Integration tests for loading the bank dataset from disk

use std::io::Write;

use billet_registry::{BankRegistry, JsonBankRegistry, RegistryError};
use tempfile::NamedTempFile;

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_path() {
    let file = write_dataset(
        r#"[
            {
                "COMPE": "341",
                "ISPB": "60701190",
                "Document": "60.701.190/0001-04",
                "LongName": "Itaú Unibanco S.A.",
                "ShortName": "ITAÚ UNIBANCO S.A.",
                "Network": "Varejo",
                "Type": "Banco Múltiplo",
                "PixType": "DRCT",
                "Charge": true,
                "CreditDocument": true,
                "LegalCheque": false,
                "DetectaFlow": true,
                "PCR": true,
                "PCRP": false,
                "SalaryPortability": null,
                "Products": ["BCC", "DEB"],
                "Url": "https://www.itau.com.br",
                "DateOperationStarted": "2008-11-04",
                "DatePixStarted": "2020-11-03",
                "DateRegistered": "2021-05-05T09:11:12.7115863-03:00",
                "DateUpdated": "2024-07-15T17:21:16.3467442+00:00"
            }
        ]"#,
    );

    let registry = JsonBankRegistry::from_path(file.path()).unwrap();
    assert_eq!(registry.len(), 1);

    let bank = registry.lookup("341").unwrap();
    assert_eq!(bank.long_name, "Itaú Unibanco S.A.");
    assert_eq!(bank.products, vec!["BCC".to_string(), "DEB".to_string()]);
    assert!(bank.salary_portability.is_none());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = JsonBankRegistry::from_path(dir.path().join("banks_list.json"));
    assert!(matches!(result, Err(RegistryError::Io(_))));
}

#[test]
fn test_malformed_file() {
    let file = write_dataset(r#"[{"COMPE": "001"}]"#);
    let result = JsonBankRegistry::from_path(file.path());
    assert!(matches!(result, Err(RegistryError::Serialization(_))));
}
