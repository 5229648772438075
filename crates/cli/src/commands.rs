//! CLI commands

use std::fmt::{self, Write};

use billet_parser::Billet;
use billet_registry::BankRecord;
use clap::ValueEnum;

use crate::context::AppContext;

/// How decoded billets are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Human-readable summary of a decoded billet
pub fn render_text(billet: &Billet, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "✅ {} ({})", billet.category().label(), billet.layout())?;
    writeln!(out, "   Line:     {}", billet.line())?;
    writeln!(out, "   Barcode:  {}", billet.barcode())?;
    writeln!(out, "   Value:    R$ {}", billet.value())?;

    match billet.due_date() {
        Some(date) => writeln!(out, "   Due date: {date}")?,
        None => writeln!(out, "   Due date: -")?,
    }

    if let Some(bank) = billet.bank() {
        writeln!(out, "   Bank:     {} - {}", bank.compe, bank.short_name)?;
    }
    Ok(())
}

fn render_bank(bank: &BankRecord) -> String {
    let mut out = format!("{} {:<10} {}", bank.compe, bank.ispb, bank.long_name);
    if bank.charge {
        out.push_str(" [billets]");
    }
    out
}

/// Decode each identifier and print it.
///
/// Returns `false` if any identifier was rejected.
pub fn parse(ctx: &AppContext, identifiers: &[String], format: OutputFormat) -> anyhow::Result<bool> {
    let mut all_valid = true;

    for raw in identifiers {
        match ctx.parser().parse(raw) {
            Ok(billet) => match format {
                OutputFormat::Text => {
                    let mut text = String::new();
                    render_text(&billet, &mut text)?;
                    print!("{text}");
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&billet)?),
            },
            Err(e) => {
                all_valid = false;
                tracing::debug!(input = %raw, error = %e, "Identifier rejected");
                match format {
                    OutputFormat::Text => println!("❌ {}: {}", raw, e),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({ "input": raw, "error": e.to_string() })
                    ),
                }
            }
        }
    }

    Ok(all_valid)
}

/// Print only the line and barcode of an identifier
pub fn convert(ctx: &AppContext, identifier: &str) -> anyhow::Result<()> {
    let billet = ctx.parser().parse(identifier)?;
    println!("{}", billet.line());
    println!("{}", billet.barcode());
    Ok(())
}

/// List the configured banks, or show one by compensation code
pub fn banks(ctx: &AppContext, compe: Option<&str>) -> anyhow::Result<()> {
    if !ctx.has_banks() {
        anyhow::bail!("No bank list configured (use --banks or BILLET_BANKS)");
    }

    match compe {
        Some(code) => {
            let bank = ctx
                .registry()
                .get(code)
                .ok_or_else(|| anyhow::anyhow!("No bank registered with code {code}"))?;
            println!("{}", serde_json::to_string_pretty(bank)?);
        }
        None => {
            for bank in ctx.registry() {
                println!("{}", render_bank(bank));
            }
            println!("{} banks", ctx.registry().len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn context_with_banks() -> (tempfile::NamedTempFile, AppContext) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"COMPE": "001", "ISPB": "00000000", "LongName": "Banco do Brasil S.A.", "ShortName": "BCO DO BRASIL S.A.", "Charge": true}]"#,
        )
        .unwrap();
        let ctx = AppContext::new(Some(file.path())).unwrap();
        (file, ctx)
    }

    #[test]
    fn test_render_text() {
        let (_file, ctx) = context_with_banks();
        let billet = ctx
            .parser()
            .parse("00197100000000123450000002820020490000000017")
            .unwrap();

        let mut text = String::new();
        render_text(&billet, &mut text).unwrap();
        assert!(text.starts_with("✅ Bancário (ordinary)"));
        assert!(text.contains("Line:     00190000090282002049900000000174710000000012345"));
        assert!(text.contains("Value:    R$ 123.45"));
        assert!(text.contains("Due date: 2000-07-03"));
        assert!(text.contains("Bank:     001 - BCO DO BRASIL S.A."));
    }

    #[test]
    fn test_render_guide_without_due_date() {
        let ctx = AppContext::new(None).unwrap();
        let billet = ctx
            .parser()
            .parse("81640000012345000102030405060708091011121314")
            .unwrap();

        let mut text = String::new();
        render_text(&billet, &mut text).unwrap();
        assert!(text.starts_with("✅ Arrecadação de tributo (guide)"));
        assert!(text.contains("Due date: -"));
        assert!(!text.contains("Bank:"));
    }

    #[test]
    fn test_output_format_from_arg() {
        assert_eq!(OutputFormat::from_str("json", true).unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TEXT", true).unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn test_parse_reports_invalid() {
        let ctx = AppContext::new(None).unwrap();
        let identifiers = vec![
            "00197100000000123450000002820020490000000017".to_string(),
            "1234567890".to_string(),
        ];
        assert!(!parse(&ctx, &identifiers, OutputFormat::Json).unwrap());
        assert!(parse(&ctx, &identifiers[..1], OutputFormat::Text).unwrap());
    }

    #[test]
    fn test_banks_requires_dataset() {
        let ctx = AppContext::new(None).unwrap();
        assert!(banks(&ctx, None).is_err());

        let (_file, ctx) = context_with_banks();
        assert!(banks(&ctx, Some("001")).is_ok());
        assert!(banks(&ctx, Some("999")).is_err());
    }

    #[test]
    fn test_missing_bank_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppContext::new(Some(dir.path().join("missing.json").as_path()));
        assert!(result.is_err());
    }
}
