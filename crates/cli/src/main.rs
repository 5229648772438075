//! Billet CLI - Main entry point
//!
//! Usage:
//! ```bash
//! billet parse "00190.00009 02820.020499 00000.000174 7 10000000012345"
//! billet --banks banks_list.json parse 81640000012345000102030405060708091011121314 --format json
//! billet convert 00197100000000123450000002820020490000000017
//! billet --banks banks_list.json banks --compe 001
//! ```

use billet_cli::commands::{self, OutputFormat};
use billet_cli::AppContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "billet")]
#[command(author, version, about = "Billet - decode Brazilian billet lines and barcodes", long_about = None)]
struct Cli {
    /// Bank list (JSON array) used to attach bank metadata
    #[arg(long, env = "BILLET_BANKS", global = true)]
    banks: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and validate one or more identifiers
    Parse {
        /// Line or barcode; separators are ignored
        #[arg(required = true)]
        identifiers: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the line and barcode of an identifier
    Convert {
        /// Line or barcode
        identifier: String,
    },

    /// List registered banks
    Banks {
        /// Show a single bank by compensation code
        #[arg(long)]
        compe: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = AppContext::new(cli.banks.as_deref())?;

    match cli.command {
        Commands::Parse {
            identifiers,
            format,
        } => {
            if !commands::parse(&ctx, &identifiers, format)? {
                std::process::exit(1);
            }
        }

        Commands::Convert { identifier } => {
            commands::convert(&ctx, &identifier)?;
        }

        Commands::Banks { compe } => {
            commands::banks(&ctx, compe.as_deref())?;
        }
    }

    Ok(())
}
