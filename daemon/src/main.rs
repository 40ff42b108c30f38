//! accrue: inspect and verify claim transactions from the command line.

mod config;
mod ledger_file;

use accrue_dividend::DividendCalculator;
use accrue_transactions::SignatureWitnessVerifier;
use accrue_utils::LogFormat;
use accrue_verification::TransactionVerifier;
use clap::Parser;
use config::AccrueConfig;
use ledger_file::{decode_hex, LedgerFile};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "accrue", about = "Dividend-claim transaction tool", version)]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "ACCRUE_CONFIG")]
    config: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ACCRUE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log filter: "trace", "debug", "info", "warn", "error" or directives.
    #[arg(long, env = "ACCRUE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Decode a hex transaction and print its JSON form.
    Decode {
        /// Hex-encoded transaction bytes.
        tx: String,
    },
    /// Print the authorities that must witness a transaction.
    Authorities {
        /// JSON ledger file the transaction is checked against.
        #[arg(long)]
        ledger: PathBuf,
        tx: String,
    },
    /// Verify a transaction against a ledger file. Exits 1 when rejected.
    Verify {
        #[arg(long)]
        ledger: PathBuf,
        tx: String,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AccrueConfig::from_toml_file(path)?,
        None => AccrueConfig::default(),
    };
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    accrue_utils::init_logging(config.log_format, &config.log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Decode { tx } => {
            let tx = decode_hex(&tx)?;
            println!("{}", serde_json::to_string_pretty(&tx.to_json())?);
        }
        Command::Authorities { ledger, tx } => {
            let tx = decode_hex(&tx)?;
            let snapshot = LedgerFile::from_path(&ledger)?.into_ledger()?.snapshot()?;
            for authority in accrue_verification::required_authority_set(&tx, &snapshot)? {
                println!("{authority}");
            }
        }
        Command::Verify { ledger, tx } => {
            let tx = decode_hex(&tx)?;
            let snapshot = LedgerFile::from_path(&ledger)?.into_ledger()?.snapshot()?;
            let oracle = DividendCalculator::new(Arc::clone(&snapshot), &config.chain)?;
            let verifier =
                TransactionVerifier::new(snapshot, oracle, SignatureWitnessVerifier, &config.chain);

            match verifier.check(&tx) {
                Ok(()) => println!("accepted {}", tx.hash()),
                Err(reason) => {
                    println!("rejected {}: {reason}", tx.hash());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Config => print!("{}", config.to_toml_string()?),
    }

    Ok(ExitCode::SUCCESS)
}
