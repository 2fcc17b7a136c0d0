use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saoke_core::{PageRequest, SearchFilter, paginate, search_page};
use saoke_ingest::{PlumberBackend, extract_all, ocr};
use saoke_store::{RedisStore, load, publish, write_csv_file};
use std::path::PathBuf;
use tracing::info;

mod config;
mod logging;
mod server;

use config::{Config, DEFAULT_CONFIG_PATH, init_config, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "saoke",
    version,
    about = "Turn bank statement PDFs into one transaction list"
)]
struct Cli {
    /// Config file (missing file means built-in defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract every statement and store the combined list
    Extract {
        /// Also write the list as CSV (overrides store.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Skip the key-value store write
        #[arg(long)]
        no_store: bool,
    },

    /// Run OCR on the scanned treasury receipts
    Ocr,

    /// Print one page of stored transactions as JSON
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Search stored transactions and print the matching page as JSON
    Search {
        /// Exact transaction date
        #[arg(long)]
        date: Option<String>,

        /// Exact credit amount
        #[arg(long)]
        credit: Option<u64>,

        /// Case-insensitive substring of the details
        #[arg(long)]
        details: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Serve the stored transactions over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },

    /// Write a config file with the defaults
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();

    let config_path = cli.config;

    match cli.command {
        Command::InitConfig => {
            init_config(&config_path)?;
        }

        Command::Extract { csv, no_store } => {
            let cfg = load_config(&config_path)?;
            run_extract(&cfg, csv, no_store)?;
        }

        Command::Ocr => {
            run_ocr(&load_config(&config_path)?)?;
        }

        Command::List { page, limit } => {
            let cfg = load_config(&config_path)?;
            let req = PageRequest::new(page, limit)?;
            let txns = load_stored(&cfg)?;
            let page = paginate(&txns, req)?;
            println!("{}", serde_json::to_string_pretty(page)?);
        }

        Command::Search {
            date,
            credit,
            details,
            page,
            limit,
        } => {
            let cfg = load_config(&config_path)?;
            let req = PageRequest::new(page, limit)?;
            let filter = SearchFilter {
                transaction_date: date,
                credit,
                transaction_details: details,
            };
            let txns = load_stored(&cfg)?;
            let found = search_page(&txns, &filter, req)?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }

        Command::Serve { addr } => {
            let cfg = load_config(&config_path)?;
            let store = RedisStore::open(&cfg.store.redis_url)?;
            server::serve(&addr, store, cfg.store.key.clone()).await?;
        }
    }

    Ok(())
}

fn run_ocr(cfg: &Config) -> Result<()> {
    ocr::ensure_searchable(&cfg.ocr_settings(), &cfg.ocr.input, &cfg.ocr.output)
        .with_context(|| format!("OCR of {}", cfg.ocr.input.display()))?;
    println!("Searchable receipts: {}", cfg.ocr.output.display());
    Ok(())
}

fn run_extract(cfg: &Config, csv: Option<PathBuf>, no_store: bool) -> Result<()> {
    if cfg.ocr.enabled {
        run_ocr(cfg)?;
    }

    let backend = PlumberBackend::new();
    let set = cfg.statement_set();
    let txns = extract_all(&backend, &set).context("extracting statements")?;

    if !no_store {
        let mut store = RedisStore::open(&cfg.store.redis_url)?;
        publish(&mut store, &cfg.store.key, &txns)
            .with_context(|| format!("storing into {}", cfg.store.redis_url))?;
    }

    if let Some(path) = csv.or_else(|| cfg.store.csv.clone()) {
        write_csv_file(&path, &txns).with_context(|| format!("writing {}", path.display()))?;
    }

    info!("done: {} transactions", txns.len());
    println!("Extracted {} transactions", txns.len());
    Ok(())
}

fn load_stored(cfg: &Config) -> Result<Vec<saoke_core::Transaction>> {
    let mut store = RedisStore::open(&cfg.store.redis_url)?;
    load(&mut store, &cfg.store.key).with_context(|| format!("reading {}", cfg.store.key))
}
