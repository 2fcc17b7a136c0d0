use anyhow::{Context, Result};
use saoke_ingest::StatementSet;
use saoke_ingest::ocr::OcrSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "saoke.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub statements: StatementsSection,
    pub ocr: OcrSection,
    pub store: StoreSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementsSection {
    pub vietcombank: PathBuf,
    pub vietcombank_secondary: PathBuf,
    pub vietinbank: PathBuf,
    pub agribank: PathBuf,
    pub cash: PathBuf,
    pub bidv: PathBuf,
    /// Already searchable treasury receipts; ignored when `ocr.enabled`
    pub treasury: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSection {
    /// Run OCR on `input` and read the treasury receipts from `output`
    pub enabled: bool,
    pub command: String,
    pub language: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub redis_url: String,
    pub key: String,
    /// Also write a CSV export here after each extraction
    pub csv: Option<PathBuf>,
}

impl Default for StatementsSection {
    fn default() -> Self {
        let set = StatementSet::in_dir("statements");
        Self {
            vietcombank: set.vietcombank,
            vietcombank_secondary: set.vietcombank_secondary,
            vietinbank: set.vietinbank,
            agribank: set.agribank,
            cash: set.cash,
            bidv: set.bidv,
            treasury: set.treasury,
        }
    }
}

impl Default for OcrSection {
    fn default() -> Self {
        let tool = OcrSettings::default();
        Self {
            enabled: false,
            command: tool.command,
            language: tool.language,
            input: PathBuf::from("statements/sao-ke-treasury.pdf"),
            output: PathBuf::from("ocr/sao-ke-treasury.pdf"),
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            redis_url: "redis://redis:6379/0".to_string(),
            key: saoke_store::TRANSACTIONS_KEY.to_string(),
            csv: None,
        }
    }
}

impl Config {
    pub fn statement_set(&self) -> StatementSet {
        let s = &self.statements;
        let treasury = if self.ocr.enabled {
            Some(self.ocr.output.clone())
        } else {
            s.treasury.clone()
        };
        StatementSet {
            vietcombank: s.vietcombank.clone(),
            vietcombank_secondary: s.vietcombank_secondary.clone(),
            vietinbank: s.vietinbank.clone(),
            agribank: s.agribank.clone(),
            cash: s.cash.clone(),
            bidv: s.bidv.clone(),
            treasury,
        }
    }

    pub fn ocr_settings(&self) -> OcrSettings {
        OcrSettings {
            command: self.ocr.command.clone(),
            language: self.ocr.language.clone(),
        }
    }
}

/// Missing file means defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
