//! The full set of statements for one run, extracted in a fixed order.

use std::path::{Path, PathBuf};

use saoke_core::Transaction;
use tracing::info;

use crate::backend::PdfBackend;
use crate::banks::{agribank, bidv, cash, treasury, vietcombank, vietinbank};
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSet {
    pub vietcombank: PathBuf,
    pub vietcombank_secondary: PathBuf,
    pub vietinbank: PathBuf,
    pub agribank: PathBuf,
    pub cash: PathBuf,
    pub bidv: PathBuf,
    /// Searchable (already OCR'd) treasury receipts, if any
    pub treasury: Option<PathBuf>,
}

impl StatementSet {
    /// Conventional file names inside one statements directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vietcombank: dir.join("sao-ke-vcb.pdf"),
            vietcombank_secondary: dir.join("sao-ke-vcb-2.pdf"),
            vietinbank: dir.join("sao-ke-ctg.pdf"),
            agribank: dir.join("sao-ke-agr.pdf"),
            cash: dir.join("sao-ke-cash.pdf"),
            bidv: dir.join("sao-ke-bidv.pdf"),
            treasury: Some(dir.join("sao-ke-treasury-ocr.pdf")),
        }
    }
}

/// Extract every statement and concatenate the results in the order
/// VCB, VCB-2, VietinBank, Agribank, Cash, BIDV, Treasury.
///
/// The first failure aborts the run; nothing partial is returned.
pub fn extract_all(
    backend: &dyn PdfBackend,
    set: &StatementSet,
) -> Result<Vec<Transaction>, IngestError> {
    let tables = [
        (vietcombank::profile(), &set.vietcombank),
        (vietcombank::profile_secondary(), &set.vietcombank_secondary),
        (vietinbank::profile(), &set.vietinbank),
        (agribank::profile(), &set.agribank),
        (cash::profile(), &set.cash),
        (bidv::profile(), &set.bidv),
    ];

    let mut all = Vec::new();
    for (profile, path) in &tables {
        all.extend(extract_table_statement(backend, path.as_path(), profile)?);
    }
    if let Some(path) = &set.treasury {
        all.extend(treasury::extract(backend, path)?);
    }

    info!("extracted {} transactions in total", all.len());
    Ok(all)
}
