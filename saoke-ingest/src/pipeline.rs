//! Generic table-statement extraction driven by a `BankProfile`.

use std::path::Path;

use saoke_core::Transaction;
use tracing::{debug, info, warn};

use crate::backend::{PdfBackend, require_file};
use crate::error::IngestError;
use crate::profile::BankProfile;

/// Read the profile's pages, drop header rows, clean and map every row.
///
/// A page without a table is an error: an empty result would be
/// indistinguishable from a statement with no transactions.
pub fn extract_table_statement(
    backend: &dyn PdfBackend,
    path: &Path,
    profile: &BankProfile,
) -> Result<Vec<Transaction>, IngestError> {
    require_file(path)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for page in profile.pages.clone() {
        info!("{} - processing page {}", path.display(), page);
        let table = backend
            .page_table(path, page, profile.layout)?
            .ok_or_else(|| IngestError::TableNotFound {
                path: path.to_path_buf(),
                page,
            })?;
        debug!(
            bank = profile.name,
            page,
            rows = table.len(),
            "table found"
        );
        if table.len() <= profile.header_rows {
            warn!("{} - page {} has no rows below the header", path.display(), page);
        }
        raw_rows.extend(table.into_iter().skip(profile.header_rows));
    }

    let cleaned = profile.clean_rows(&raw_rows);
    let transactions = cleaned
        .iter()
        .enumerate()
        .map(|(i, row)| profile.map_row(i, row))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "{} - {} transactions from {}",
        profile.name,
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}
