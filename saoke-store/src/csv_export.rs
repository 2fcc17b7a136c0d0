//! CSV alternative to the key-value store.

use std::fs::File;
use std::io;
use std::path::Path;

use saoke_core::Transaction;
use tracing::info;

use crate::error::StoreError;

/// Column order of every CSV export; matches the JSON keys.
pub const CSV_HEADER: [&str; 5] = [
    "offset_name",
    "transaction_date",
    "credit",
    "transaction_details",
    "source",
];

/// Header row, then one row per transaction. An empty list still gets
/// its header row.
pub fn write_csv<W: io::Write>(writer: W, transactions: &[Transaction]) -> Result<(), StoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for t in transactions {
        wtr.serialize(t)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, transactions: &[Transaction]) -> Result<(), StoreError> {
    let file = File::create(path)?;
    write_csv(file, transactions)?;
    info!("wrote {} rows to {}", transactions.len(), path.display());
    Ok(())
}

pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Transaction>, StoreError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        out.push(record?);
    }
    Ok(out)
}
