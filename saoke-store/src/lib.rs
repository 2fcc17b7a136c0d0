//! saoke-store: where extracted transactions end up. A key-value store holds
//! the whole list as one JSON document; CSV is the file alternative.

pub mod csv_export;
pub mod error;
pub mod memory;
pub mod redis_store;

pub use csv_export::{CSV_HEADER, read_csv, write_csv, write_csv_file};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use saoke_core::Transaction;
use tracing::info;

/// Key the transaction list is stored under.
pub const TRANSACTIONS_KEY: &str = "transactions";

pub trait KeyValueSink {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub trait KeyValueSource {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError>;
}

/// Store the whole list as one JSON array under `key`.
pub fn publish(
    sink: &mut dyn KeyValueSink,
    key: &str,
    transactions: &[Transaction],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(transactions)?;
    sink.set(key, &json)?;
    info!("stored {} transactions under {:?}", transactions.len(), key);
    Ok(())
}

/// Read back a list written by [`publish`].
pub fn load(source: &mut dyn KeyValueSource, key: &str) -> Result<Vec<Transaction>, StoreError> {
    let json = source
        .get(key)?
        .ok_or_else(|| StoreError::MissingKey(key.to_string()))?;
    Ok(serde_json::from_str(&json)?)
}
