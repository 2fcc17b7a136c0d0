//! saoke-ingest: statement ingestion (PDF tables and plain text) and
//! bank-specific extraction profiles.

pub mod backend;
pub mod banks;
pub mod error;
pub mod layout;
pub mod ocr;
pub mod pipeline;
pub mod profile;
pub mod statements;

pub use backend::{PdfBackend, PlumberBackend};
pub use error::IngestError;
pub use layout::{RawTable, TableLayout};
pub use pipeline::extract_table_statement;
pub use profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
pub use statements::{StatementSet, extract_all};
