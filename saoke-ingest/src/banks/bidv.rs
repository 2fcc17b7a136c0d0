//! BIDV statements.
//!
//! Raw columns: 0 row number, 1 date, 2 credit, 3 details.

use std::path::Path;

use saoke_core::{Source, Transaction};

use crate::backend::PdfBackend;
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;
use crate::profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
use crate::layout::TableLayout;

pub fn profile() -> BankProfile {
    BankProfile {
        name: "bidv",
        source: Source::Bidv,
        pages: 0..1,
        header_rows: 1,
        layout: TableLayout::Detect,
        columns: vec![
            ColumnRule::Drop,
            ColumnRule::Keep,
            ColumnRule::Strip("."),
            ColumnRule::JoinLines,
        ],
        fields: FieldMap {
            date: 0,
            credit: 1,
            details: 2,
            offset: OffsetRule::FromDetails,
            date_order: DateOrder::DayFirst,
        },
    }
}

pub fn extract(backend: &dyn PdfBackend, path: &Path) -> Result<Vec<Transaction>, IngestError> {
    extract_table_statement(backend, path, &profile())
}
