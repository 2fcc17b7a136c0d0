//! Agribank statements.
//!
//! Raw columns: 0 date, 1 details, 2 debit, 3 credit (comma grouped),
//! 4 balance, 5 currency.

use std::path::Path;

use saoke_core::{Source, Transaction};

use crate::backend::PdfBackend;
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;
use crate::profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
use crate::layout::TableLayout;

pub fn profile() -> BankProfile {
    BankProfile {
        name: "agr",
        source: Source::Agribank,
        pages: 0..1,
        header_rows: 1,
        layout: TableLayout::Detect,
        columns: vec![
            ColumnRule::Keep,
            ColumnRule::JoinLines,
            ColumnRule::Drop,
            ColumnRule::Strip(","),
            ColumnRule::Drop,
            ColumnRule::Drop,
        ],
        fields: FieldMap {
            date: 0,
            credit: 2,
            details: 1,
            offset: OffsetRule::FromDetails,
            date_order: DateOrder::DayFirst,
        },
    }
}

pub fn extract(backend: &dyn PdfBackend, path: &Path) -> Result<Vec<Transaction>, IngestError> {
    extract_table_statement(backend, path, &profile())
}
