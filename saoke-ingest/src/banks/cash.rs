//! Manually entered cash donations.
//!
//! Raw columns: 0 row number, 1 date (month first), 2 details,
//! 3 amount (space grouped), 4..6 bookkeeping columns. Four title rows.

use std::path::Path;

use saoke_core::{Source, Transaction};

use crate::backend::PdfBackend;
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;
use crate::profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
use crate::layout::TableLayout;

pub fn profile() -> BankProfile {
    BankProfile {
        name: "cash",
        source: Source::Cash,
        pages: 0..1,
        header_rows: 4,
        layout: TableLayout::Detect,
        columns: vec![
            ColumnRule::Drop,
            ColumnRule::Keep,
            ColumnRule::JoinLines,
            ColumnRule::Strip(" "),
            ColumnRule::Drop,
            ColumnRule::Drop,
            ColumnRule::Drop,
        ],
        fields: FieldMap {
            date: 0,
            credit: 2,
            details: 1,
            offset: OffsetRule::FromDetails,
            date_order: DateOrder::MonthFirst,
        },
    }
}

pub fn extract(backend: &dyn PdfBackend, path: &Path) -> Result<Vec<Transaction>, IngestError> {
    extract_table_statement(backend, path, &profile())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::raw_row;

    #[test]
    fn test_clean_and_map_row() {
        let raw = raw_row(&[
            "5",
            "9/14/2024",
            "Cong ty TNHH AN PHAT\nung ho",
            "10 000 000",
            "x",
            "",
            "PT01",
        ]);
        let cleaned = profile().clean_row(&raw);
        assert_eq!(
            cleaned,
            raw_row(&["9/14/2024", "Cong ty TNHH AN PHAT ung ho", "10000000"])
        );

        let t = profile().map_row(0, &cleaned).unwrap();
        assert_eq!(t.transaction_date, "14/09/2024");
        assert_eq!(t.credit, 10_000_000);
        assert_eq!(t.offset_name.as_deref(), Some("TNHH AN PHAT"));
        assert_eq!(t.source, Source::Cash);
    }
}
