//! Vietcombank (VCB) statements.
//!
//! Primary layout, raw columns:
//!   0 date + document number (two lines in one cell)
//!   1 debit   2 credit   3 balance   4 details
//!
//! Secondary layout, raw columns:
//!   0 row number   1 date   2 credit   3 details
//!
//! The primary layout has drawn column rules but no reliable row rules, so
//! rows are split at the page's own drawn edges.

use std::path::Path;

use saoke_core::{Source, Transaction};

use crate::backend::PdfBackend;
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;
use crate::profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
use crate::layout::TableLayout;

pub fn profile() -> BankProfile {
    BankProfile {
        name: "vcb",
        source: Source::Vietcombank,
        pages: 0..1,
        header_rows: 1,
        layout: TableLayout::EdgeRows,
        columns: vec![
            ColumnRule::SplitLines,
            ColumnRule::Drop,
            ColumnRule::Strip("."),
            ColumnRule::Drop,
            ColumnRule::JoinLines,
        ],
        fields: FieldMap {
            date: 0,
            credit: 2,
            details: 3,
            offset: OffsetRule::FromDetails,
            date_order: DateOrder::DayFirst,
        },
    }
}

pub fn profile_secondary() -> BankProfile {
    BankProfile {
        name: "vcb-2",
        source: Source::Vietcombank,
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

pub fn extract_secondary(
    backend: &dyn PdfBackend,
    path: &Path,
) -> Result<Vec<Transaction>, IngestError> {
    extract_table_statement(backend, path, &profile_secondary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::raw_row;

    #[test]
    fn test_clean_primary_row() {
        let raw = raw_row(&[
            "01/09/2024\n5078.47614",
            "",
            "1.500.000",
            "12.000.000",
            "MBVCB.6993 NGUYEN VAN A\nchuyen tien ung ho",
        ]);
        let cleaned = profile().clean_row(&raw);
        assert_eq!(
            cleaned,
            raw_row(&[
                "01/09/2024",
                "5078.47614",
                "1500000",
                "MBVCB.6993 NGUYEN VAN A chuyen tien ung ho",
            ])
        );

        let t = profile().map_row(0, &cleaned).unwrap();
        assert_eq!(t.credit, 1_500_000);
        assert_eq!(t.transaction_date, "01/09/2024");
        assert_eq!(t.offset_name.as_deref(), Some("NGUYEN VAN A"));
        assert_eq!(t.source, Source::Vietcombank);
    }

    #[test]
    fn test_clean_secondary_row() {
        let raw = raw_row(&["12", "10/09/2024", "200.000", "ung ho\nbao Yagi"]);
        let cleaned = profile_secondary().clean_row(&raw);
        assert_eq!(cleaned, raw_row(&["10/09/2024", "200000", "ung ho bao Yagi"]));

        let t = profile_secondary().map_row(0, &cleaned).unwrap();
        assert_eq!(t.credit, 200_000);
        assert_eq!(t.offset_name, None);
        assert_eq!(t.transaction_details, "ung ho bao Yagi");
    }

    #[test]
    fn test_layouts() {
        assert_eq!(profile().layout, TableLayout::EdgeRows);
        assert_eq!(profile_secondary().layout, TableLayout::Detect);
    }
}
