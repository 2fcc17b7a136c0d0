//! VietinBank (CTG) statements.
//!
//! Raw columns: 0 row number, 1 date/time, 2 details, 3 credit,
//! 4 counterparty name. Two title rows precede the data.

use std::path::Path;

use saoke_core::{Source, Transaction};

use crate::backend::PdfBackend;
use crate::error::IngestError;
use crate::pipeline::extract_table_statement;
use crate::profile::{BankProfile, ColumnRule, DateOrder, FieldMap, OffsetRule};
use crate::layout::TableLayout;

pub fn profile() -> BankProfile {
    BankProfile {
        name: "ctg",
        source: Source::Vietinbank,
        pages: 0..1,
        header_rows: 2,
        layout: TableLayout::Detect,
        columns: vec![
            ColumnRule::Drop,
            ColumnRule::JoinLines,
            ColumnRule::JoinLines,
            ColumnRule::Strip("."),
        ],
        fields: FieldMap {
            date: 0,
            credit: 2,
            details: 1,
            offset: OffsetRule::Column(3),
            date_order: DateOrder::DayFirst,
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
            "1",
            "10/09/2024\n08:15:02",
            "Ung ho\nmien Bac",
            "300.000",
            "Pham Van\nBinh",
        ]);
        let cleaned = profile().clean_row(&raw);
        assert_eq!(
            cleaned,
            raw_row(&[
                "10/09/2024 08:15:02",
                "Ung ho mien Bac",
                "300000",
                "Pham Van\nBinh",
            ])
        );

        // The counterparty comes from its own column, not the details.
        let t = profile().map_row(0, &cleaned).unwrap();
        assert_eq!(t.offset_name.as_deref(), Some("Pham Van Binh"));
        assert_eq!(t.transaction_date, "10/09/2024 08:15:02");
        assert_eq!(t.credit, 300_000);
        assert_eq!(t.source, Source::Vietinbank);
    }
}
