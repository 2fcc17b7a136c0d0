//! Declarative per-bank extraction profiles.
//!
//! A profile says which raw columns to keep and how to normalize them
//! (`ColumnRule`), then which cleaned columns hold each transaction field
//! (`FieldMap`). One generic routine interprets every profile.

use std::ops::Range;

use saoke_core::{
    Source, Transaction, collapse_newlines, month_first_to_day_first, offset_name_from_details,
    parse_credit,
};

use crate::error::IngestError;
use crate::layout::TableLayout;

/// What to do with one raw column, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRule {
    Keep,
    Drop,
    /// One raw cell becomes one cleaned column per line.
    SplitLines,
    /// Line breaks become single spaces.
    JoinLines,
    /// Remove every listed character (grouping separators).
    Strip(&'static str),
}

impl ColumnRule {
    fn apply(&self, cell: &str, out: &mut Vec<String>) {
        match self {
            ColumnRule::Keep => out.push(cell.to_string()),
            ColumnRule::Drop => {}
            ColumnRule::SplitLines => out.extend(cell.split('\n').map(str::to_string)),
            ColumnRule::JoinLines => out.push(collapse_newlines(cell)),
            ColumnRule::Strip(chars) => {
                out.push(cell.chars().filter(|c| !chars.contains(*c)).collect())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetRule {
    /// The counterparty has its own cleaned column.
    Column(usize),
    /// Scan the details text for an uppercase name.
    FromDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayFirst,
    /// Rewritten to DD/MM/YYYY on the way out.
    MonthFirst,
}

/// Cleaned-column positions of the transaction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub date: usize,
    pub credit: usize,
    pub details: usize,
    pub offset: OffsetRule,
    pub date_order: DateOrder,
}

#[derive(Debug, Clone)]
pub struct BankProfile {
    /// Short label used in logs and errors
    pub name: &'static str,
    pub source: Source,
    /// Zero-based pages to read the table from
    pub pages: Range<usize>,
    /// Leading table rows to discard (column titles)
    pub header_rows: usize,
    pub layout: TableLayout,
    /// Rules by raw column position; columns past the end are kept
    pub columns: Vec<ColumnRule>,
    pub fields: FieldMap,
}

impl BankProfile {
    /// Reshape one raw table row.
    pub fn clean_row(&self, raw: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(raw.len());
        for (i, cell) in raw.iter().enumerate() {
            self.columns
                .get(i)
                .unwrap_or(&ColumnRule::Keep)
                .apply(cell, &mut out);
        }
        out
    }

    pub fn clean_rows(&self, raw_rows: &[Vec<String>]) -> Vec<Vec<String>> {
        raw_rows.iter().map(|row| self.clean_row(row)).collect()
    }

    /// Build a transaction from one cleaned row. `row_index` is only used
    /// in error messages.
    pub fn map_row(&self, row_index: usize, row: &[String]) -> Result<Transaction, IngestError> {
        let cell = |column: usize| {
            row.get(column)
                .map(String::as_str)
                .ok_or(IngestError::ColumnMissing {
                    bank: self.name,
                    row: row_index,
                    column,
                    width: row.len(),
                })
        };
        let field_error = |source| IngestError::Field {
            bank: self.name,
            row: row_index,
            source,
        };

        let fields = &self.fields;
        let raw_date = cell(fields.date)?.trim();
        let transaction_date = match fields.date_order {
            DateOrder::DayFirst => raw_date.to_string(),
            DateOrder::MonthFirst => month_first_to_day_first(raw_date).map_err(field_error)?,
        };
        let credit = parse_credit(cell(fields.credit)?).map_err(field_error)?;
        let transaction_details = cell(fields.details)?.to_string();
        let offset_name = match fields.offset {
            OffsetRule::FromDetails => offset_name_from_details(&transaction_details),
            OffsetRule::Column(column) => {
                let name = collapse_newlines(cell(column)?).trim().to_string();
                (!name.is_empty()).then_some(name)
            }
        };

        Ok(Transaction::new(
            offset_name,
            transaction_date,
            credit,
            transaction_details,
            self.source.clone(),
        ))
    }
}
