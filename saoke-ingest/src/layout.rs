//! Table layout hints passed to the PDF backend, and the backend-independent
//! part of picking a page's table.

use std::cmp::Reverse;

/// One extracted table: rows of cell text, empty cells as `""`.
pub type RawTable = Vec<Vec<String>>;

/// How the backend locates cells on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Default detection from drawn ruling lines in both directions.
    #[default]
    Detect,
    /// Columns from drawn vertical lines; rows split at the top of every
    /// drawn edge on the page. For tables without usable horizontal rules.
    EdgeRows,
}

/// Row boundaries for [`TableLayout::EdgeRows`]: edge tops, sorted, each once.
pub fn edge_tops(tops: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut ys: Vec<f64> = tops.into_iter().filter(|y| y.is_finite()).collect();
    ys.sort_by(f64::total_cmp);
    ys.dedup();
    ys
}

pub fn cell_count(table: &RawTable) -> usize {
    table.iter().map(Vec::len).sum()
}

/// The page's table is the one with the most cells. Tables arrive in
/// reading order, so the first one wins a tie.
pub fn largest_table(tables: Vec<RawTable>) -> Option<RawTable> {
    tables
        .into_iter()
        .filter(|t| cell_count(t) > 0)
        .min_by_key(|t| Reverse(cell_count(t)))
}
