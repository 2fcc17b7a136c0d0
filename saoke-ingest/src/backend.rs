//! PDF access seam.
//!
//! Tables come from `pdfplumber` page table detection. Plain per-page text
//! comes from the `pdf-extract` crate.

use std::path::Path;

use pdfplumber::{ExplicitLines, Page, Pdf, Strategy, TableSettings};

use crate::error::IngestError;
use crate::layout::{RawTable, TableLayout, edge_tops, largest_table};

pub trait PdfBackend {
    /// The table on one zero-based page, or `None` when the page has none.
    fn page_table(
        &self,
        path: &Path,
        page: usize,
        layout: TableLayout,
    ) -> Result<Option<RawTable>, IngestError>;

    /// Plain text of every page, in page order.
    fn pages_text(&self, path: &Path) -> Result<Vec<String>, IngestError>;
}

/// Fails early with the path when the input is absent, before any parsing.
pub fn require_file(path: &Path) -> Result<(), IngestError> {
    if !path.is_file() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

fn pdf_error(path: &Path, e: impl std::fmt::Display) -> IngestError {
    IngestError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlumberBackend;

impl PlumberBackend {
    pub fn new() -> Self {
        Self
    }

    fn settings(page: &Page, layout: TableLayout) -> TableSettings {
        match layout {
            TableLayout::Detect => TableSettings::default(),
            TableLayout::EdgeRows => TableSettings {
                vertical_strategy: Some(Strategy::Lattice),
                horizontal_strategy: Some(Strategy::Explicit),
                explicit_lines: Some(ExplicitLines {
                    horizontal_lines: edge_tops(page.edges().iter().map(|e| e.top)),
                    vertical_lines: Vec::new(),
                }),
                ..TableSettings::default()
            },
        }
    }
}

impl PdfBackend for PlumberBackend {
    fn page_table(
        &self,
        path: &Path,
        page: usize,
        layout: TableLayout,
    ) -> Result<Option<RawTable>, IngestError> {
        require_file(path)?;
        // The document is closed when `pdf` drops, on every return path.
        let pdf = Pdf::open_file(path, None).map_err(|e| pdf_error(path, e))?;
        let p = pdf.page(page).map_err(|e| pdf_error(path, e))?;

        let settings = Self::settings(&p, layout);
        let tables: Vec<RawTable> = p
            .find_tables(&settings)
            .into_iter()
            .map(|table| {
                table
                    .rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| cell.text.unwrap_or_default())
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Ok(largest_table(tables))
    }

    fn pages_text(&self, path: &Path) -> Result<Vec<String>, IngestError> {
        require_file(path)?;
        pdf_extract::extract_text_by_pages(path).map_err(|e| pdf_error(path, e))
    }
}
