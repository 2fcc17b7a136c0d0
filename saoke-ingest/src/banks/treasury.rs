//! State treasury transfer receipts (text, one receipt per page).
//!
//! The scanned receipts must be OCR'd first (see `crate::ocr`). Each page
//! carries labeled lines such as:
//!   Người phát lệnh: NGUYEN VAN A
//!   Ngày, giờ gửi (nhận): 10/09/2024 10:22:33
//!   Số tiền bằng số: 1.000.000
//!   Nội dung: Ung ho dong bao
//!   Ngân hàng chịu phí: Vietcombank

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use saoke_core::{FieldError, Source, Transaction, parse_credit};
use tracing::info;

use crate::backend::{PdfBackend, require_file};
use crate::error::IngestError;

/// Only the first pages hold receipts.
pub const MAX_PAGES: usize = 10;

const SENDER: &str = "Người phát lệnh";
const SENT_AT: &str = "Ngày, giờ gửi (nhận)";
const AMOUNT: &str = "Số tiền bằng số";
const DETAILS: &str = "Nội dung";
const FEE_PAYER: &str = "Ngân hàng chịu phí";

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":\s*([\d.]+)").expect("amount regex"))
}

fn after_last_separator(line: &str) -> &str {
    line.rsplit(": ").next().unwrap_or(line)
}

/// Fields seen so far on one page. Later lines overwrite earlier ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReceiptFields {
    pub offset_name: Option<String>,
    pub transaction_date: Option<String>,
    pub credit: Option<u64>,
    pub transaction_details: Option<String>,
    pub fee_payer: Option<String>,
}

impl ReceiptFields {
    pub fn scan_line(&mut self, line: &str) -> Result<(), FieldError> {
        if line.contains(SENDER) {
            self.offset_name = Some(after_last_separator(line).to_string());
        }
        if line.contains(SENT_AT) {
            // The time itself contains no ": ", so keep everything after the label.
            let date = line.splitn(3, ": ").last().unwrap_or(line);
            self.transaction_date = Some(date.to_string());
        }
        if line.contains(AMOUNT) {
            if let Some(caps) = amount_re().captures(line) {
                self.credit = Some(parse_credit(&caps[1])?);
            }
        }
        if line.contains(DETAILS) {
            self.transaction_details = Some(after_last_separator(line).to_string());
        }
        if line.contains(FEE_PAYER) {
            self.fee_payer = Some(after_last_separator(line).to_string());
        }
        Ok(())
    }

    /// Labels that never matched on this page.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.offset_name.is_none() {
            missing.push(SENDER);
        }
        if self.transaction_date.is_none() {
            missing.push(SENT_AT);
        }
        if self.credit.is_none() {
            missing.push(AMOUNT);
        }
        if self.transaction_details.is_none() {
            missing.push(DETAILS);
        }
        if self.fee_payer.is_none() {
            missing.push(FEE_PAYER);
        }
        missing
    }

    /// All five fields, or the labels that are missing.
    pub fn into_transaction(self) -> Result<Transaction, Vec<&'static str>> {
        match self {
            ReceiptFields {
                offset_name: Some(offset_name),
                transaction_date: Some(transaction_date),
                credit: Some(credit),
                transaction_details: Some(transaction_details),
                fee_payer: Some(fee_payer),
            } => Ok(Transaction::new(
                Some(offset_name),
                transaction_date,
                credit,
                transaction_details,
                Source::treasury(fee_payer),
            )),
            incomplete => Err(incomplete.missing()),
        }
    }
}

/// Parse one page of receipt text. Nothing carries over between pages.
pub fn parse_receipt(path: &Path, page: usize, text: &str) -> Result<Transaction, IngestError> {
    let mut fields = ReceiptFields::default();
    for line in text.lines() {
        fields.scan_line(line).map_err(|source| IngestError::Field {
            bank: "treasury",
            row: page,
            source,
        })?;
    }
    fields
        .into_transaction()
        .map_err(|missing| IngestError::IncompletePage {
            path: path.to_path_buf(),
            page,
            missing,
        })
}

/// One transaction per page, for at most the first `MAX_PAGES` pages.
pub fn extract(backend: &dyn PdfBackend, path: &Path) -> Result<Vec<Transaction>, IngestError> {
    require_file(path)?;
    let pages = backend.pages_text(path)?;

    let mut transactions = Vec::new();
    for (page, text) in pages.iter().take(MAX_PAGES).enumerate() {
        info!("{} - processing page {}", path.display(), page);
        transactions.push(parse_receipt(path, page, text)?);
    }
    Ok(transactions)
}
