//! Transaction record types shared by all statement extractors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::normalize::FieldError;

/// Prefix for treasury sources; the fee-paying bank follows it.
const TREASURY_PREFIX: &str = "TREASURY - ";

/// Bank or manual channel that produced a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Source {
    Vietcombank,
    Bidv,
    Vietinbank,
    Agribank,
    Cash,
    /// Treasury receipt, tagged with the bank that paid the transfer fee
    Treasury(String),
}

impl Source {
    pub fn treasury(fee_payer: impl Into<String>) -> Self {
        Source::Treasury(fee_payer.into())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Vietcombank => f.write_str("VIETCOMBANK"),
            Source::Bidv => f.write_str("BIDV"),
            Source::Vietinbank => f.write_str("VIETINBANK"),
            Source::Agribank => f.write_str("AGRIBANK"),
            Source::Cash => f.write_str("CASH"),
            Source::Treasury(payer) => write!(f, "{TREASURY_PREFIX}{payer}"),
        }
    }
}

impl FromStr for Source {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIETCOMBANK" => Ok(Source::Vietcombank),
            "BIDV" => Ok(Source::Bidv),
            "VIETINBANK" => Ok(Source::Vietinbank),
            "AGRIBANK" => Ok(Source::Agribank),
            "CASH" => Ok(Source::Cash),
            other => other
                .strip_prefix(TREASURY_PREFIX)
                .map(Source::treasury)
                .ok_or_else(|| FieldError::UnknownSource(other.to_string())),
        }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.to_string()
    }
}

impl TryFrom<String> for Source {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Normalized output of every extractor (bank-agnostic).
///
/// Field order is the serialized key order:
/// `offset_name, transaction_date, credit, transaction_details, source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Counterparty name, if one could be read or derived
    pub offset_name: Option<String>,
    /// DD/MM/YYYY for table statements; treasury receipts may carry a time too
    pub transaction_date: String,
    /// Whole currency units, grouping characters already stripped
    pub credit: u64,
    pub transaction_details: String,
    pub source: Source,
}

impl Transaction {
    pub fn new(
        offset_name: Option<String>,
        transaction_date: impl Into<String>,
        credit: u64,
        transaction_details: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            offset_name,
            transaction_date: transaction_date.into(),
            credit,
            transaction_details: transaction_details.into(),
            source,
        }
    }
}
