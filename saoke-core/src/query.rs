//! Read-side helpers over a stored transaction list: paging and search.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::Transaction;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid page value")]
    InvalidPage,

    #[error("invalid limit value")]
    InvalidLimit,

    #[error("page does not contain any transactions")]
    PageOutOfRange,

    #[error("no matching transactions found")]
    NoMatches,
}

/// One-based page of `limit` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Result<Self, QueryError> {
        let req = Self { page, limit };
        req.validate()?;
        Ok(req)
    }

    /// From raw query-string values; absent values take the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, QueryError> {
        let page = match page {
            Some(p) => p.trim().parse().map_err(|_| QueryError::InvalidPage)?,
            None => default_page(),
        };
        let limit = match limit {
            Some(l) => l.trim().parse().map_err(|_| QueryError::InvalidLimit)?,
            None => default_limit(),
        };
        Self::new(page, limit)
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page == 0 {
            return Err(QueryError::InvalidPage);
        }
        if self.limit == 0 {
            return Err(QueryError::InvalidLimit);
        }
        Ok(())
    }
}

/// Slice out one page. A start index past the end is an error; the end is clamped.
pub fn paginate<T>(items: &[T], req: PageRequest) -> Result<&[T], QueryError> {
    req.validate()?;
    let start = (req.page - 1).saturating_mul(req.limit);
    if start >= items.len() {
        return Err(QueryError::PageOutOfRange);
    }
    let end = start.saturating_add(req.limit).min(items.len());
    Ok(&items[start..end])
}

/// All set fields must match: date and credit exactly, details as a
/// case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub transaction_date: Option<String>,
    pub credit: Option<u64>,
    pub transaction_details: Option<String>,
}

impl SearchFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(date) = &self.transaction_date {
            if &t.transaction_date != date {
                return false;
            }
        }
        if let Some(credit) = self.credit {
            if t.credit != credit {
                return false;
            }
        }
        if let Some(details) = &self.transaction_details {
            if !t
                .transaction_details
                .to_lowercase()
                .contains(&details.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

pub fn search(items: &[Transaction], filter: &SearchFilter) -> Result<Vec<Transaction>, QueryError> {
    let found: Vec<Transaction> = items
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    if found.is_empty() {
        return Err(QueryError::NoMatches);
    }
    Ok(found)
}

/// Search, then page through the matches.
pub fn search_page(
    items: &[Transaction],
    filter: &SearchFilter,
    req: PageRequest,
) -> Result<Vec<Transaction>, QueryError> {
    let found = search(items, filter)?;
    Ok(paginate(&found, req)?.to_vec())
}
