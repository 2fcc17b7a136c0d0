//! Field normalizers applied to cleaned statement cells.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("credit is not a whole number: {0:?}")]
    InvalidCredit(String),

    #[error("date is not M/D/YYYY: {0:?}")]
    InvalidDate(String),

    #[error("unknown source: {0:?}")]
    UnknownSource(String),
}

/// Two or more consecutive all-uppercase words, read as a Vietnamese
/// personal or company name written without diacritics.
fn uppercase_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Z]+(?:\s[A-Z]+)+)\b").expect("uppercase name regex"))
}

/// Parse an amount cell into whole currency units.
///
/// Grouping characters (`.`, `,` and whitespace) are dropped first, so
/// `"1.234.567"` and `"1,234,567"` both read as `1234567`.
pub fn parse_credit(raw: &str) -> Result<u64, FieldError> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | ',') && !c.is_whitespace())
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::InvalidCredit(raw.to_string()));
    }
    digits
        .parse()
        .map_err(|_| FieldError::InvalidCredit(raw.to_string()))
}

/// Reformat a month-first date (`3/14/2023`) as zero-padded day-first
/// (`14/03/2023`). The year is carried through as written.
pub fn month_first_to_day_first(raw: &str) -> Result<String, FieldError> {
    let invalid = || FieldError::InvalidDate(raw.to_string());

    let parts: Vec<&str> = raw.trim().split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    let year = year.trim();
    let year_num: i32 = year.parse().map_err(|_| invalid())?;

    // Rejects 2/30 and friends; a leap-year check needs the real year.
    NaiveDate::from_ymd_opt(year_num, month, day).ok_or_else(invalid)?;

    Ok(format!("{day:02}/{month:02}/{year}"))
}

/// First run of two or more uppercase words in the details text.
///
/// Heuristic only: no match yields `None` and the record is still kept.
pub fn offset_name_from_details(details: &str) -> Option<String> {
    uppercase_name_re()
        .captures(details)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Replace every embedded line break with a single space.
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credit_strips_grouping() {
        assert_eq!(parse_credit("1.234.567"), Ok(1_234_567));
        assert_eq!(parse_credit("1,234,567"), Ok(1_234_567));
        assert_eq!(parse_credit(" 500 000 "), Ok(500_000));
        assert_eq!(parse_credit("0"), Ok(0));
    }

    #[test]
    fn test_parse_credit_rejects_non_numeric() {
        assert!(matches!(parse_credit(""), Err(FieldError::InvalidCredit(_))));
        assert!(matches!(parse_credit("-100"), Err(FieldError::InvalidCredit(_))));
        assert!(matches!(parse_credit("12a"), Err(FieldError::InvalidCredit(_))));
    }

    #[test]
    fn test_month_first_to_day_first() {
        assert_eq!(month_first_to_day_first("3/14/2023").unwrap(), "14/03/2023");
        assert_eq!(month_first_to_day_first("12/1/2024").unwrap(), "01/12/2024");
        assert_eq!(month_first_to_day_first("09/10/2024").unwrap(), "10/09/2024");
    }

    #[test]
    fn test_month_first_rejects_bad_dates() {
        assert!(month_first_to_day_first("14/3/2023").is_err());
        assert!(month_first_to_day_first("2/30/2024").is_err());
        assert!(month_first_to_day_first("2024-03-14").is_err());
    }

    #[test]
    fn test_offset_name_from_details() {
        assert_eq!(
            offset_name_from_details("Chuyen tien NGUYEN VAN A so tien 100").as_deref(),
            Some("NGUYEN VAN A")
        );
        assert_eq!(offset_name_from_details("ung ho dong bao bao lu"), None);
        // A single uppercase word is not a name.
        assert_eq!(offset_name_from_details("MB chuyen khoan"), None);
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("ung ho\nmien bac\r\nbao"), "ung ho mien bac bao");
    }
}
