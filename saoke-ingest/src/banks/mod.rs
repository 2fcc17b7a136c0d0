//! Built-in bank profiles and the treasury receipt parser.

pub mod agribank;
pub mod bidv;
pub mod cash;
pub mod treasury;
pub mod vietcombank;
pub mod vietinbank;

#[cfg(test)]
pub(crate) fn raw_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
