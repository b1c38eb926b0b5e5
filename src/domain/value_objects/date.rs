//! Calendar dates on the wire are always `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::domain::errors::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shape check only: four digits, dash, two digits, dash, two digits.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse(text: &str) -> Result<NaiveDate, DomainError> {
    if !has_date_shape(text) {
        return Err(DomainError::InvalidFormat(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| DomainError::InvalidFormat(text.to_string()))
}

pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Same grammar as [`parse`].
pub fn is_well_formed(text: &str) -> bool {
    parse(text).is_ok()
}
