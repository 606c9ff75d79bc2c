//! Errors raised while parsing user input

use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field}: '{value}' is not a whole number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field}: '{value}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("{field} is empty")]
    Empty { field: &'static str },
}

pub fn parse_number(field: &'static str, value: &str) -> Result<u32, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("Min", " 250 "), Ok(250));
        assert_eq!(
            parse_number("Min", "abc"),
            Err(InputError::InvalidNumber {
                field: "Min",
                value: "abc".to_string()
            })
        );
        assert_eq!(parse_number("Max", ""), Err(InputError::Empty { field: "Max" }));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("Start", "2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        let err = parse_date("End", "2024-13-01").unwrap_err();
        assert_eq!(
            err.to_string(),
            "End: '2024-13-01' is not a date (expected YYYY-MM-DD)"
        );
    }
}
