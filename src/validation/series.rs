use chrono::{Datelike, NaiveDate};

use crate::models::rules::{BLANK_RELEASE_YEAR, SERIES_FUTURE_QUOTA_YEARS, SERIES_LEN};
use crate::models::PassportField;
use crate::utils::PassportError;
use crate::validation::format::is_digits;

/// SeriesValidator checks the four-digit passport series. The last two
/// digits are the year the blank was printed.
pub struct SeriesValidator;

impl SeriesValidator {
    pub fn validate(series: &str, check_date: NaiveDate) -> Result<(), PassportError> {
        if series.is_empty() {
            return Err(PassportError::EmptyField(PassportField::Series));
        }
        if !is_digits(series, SERIES_LEN) {
            return Err(PassportError::WrongFormat(PassportField::Series));
        }

        let issue_year = Self::issue_year(series, check_date)
            .ok_or(PassportError::WrongFormat(PassportField::Series))?;

        // Blanks may be printed against the quota of up to five future years.
        let check_year = check_date.year();
        if issue_year < BLANK_RELEASE_YEAR || issue_year > check_year + SERIES_FUTURE_QUOTA_YEARS {
            return Err(PassportError::ImplausibleIssueYear);
        }

        Ok(())
    }

    /// Four-digit year encoded in the series. Two-digit years up to the
    /// check year's last two digits plus five belong to the 2000s, the rest
    /// to the 1900s. Returns `None` unless the series is four digits.
    pub fn issue_year(series: &str, check_date: NaiveDate) -> Option<i32> {
        if !is_digits(series, SERIES_LEN) {
            return None;
        }
        let two_digit: i32 = series.get(series.len().checked_sub(2)?..)?.parse().ok()?;
        let window = check_date.year().rem_euclid(100) + SERIES_FUTURE_QUOTA_YEARS;

        if two_digit <= window {
            Some(2000 + two_digit)
        } else {
            Some(1900 + two_digit)
        }
    }
}
