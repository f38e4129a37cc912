use chrono::{Datelike, NaiveDate};

use crate::models::rules::{
    AGE_20_PASSPORT_CHANGE, AGE_45_PASSPORT_CHANGE, MIN_ISSUE_AGE, PASSPORT_DAYS_VALIDITY,
};
use crate::models::PassportField;
use crate::processing::dates::replacement_deadline;
use crate::utils::PassportError;

/// IssueDateValidator checks the issue date against the holder's birth
/// date and the check date.
///
/// A passport is issued at 14 and replaced at 20 and 45. After each of
/// those birthdays the previous passport stays valid for a grace period of
/// 91 days. Age at issue is the difference of calendar years, not an exact
/// age.
pub struct IssueDateValidator;

impl IssueDateValidator {
    pub fn validate(
        issue_date: Option<NaiveDate>,
        birth_date: Option<NaiveDate>,
        check_date: NaiveDate,
    ) -> Result<(), PassportError> {
        let issue_date = issue_date.ok_or(PassportError::EmptyField(PassportField::IssueDate))?;
        let birth_date = birth_date.ok_or(PassportError::EmptyField(PassportField::BirthDate))?;

        let age_at_issue = issue_date.year() - birth_date.year();
        if age_at_issue < MIN_ISSUE_AGE {
            return Err(PassportError::IssuedBeforeAgeFloor);
        }

        if issue_date > check_date {
            return Err(PassportError::IssuedInFuture);
        }

        if age_at_issue < AGE_20_PASSPORT_CHANGE
            && Self::expired_at(birth_date, AGE_20_PASSPORT_CHANGE, check_date)
        {
            return Err(PassportError::ExpiredAtAge20);
        }

        if age_at_issue < AGE_45_PASSPORT_CHANGE
            && Self::expired_at(birth_date, AGE_45_PASSPORT_CHANGE, check_date)
        {
            return Err(PassportError::ExpiredAtAge45);
        }

        Ok(())
    }

    // A deadline past the end of the calendar never expires.
    fn expired_at(birth_date: NaiveDate, age: i32, check_date: NaiveDate) -> bool {
        replacement_deadline(birth_date, age, PASSPORT_DAYS_VALIDITY)
            .is_some_and(|deadline| check_date > deadline)
    }
}
