use chrono::NaiveDate;

use crate::models::rules::ADULT_AGE;
use crate::processing::dates::add_years;
use crate::utils::PassportError;

/// BirthDateValidator accepts holders who are at least 18 on the check date.
///
/// An unset date, a date in the future and an underage holder are all
/// reported as `InvalidBirthDate`.
pub struct BirthDateValidator;

impl BirthDateValidator {
    pub fn validate(birth_date: Option<NaiveDate>, check_date: NaiveDate) -> Result<(), PassportError> {
        let birth_date = birth_date.ok_or(PassportError::InvalidBirthDate)?;

        if birth_date > check_date {
            return Err(PassportError::InvalidBirthDate);
        }

        let adult_since = add_years(check_date, -ADULT_AGE).ok_or(PassportError::InvalidBirthDate)?;
        if birth_date > adult_since {
            return Err(PassportError::InvalidBirthDate);
        }

        Ok(())
    }
}
