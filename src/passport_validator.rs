use chrono::NaiveDate;
use log::debug;

use crate::models::*;
use crate::processing::TextNormalizer;
use crate::utils::PassportError;
use crate::validation::*;

/// Validates whole passport records against a fixed check date.
pub struct PassportValidator {
    check_date: NaiveDate,
}

impl PassportValidator {
    pub fn new(check_date: NaiveDate) -> Self {
        PassportValidator { check_date }
    }

    pub fn check_date(&self) -> NaiveDate {
        self.check_date
    }

    // Run every field check and keep the first failure of each field
    pub fn validate(&self, data: &PassportData) -> ValidationResult {
        let checks: [(PassportField, Result<(), PassportError>); 8] = [
            (PassportField::Surname, NameValidator::validate_surname(&data.surname)),
            (PassportField::GivenName, NameValidator::validate_given_name(&data.given_name)),
            (PassportField::Patronymic, NameValidator::validate_patronymic(&data.patronymic)),
            (PassportField::Series, SeriesValidator::validate(&data.series, self.check_date)),
            (PassportField::Number, NumberValidator::validate(&data.number)),
            (PassportField::IssuerCode, IssuerCodeValidator::validate(&data.issuer_code)),
            (
                PassportField::BirthDate,
                BirthDateValidator::validate(data.birth_date, self.check_date),
            ),
            (
                PassportField::IssueDate,
                IssueDateValidator::validate(data.issue_date, data.birth_date, self.check_date),
            ),
        ];

        let mut issues = Vec::new();
        for (field, outcome) in checks {
            if let Err(error) = outcome {
                debug!("{} rejected: {}", field, error);
                issues.push(ValidationIssue::new(field, error));
            }
        }

        ValidationResult {
            is_valid: issues.is_empty(),
            check_date: self.check_date,
            issues,
        }
    }

    /// Copy of the record with its free-text fields normalized.
    pub fn normalize(&self, data: &PassportData) -> PassportData {
        PassportData {
            place_of_birth: TextNormalizer::place_of_birth(&data.place_of_birth),
            issued_by: TextNormalizer::issued_by(&data.issued_by),
            ..data.clone()
        }
    }
}
