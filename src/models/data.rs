use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

use crate::utils::{PassportError, RecordError};

/// Fields of the internal passport that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportField {
    Surname,
    GivenName,
    Patronymic,
    Series,
    Number,
    IssuerCode,
    BirthDate,
    IssueDate,
}

impl PassportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassportField::Surname => "surname",
            PassportField::GivenName => "given name",
            PassportField::Patronymic => "patronymic",
            PassportField::Series => "series",
            PassportField::Number => "number",
            PassportField::IssuerCode => "issuer code",
            PassportField::BirthDate => "birth date",
            PassportField::IssueDate => "issue date",
        }
    }
}

impl fmt::Display for PassportField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A passport record as handed over by the calling application.
///
/// Unset dates are `None`. Free-text fields (`place_of_birth`, `issued_by`)
/// are only normalized, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassportData {
    pub surname: String,
    pub given_name: String,
    pub patronymic: String,
    pub series: String,
    pub number: String,
    pub issuer_code: String,
    pub birth_date: Option<NaiveDate>,
    pub issue_date: Option<NaiveDate>,
    pub place_of_birth: String,
    pub issued_by: String,
}

impl PassportData {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: PassportField,
    pub error: PassportError,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: PassportField, error: PassportError) -> Self {
        ValidationIssue {
            field,
            error,
            message: error.to_string(),
        }
    }
}

/// Outcome of validating a whole record: at most one issue per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub check_date: NaiveDate,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn issue_for(&self, field: PassportField) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json_with_missing_fields() {
        let data = PassportData::from_json_str(
            r#"{"surname": "Иванов", "series": "4617", "birth_date": "1990-05-01"}"#,
        )
        .unwrap();

        assert_eq!(data.surname, "Иванов");
        assert_eq!(data.series, "4617");
        assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(data.issue_date, None);
        assert!(data.patronymic.is_empty());
    }

    #[test]
    fn test_record_from_bad_json() {
        let err = PassportData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
    }

    #[test]
    fn test_issue_message_follows_error() {
        let issue = ValidationIssue::new(
            PassportField::GivenName,
            PassportError::EmptyField(PassportField::GivenName),
        );
        assert_eq!(issue.message, "given name is empty");
    }
}
