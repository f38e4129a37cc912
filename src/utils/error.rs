use serde::Serialize;
use thiserror::Error;

use crate::models::PassportField;

/// Reason a single passport field was rejected.
///
/// Every validator returns at most one of these: the first check that fails
/// wins. The messages are diagnostics for logs, not end-user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum PassportError {
    #[error("{0} is empty")]
    EmptyField(PassportField),
    #[error("{0} contains a character outside Cyrillic and allowed punctuation")]
    NonAllowedScript(PassportField),
    #[error("{0} has a wrong format")]
    WrongFormat(PassportField),
    #[error("series year is before 1997 or too far after the check year")]
    ImplausibleIssueYear,
    #[error("issue date is before the fourteenth birthday")]
    IssuedBeforeAgeFloor,
    #[error("passport issued in the future")]
    IssuedInFuture,
    #[error("passport expired at 20")]
    ExpiredAtAge20,
    #[error("passport expired at 45")]
    ExpiredAtAge45,
    #[error("birth date is unset, in the future or under 18 years ago")]
    InvalidBirthDate,
}

impl PassportError {
    /// Stable machine-readable code, for callers mapping errors to their own messages.
    pub fn code(&self) -> &'static str {
        match self {
            PassportError::EmptyField(_) => "empty_field",
            PassportError::NonAllowedScript(_) => "non_allowed_script",
            PassportError::WrongFormat(_) => "wrong_format",
            PassportError::ImplausibleIssueYear => "implausible_issue_year",
            PassportError::IssuedBeforeAgeFloor => "issued_before_age_floor",
            PassportError::IssuedInFuture => "issued_in_future",
            PassportError::ExpiredAtAge20 => "expired_at_age_20",
            PassportError::ExpiredAtAge45 => "expired_at_age_45",
            PassportError::InvalidBirthDate => "invalid_birth_date",
        }
    }

    /// Field the error refers to, when the variant names one.
    pub fn field(&self) -> Option<PassportField> {
        match self {
            PassportError::EmptyField(field)
            | PassportError::NonAllowedScript(field)
            | PassportError::WrongFormat(field) => Some(*field),
            _ => None,
        }
    }
}

/// Failures while loading a record, as opposed to validating one.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
