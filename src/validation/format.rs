use crate::models::rules::{ISSUER_CODE_GROUP_LEN, NUMBER_LEN};
use crate::models::PassportField;
use crate::utils::PassportError;

/// True when `text` is exactly `len` ASCII digits.
pub(crate) fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

/// NumberValidator checks the six-digit passport number. There is no
/// check digit, so only the shape is verified.
pub struct NumberValidator;

impl NumberValidator {
    pub fn validate(number: &str) -> Result<(), PassportError> {
        if number.is_empty() {
            return Err(PassportError::EmptyField(PassportField::Number));
        }
        if !is_digits(number, NUMBER_LEN) {
            return Err(PassportError::WrongFormat(PassportField::Number));
        }
        Ok(())
    }
}

/// IssuerCodeValidator checks the issuing-authority (department) code:
/// six digits, optionally written as `NNN-NNN`.
pub struct IssuerCodeValidator;

impl IssuerCodeValidator {
    pub fn validate(issuer_code: &str) -> Result<(), PassportError> {
        if issuer_code.is_empty() {
            return Err(PassportError::EmptyField(PassportField::IssuerCode));
        }
        if !Self::has_code_format(issuer_code) {
            return Err(PassportError::WrongFormat(PassportField::IssuerCode));
        }
        Ok(())
    }

    fn has_code_format(code: &str) -> bool {
        if is_digits(code, 2 * ISSUER_CODE_GROUP_LEN) {
            return true;
        }
        match code.split_once('-') {
            Some((head, tail)) => {
                is_digits(head, ISSUER_CODE_GROUP_LEN) && is_digits(tail, ISSUER_CODE_GROUP_LEN)
            }
            None => false,
        }
    }
}
