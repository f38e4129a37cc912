use crate::models::PassportField;
use crate::utils::PassportError;
use crate::validation::script::first_disallowed_char;

/// NameValidator checks surname, given name and patronymic.
///
/// Names may contain Cyrillic letters and a small set of punctuation
/// (hyphen, space, period, comma, apostrophe, parentheses and the Roman
/// numeral letters `I` and `V`). Surname and given name are required;
/// patronymic may be empty.
pub struct NameValidator;

impl NameValidator {
    pub fn validate_surname(surname: &str) -> Result<(), PassportError> {
        Self::validate_required(surname, PassportField::Surname)
    }

    pub fn validate_given_name(given_name: &str) -> Result<(), PassportError> {
        Self::validate_required(given_name, PassportField::GivenName)
    }

    pub fn validate_patronymic(patronymic: &str) -> Result<(), PassportError> {
        if patronymic.is_empty() {
            return Ok(());
        }
        Self::validate_characters(patronymic, PassportField::Patronymic)
    }

    fn validate_required(name: &str, field: PassportField) -> Result<(), PassportError> {
        if name.is_empty() {
            return Err(PassportError::EmptyField(field));
        }
        Self::validate_characters(name, field)
    }

    fn validate_characters(name: &str, field: PassportField) -> Result<(), PassportError> {
        match first_disallowed_char(name) {
            Some(_) => Err(PassportError::NonAllowedScript(field)),
            None => Ok(()),
        }
    }
}
