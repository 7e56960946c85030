//! Centralized validation of user-entered book fields.

use crate::core::types::ReadStatus;
use crate::parsing::record::FIELD_SEPARATOR;

/// Field validation error types.
///
/// The messages are shown verbatim to the user before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty. Please enter a valid {lower}.", lower = .0.to_lowercase())]
    EmptyField(&'static str),
    #[error("Please enter a valid numerical year.")]
    InvalidYear,
    #[error("Please enter 'yes' or 'no' for read status.")]
    InvalidReadStatus,
    #[error("{0} cannot contain '{FIELD_SEPARATOR}' or line breaks, or begin or end with '|'.")]
    ReservedSequence(&'static str),
}

/// Validate a required free-text field (title, author, genre).
///
/// `label` is the capitalized field name used in messages, e.g. "Title".
/// Returns the trimmed value.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if nothing but whitespace was given,
/// or `ValidationError::ReservedSequence` if the value could not be stored
/// in the library file unambiguously.
pub fn validate_text_field(label: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(label));
    }
    // Keeps the separator unambiguous once fields are joined on a stored line
    if value.contains(FIELD_SEPARATOR)
        || value.contains(['\n', '\r'])
        || value.starts_with('|')
        || value.ends_with('|')
    {
        return Err(ValidationError::ReservedSequence(label));
    }
    Ok(value.to_string())
}

/// Validate a publication year: one or more ASCII digits, nothing else.
///
/// # Examples
///
/// ```
/// use bookshelf::utils::validation::validate_year;
///
/// assert_eq!(validate_year(" 1965 ").unwrap(), "1965");
/// assert!(validate_year("MCMLXV").is_err());
/// assert!(validate_year("").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidYear` for empty or non-digit input.
pub fn validate_year(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidYear);
    }
    Ok(value.to_string())
}

/// Validate a yes/no read-status answer.
///
/// # Errors
///
/// Returns `ValidationError::InvalidReadStatus` for anything but yes/no.
pub fn validate_read_status(value: &str) -> Result<bool, ValidationError> {
    ReadStatus::parse(value)
        .map(ReadStatus::is_read)
        .ok_or(ValidationError::InvalidReadStatus)
}
