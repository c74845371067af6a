//! Input validation utilities for the service layer.
//!
//! Request payloads carry optional fields so that absent input reaches these
//! helpers and is reported with a local-language message instead of a JSON
//! decoding error.

use crate::error::{Error, Result};

/// Returns the trimmed value when it is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Rejects `value` when it is longer than `max` characters.
///
/// # Arguments
/// * `label` - Field name as shown to the user
/// * `value` - Text to check
/// * `max` - Maximum number of characters
pub fn validate_max_len(label: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::Validation(format!(
            "Polje '{}' može imati najviše {} znakova.",
            label, max
        )));
    }
    Ok(())
}

/// Applies [`validate_max_len`] to an optional field.
pub fn validate_optional_max_len(label: &str, value: Option<&str>, max: usize) -> Result<()> {
    match value {
        Some(v) => validate_max_len(label, v, max),
        None => Ok(()),
    }
}

/// Basic structural email check
///
/// # Examples
/// ```
/// use sunnetna::validation::validate_email;
///
/// validate_email("amina@mail.com").unwrap();
/// assert!(validate_email("amina").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || Error::Validation("Neispravan format email adrese.".to_string());

    let (local_part, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local_part.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(())
}
