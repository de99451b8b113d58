//! Local checks run before any request is dispatched
//!
//! Required fields are checked as a batch and every missing one is reported.
//! Email-format checks run independently and fail fast with a single error;
//! such a failure is raised instead of the batch of required-field errors.
//! This precedence is observable behaviour and kept for compatibility.

use crate::error::{FieldError, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("email pattern is valid")
});

/// Whether `address` is a syntactically valid email address
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    if address.len() > MAX_EMAIL_LEN {
        return false;
    }
    match address.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => EMAIL_REGEX.is_match(address),
        _ => false,
    }
}

/// Collects a [`FieldError::required`] for every blank field
///
/// `fields` pairs an option name with whether its value is blank.
#[must_use]
pub fn missing_fields(fields: &[(&str, bool)]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|(_, blank)| *blank)
        .map(|(name, _)| FieldError::required(name))
        .collect()
}

/// Fails with a `field` error when `address` is not a valid email
pub fn check_email(field: &str, address: &str) -> Result<(), ValidationError> {
    if is_valid_email(address) {
        Ok(())
    } else {
        Err(ValidationError::single(field, "Invalid email format"))
    }
}

/// Fails on the first address in `addresses` that is not a valid email
pub fn check_recipients(field: &str, addresses: &[String]) -> Result<(), ValidationError> {
    match addresses.iter().find(|a| !is_valid_email(a)) {
        Some(invalid) => Err(ValidationError::single(
            field,
            format!("Invalid email format: {invalid}"),
        )),
        None => Ok(()),
    }
}

/// Fails with every collected required-field error, if any
pub fn check_required(errors: Vec<FieldError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}
