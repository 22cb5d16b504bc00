/// Input validation utilities
use crate::error::RelayError;
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

pub fn validate_email_address(email: &str) -> Result<(), RelayError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(RelayError::Validation(format!(
            "Invalid email address: {}",
            email
        )))
    }
}
