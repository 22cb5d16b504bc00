/// Contact form submission model
use crate::error::RelayError;
use crate::utils::validation::validate_email_address;
use serde::Deserialize;

/// One contact-form request. Transient: built from the inbound JSON body,
/// validated, consumed to compose an outbound email, then discarded.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validates the submission before any side effect occurs.
    ///
    /// Rejects an empty name and any email address that does not match
    /// standard address syntax. A rejected submission must never reach the
    /// delivery provider.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.name.trim().is_empty() {
            return Err(RelayError::Validation("name must not be empty".to_string()));
        }

        validate_email_address(&self.email)?;

        Ok(())
    }
}
