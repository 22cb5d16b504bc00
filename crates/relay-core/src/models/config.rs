/// Configuration model - loaded once from environment variables at startup
use crate::error::RelayError;
use crate::utils::validation::validate_email_address;

/// Process-wide relay configuration.
///
/// Immutable after construction; built once at process start and passed
/// explicitly into the handler context so tests can substitute their own.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// API credential for the email-delivery provider
    pub sendgrid_api_key: String,
    /// Verified sender address
    pub from_email: String,
    /// Recipient address for all submissions
    pub to_email: String,
}

impl RelayConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, RelayError> {
        let config = Self {
            sendgrid_api_key: std::env::var("SENDGRID_API_KEY")
                .map_err(|_| RelayError::Config("Missing SENDGRID_API_KEY".to_string()))?,
            from_email: std::env::var("FROM_EMAIL")
                .map_err(|_| RelayError::Config("Missing FROM_EMAIL".to_string()))?,
            to_email: std::env::var("TO_EMAIL")
                .map_err(|_| RelayError::Config("Missing TO_EMAIL".to_string()))?,
        };

        config.validate()?;

        tracing::info!("Configuration validated successfully");

        Ok(config)
    }

    /// Validates configuration is usable.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.sendgrid_api_key.trim().is_empty() {
            return Err(RelayError::Config(
                "SENDGRID_API_KEY must not be empty".to_string(),
            ));
        }

        validate_email_address(&self.from_email)
            .map_err(|_| RelayError::Config(format!("Invalid FROM_EMAIL: {}", self.from_email)))?;

        validate_email_address(&self.to_email)
            .map_err(|_| RelayError::Config(format!("Invalid TO_EMAIL: {}", self.to_email)))?;

        Ok(())
    }
}
