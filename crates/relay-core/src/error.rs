/// Error types for the contact relay service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider transport error: {0}")]
    Provider(String),
}

impl RelayError {
    /// A client fault is surfaced to the caller as-is; anything else is a
    /// server-side failure whose detail stays in the logs.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
