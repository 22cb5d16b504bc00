/// API Context - shared state for all API handlers
use relay_core::RelayError;
use relay_core::models::RelayConfig;
use relay_core::services::{EmailProvider, SendGridProvider};
use std::sync::Arc;

/// Shared resources for API handlers: the immutable configuration and the
/// delivery provider. Built once at startup; tests construct their own with
/// a stub provider.
#[derive(Clone)]
pub struct ApiContext {
    pub config: RelayConfig,
    pub provider: Arc<dyn EmailProvider>,
}

impl ApiContext {
    /// Builds the production context: configuration from the environment,
    /// SendGrid as the delivery provider.
    pub fn from_env() -> Result<Arc<Self>, RelayError> {
        let config = RelayConfig::from_env()?;
        let provider = Arc::new(SendGridProvider::new(config.sendgrid_api_key.clone()));

        Ok(Arc::new(Self { config, provider }))
    }

    pub fn new(config: RelayConfig, provider: Arc<dyn EmailProvider>) -> Arc<Self> {
        Arc::new(Self { config, provider })
    }
}
