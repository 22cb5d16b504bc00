/// External service bindings
pub mod sendgrid;

// Re-export service traits
pub use sendgrid::{EmailProvider, ProviderResponse, SendGridProvider};

#[cfg(feature = "mock")]
pub use sendgrid::MockEmailProvider;
