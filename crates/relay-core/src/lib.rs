/// Relay Core - Shared library for the contact relay service
///
/// This crate contains the domain models, email composition, provider
/// abstraction and configuration shared by the relay binaries.
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
