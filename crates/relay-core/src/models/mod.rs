/// Data models for the contact relay service
pub mod config;
pub mod contact;
pub mod email;

// Re-export commonly used types
pub use config::*;
pub use contact::*;
pub use email::*;
