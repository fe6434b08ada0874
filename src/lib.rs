//! MAQ SERVICE intake bot
//!
//! A scripted customer-intake funnel for an appliance repair shop, served
//! over a chat transport. This library provides the funnel state machine,
//! its in-memory state store and the transport adapters.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod state;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{MaqServiceError, Result};

// Re-export main components for easy access
pub use state::{FunnelRouter, Pacing, StateStorage, StateStorageManager};
pub use transport::{ChatTransport, InboundMessage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
