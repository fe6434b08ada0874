//! Chat transport module
//!
//! The funnel only needs two things from a chat network: incoming text
//! events and a way to send text back. Each adapter turns its network's
//! updates into [`InboundMessage`]s and implements [`ChatTransport`] for the
//! outbound side.

pub mod console;
pub mod telegram;

use async_trait::async_trait;
use crate::utils::errors::Result;

pub use console::{ConsoleTransport, run_console};
pub use telegram::TelegramTransport;

/// One text message from an individual user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Transport-specific address of the sender; replies go back here
    pub sender: String,
    pub body: String,
    /// Profile name as the transport reports it
    pub display_name: Option<String>,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, body: impl Into<String>, display_name: Option<&str>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            display_name: display_name.map(str::to_string),
        }
    }
}

/// Outbound side of a chat transport
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Deliver a text message
    async fn send_text(&self, recipient: &str, text: &str) -> Result<()>;

    /// Show a "typing..." indicator, if the network has one
    async fn send_typing(&self, recipient: &str) -> Result<()>;
}
