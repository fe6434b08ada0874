//! Message handlers for the chat bot
//!
//! This module contains keyword classification, the message texts and the
//! inbound message handler.

pub mod commands;
pub mod messages;
pub mod templates;

pub use commands::{Keyword, MenuOption};
pub use messages::handle_message;
