//! Test helpers module
//!
//! Mock transports, a mock Telegram Bot API server and small setup helpers
//! shared by the integration tests.

#![allow(dead_code)]

pub mod recording_transport;
pub mod telegram_mock;

pub use recording_transport::*;
pub use telegram_mock::*;

use std::sync::Once;
use std::time::Duration;
use MaqServiceBot::{FunnelRouter, InboundMessage, Pacing, StateStorage};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Router with a fresh store and no typing pauses
pub fn test_router() -> FunnelRouter {
    init_test_env();
    FunnelRouter::new(StateStorage::new(), Pacing::immediate())
}

/// Router whose paused replies wait a few milliseconds
pub fn paced_router() -> FunnelRouter {
    init_test_env();
    let pause = Duration::from_millis(5);
    FunnelRouter::new(
        StateStorage::new(),
        Pacing {
            reset: pause,
            greeting: pause,
            info: pause,
            summary: pause,
        },
    )
}

/// Message from a test user with a two-word profile name
pub fn text_from(user_id: &str, body: &str) -> InboundMessage {
    InboundMessage::new(user_id, body, Some("Maria Souza"))
}
