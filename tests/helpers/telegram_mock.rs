//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to hand to the bot as its API URL
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    // teloxide spells method names in PascalCase; the Bot API ignores case
    fn endpoint(name: &str) -> String {
        format!(r"(?i)^/bot[^/]+/{}$", name)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response_body = if config.success {
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "MaqServiceBot",
                        "username": "maq_service_bot"
                    },
                    "chat": {
                        "id": test_chat_id(),
                        "first_name": "Maria",
                        "type": "private"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: message text is empty"
            })
        };

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint("sendmessage")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendChatAction endpoint
    pub async fn mock_send_chat_action(&self, config: MockResponseConfig) {
        let response_body = if config.success {
            json!({ "ok": true, "result": true })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })
        };

        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint("sendchataction")))
            .respond_with(
                ResponseTemplate::new(if config.success { 200 } else { 400 })
                    .set_body_json(response_body),
            )
            .mount(&self.server)
            .await;
    }

    /// Setup default successful mocks
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message(MockResponseConfig::default()).await;
        self.mock_send_chat_action(MockResponseConfig::default()).await;
    }

    /// Setup every endpoint to fail
    pub async fn setup_error_mocks(&self) {
        let error_config = MockResponseConfig {
            success: false,
            delay_ms: None,
        };
        self.mock_send_message(error_config.clone()).await;
        self.mock_send_chat_action(error_config).await;
    }

    /// Bodies of every request made to `endpoint`, in order
    pub async fn request_bodies(&self, endpoint: &str) -> Vec<Value> {
        let requests = self.server.received_requests().await.unwrap_or_default();
        requests
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&format!("/{}", endpoint.to_lowercase())))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }

    /// Lowercased Bot API method names in the order they were called
    pub async fn called_methods(&self) -> Vec<String> {
        let requests = self.server.received_requests().await.unwrap_or_default();
        requests
            .iter()
            .filter_map(|req| req.url.path().rsplit('/').next().map(str::to_lowercase))
            .collect()
    }
}

/// Helper function to create test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test private chat id
pub fn test_chat_id() -> i64 {
    987654321
}
