//! In-memory chat transports for driving the funnel in tests

use std::sync::Mutex;
use async_trait::async_trait;
use MaqServiceBot::{ChatTransport, MaqServiceError, Result};

/// Something a transport was asked to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Typing { recipient: String },
    Text { recipient: String, text: String },
}

/// Records every outbound call
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts delivered to one recipient, in order
    pub fn texts_for(&self, recipient: &str) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Text { recipient: to, text } if to == recipient => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_text_for(&self, recipient: &str) -> Option<String> {
        self.texts_for(recipient).pop()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send_text(&self, recipient: &str, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            recipient: recipient.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, recipient: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Typing {
            recipient: recipient.to_string(),
        });
        Ok(())
    }
}

/// Fails every send, counting attempts
#[derive(Debug, Default)]
pub struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl ChatTransport for FailingTransport {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send_text(&self, _recipient: &str, _text: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(MaqServiceError::transport("failing", "connection reset"))
    }

    async fn send_typing(&self, _recipient: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(MaqServiceError::transport("failing", "connection reset"))
    }
}
