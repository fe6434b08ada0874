//! Console transport
//!
//! Line-oriented adapter for running the funnel locally: every input line is a
//! message from one fixed user, replies are written to the output.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::info;
use crate::config::ConsoleConfig;
use crate::handlers::handle_message;
use crate::state::FunnelRouter;
use crate::utils::errors::Result;
use super::{ChatTransport, InboundMessage};

/// Writes replies to any async writer (stdout in production)
#[derive(Debug)]
pub struct ConsoleTransport<W> {
    writer: Mutex<W>,
}

impl<W> ConsoleTransport<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    async fn write(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W> ChatTransport for ConsoleTransport<W>
where
    W: AsyncWrite + Unpin + Send,
{
    fn name(&self) -> &'static str {
        "console"
    }

    async fn send_text(&self, recipient: &str, text: &str) -> Result<()> {
        self.write(&format!("[para {}]\n{}\n\n", recipient, text)).await
    }

    async fn send_typing(&self, _recipient: &str) -> Result<()> {
        self.write("digitando...\n").await
    }
}

/// Feed every line from `reader` to the funnel until end of input.
///
/// Returns the number of messages handled.
pub async fn run_console<R, W>(
    reader: R,
    transport: &ConsoleTransport<W>,
    router: &FunnelRouter,
    identity: &ConsoleConfig,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    info!(user_id = %identity.user_id, "Console transport ready, type a message");

    while let Some(line) = lines.next_line().await? {
        let inbound = InboundMessage::new(
            identity.user_id.as_str(),
            line,
            Some(identity.display_name.as_str()),
        );
        handle_message(transport, router, inbound).await;
        handled += 1;
    }

    info!(handled = handled, "Console input closed");
    Ok(handled)
}
