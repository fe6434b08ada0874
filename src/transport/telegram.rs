//! Telegram transport
//!
//! Binds the funnel to the Telegram Bot API through teloxide. Only private
//! chats are routed; group and channel traffic never reaches the funnel.

use std::sync::Arc;
use async_trait::async_trait;
use teloxide::{prelude::*, types::{ChatAction, Update}};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use tracing::{info, debug};
use crate::config::BotConfig;
use crate::handlers::handle_message;
use crate::state::FunnelRouter;
use crate::utils::errors::{MaqServiceError, Result};
use super::{ChatTransport, InboundMessage};

type HandlerResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Outbound Telegram transport; recipients are decimal chat ids
#[derive(Debug, Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Build the bot from configuration, honouring an API URL override
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let mut bot = Bot::new(&config.token);
        if let Some(ref api_url) = config.api_url {
            bot = bot.set_api_url(url::Url::parse(api_url)?);
        }
        Ok(Self::new(bot))
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    fn chat_id(recipient: &str) -> Result<ChatId> {
        recipient
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| MaqServiceError::InvalidRecipient(recipient.to_string()))
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send_text(&self, recipient: &str, text: &str) -> Result<()> {
        let chat_id = Self::chat_id(recipient)?;
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_typing(&self, recipient: &str) -> Result<()> {
        let chat_id = Self::chat_id(recipient)?;
        self.bot.send_chat_action(chat_id, ChatAction::Typing).await?;
        Ok(())
    }
}

/// Turn a Telegram message into a funnel event.
///
/// `None` for anything that isn't a text message from a person in a private chat.
pub fn inbound_from_message(msg: &Message) -> Option<InboundMessage> {
    if !msg.chat.is_private() {
        return None;
    }

    let user = msg.from.as_ref()?;
    if user.is_bot {
        return None;
    }

    let body = msg.text()?;
    Some(InboundMessage::new(
        msg.chat.id.0.to_string(),
        body,
        Some(user.first_name.as_str()),
    ))
}

/// Run the long-polling dispatcher until Ctrl-C.
///
/// teloxide processes updates of one chat in order and different chats
/// concurrently, so a typing pause for one customer never holds up another.
pub async fn run(transport: TelegramTransport, router: FunnelRouter) {
    let bot = transport.bot().clone();
    let transport = Arc::new(transport);
    let router = Arc::new(router);

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![transport, router])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Ignored update");
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting Telegram bot with polling mode...");
    dispatcher.dispatch().await;
    info!("Telegram bot has been shut down.");
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .chain(dptree::filter_map(|msg: Message| inbound_from_message(&msg)))
        .endpoint(handle_inbound)
}

async fn handle_inbound(
    transport: Arc<TelegramTransport>,
    router: Arc<FunnelRouter>,
    inbound: InboundMessage,
) -> HandlerResult {
    handle_message(transport.as_ref(), &router, inbound).await;
    Ok(())
}
