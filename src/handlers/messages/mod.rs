//! Message handlers module
//!
//! Handles incoming text messages: route them through the funnel, then
//! deliver the replies with their typing pauses.

use tracing::debug;
use crate::state::FunnelRouter;
use crate::transport::{ChatTransport, InboundMessage};
use crate::utils::{helpers, logging};

/// Handle one incoming text message.
///
/// State is committed before any reply is sent. Delivery failures are logged
/// and never roll the state back.
pub async fn handle_message<T>(transport: &T, router: &FunnelRouter, msg: InboundMessage)
where
    T: ChatTransport + ?Sized,
{
    debug!(
        transport = transport.name(),
        user_id = %msg.sender,
        body = %helpers::truncate_text(&msg.body, 80),
        "Processing message"
    );

    let replies = router.handle(&msg);

    for reply in replies {
        if let Some(delay) = router.pacing().delay_for(reply.pause) {
            if let Err(e) = transport.send_typing(&msg.sender).await {
                logging::log_send_failure(transport.name(), &msg.sender, &e);
            }
            tokio::time::sleep(delay).await;
        }

        if let Err(e) = transport.send_text(&msg.sender, &reply.text).await {
            logging::log_send_failure(transport.name(), &msg.sender, &e);
        }
    }
}
