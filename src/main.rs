//! MAQ SERVICE intake bot
//!
//! Main application entry point

use anyhow::Context;
use tokio::io::BufReader;
use tracing::{info, warn};

use MaqServiceBot::{
    config::{Settings, TransportKind},
    utils::logging,
    state::{FunnelRouter, Pacing, StateStorage, StateStorageManager},
    transport::{self, ConsoleTransport, TelegramTransport},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading configuration")?;
    settings.validate().context("validating configuration")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", MaqServiceBot::info());

    // Initialize state management
    let state_storage = StateStorage::new();
    let mut storage_manager = match settings.funnel.idle_timeout() {
        Some(idle_timeout) => {
            let mut manager = StateStorageManager::new(
                state_storage.clone(),
                idle_timeout,
                settings.funnel.cleanup_interval(),
            );
            manager.start_cleanup();
            Some(manager)
        }
        None => {
            warn!("Idle eviction disabled; abandoned funnel sessions are kept until restart");
            None
        }
    };

    let router = FunnelRouter::new(state_storage, Pacing::from(&settings.pacing));

    match settings.transport.kind {
        TransportKind::Telegram => {
            let telegram = TelegramTransport::from_config(&settings.bot)?;
            transport::telegram::run(telegram, router).await;
        }
        TransportKind::Console => {
            let console = ConsoleTransport::new(tokio::io::stdout());
            let stdin = BufReader::new(tokio::io::stdin());
            transport::run_console(stdin, &console, &router, &settings.console).await?;
        }
    }

    if let Some(manager) = storage_manager.as_mut() {
        manager.stop_cleanup();
    }

    info!("MAQ SERVICE bot has been shut down.");

    Ok(())
}
