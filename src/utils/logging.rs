//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the funnel.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{MaqServiceError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer and must live as long as the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_writer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "maqservice.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let json = config.format == "json";
    let stdout_pretty = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));
    let stdout_json = json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout));
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_pretty)
        .with(stdout_json)
        .with(file_layer)
        .try_init()
        .map_err(|e| MaqServiceError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a stage change inside the funnel
pub fn log_stage_transition(user_id: &str, from: &str, to: &str) {
    info!(
        user_id = user_id,
        from = from,
        to = to,
        "Funnel stage transition"
    );
}

/// Log a completed intake. The collected answers only go out in the summary reply.
pub fn log_funnel_completed(user_id: &str) {
    info!(user_id = user_id, "Intake request completed");
}

/// Log a reset keyword, with the stage that was abandoned if any
pub fn log_funnel_reset(user_id: &str, abandoned_stage: Option<&str>) {
    debug!(
        user_id = user_id,
        abandoned_stage = abandoned_stage,
        "Funnel reset to main menu"
    );
}

/// Log a reply that the transport failed to deliver
pub fn log_send_failure(transport: &str, user_id: &str, error: &MaqServiceError) {
    warn!(
        transport = transport,
        user_id = user_id,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        error = %error,
        "Failed to deliver reply"
    );
}

/// Log idle session eviction
pub fn log_evicted_sessions(count: usize) {
    if count > 0 {
        info!(evicted = count, "Evicted idle funnel sessions");
    } else {
        debug!("No idle funnel sessions to evict");
    }
}
