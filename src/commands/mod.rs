//! Backend Command Wrappers
//!
//! Async stand-ins for the calls a real backend would serve, organized by domain.
//! Each one encodes its request, waits a configured delay and then answers.

mod auth;
mod item;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Failed to encode request: {0}")]
    Serialization(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

fn encode<T: Serialize>(request: &T) -> CommandResult<String> {
    serde_json::to_string(request).map_err(|e| CommandError::Serialization(e.to_string()))
}

async fn simulate_latency(cmd: &str, delay_ms: u32) {
    log::info!("[cmd] {} (simulated, {}ms)", cmd, delay_ms);
    TimeoutFuture::new(delay_ms).await;
}

// Re-export all public items
pub use auth::*;
pub use item::*;
