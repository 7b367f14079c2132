//! Auth Commands
//!
//! Login and registration. Any well-formed request is accepted.

use lost_found_domain::{LoginForm, RegisterForm, User};
use serde::Serialize;

use super::{encode, simulate_latency, CommandError, CommandResult};

// ========================
// Request Structs
// ========================

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

// ========================
// Commands
// ========================

pub async fn login(form: &LoginForm, delay_ms: u32) -> CommandResult<User> {
    let body = encode(&LoginRequest {
        email: &form.email,
        password: &form.password,
    })?;
    log::debug!("[cmd] login request: {} bytes", body.len());
    simulate_latency("login", delay_ms).await;

    let user = form.validate().map_err(|e| CommandError::Rejected(e.to_string()))?;
    log::info!("[cmd] login ok for {}", user.email);
    Ok(user)
}

pub async fn register(form: &RegisterForm, delay_ms: u32) -> CommandResult<User> {
    let body = encode(&RegisterRequest {
        name: &form.name,
        email: &form.email,
        password: &form.password,
    })?;
    log::debug!("[cmd] register request: {} bytes", body.len());
    simulate_latency("register", delay_ms).await;

    let user = form.validate().map_err(|e| CommandError::Rejected(e.to_string()))?;
    log::info!("[cmd] registered {}", user.email);
    Ok(user)
}
