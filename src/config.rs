//! Runtime Configuration
//!
//! Read once at startup from an optional `<script id="app-config" type="application/json">`
//! block in the host page. Missing fields keep their defaults.

use serde::Deserialize;

/// Element holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated login latency
    pub login_delay_ms: u32,
    /// Simulated registration latency
    pub register_delay_ms: u32,
    /// Simulated item submission latency
    pub submit_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    pub campus_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            register_delay_ms: 1000,
            submit_delay_ms: 2000,
            toast_duration_ms: 5000,
            log_level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
            campus_name: "SRM Easwari Engineering College".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load overrides from the host page. Returns defaults plus the parse
    /// error, if any, so the caller can report it once logging is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|t| !t.trim().is_empty());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
