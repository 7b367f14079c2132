//! Campus Lost & Found Frontend Entry Point

mod config;
mod commands;
mod preview;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::{AppConfig, CONFIG_ELEMENT_ID};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring invalid #{} block: {}", CONFIG_ELEMENT_ID, e);
    }
    log::info!("[APP] Campus Lost & Found starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
