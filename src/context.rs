//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use lost_found_domain::Action;

use crate::config::AppConfig;
use crate::store::{store_dispatch, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Move the view router
    pub fn dispatch(&self, action: Action) {
        store_dispatch(&self.store, action);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
