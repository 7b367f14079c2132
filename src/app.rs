//! Campus Lost & Found App
//!
//! Root component: provides the app context and toaster, then renders
//! exactly one screen for the current view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{provide_toaster, ToastViewport};
use lost_found_domain::AppView;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AddItemForm, Dashboard, LoginScreen, RegisterScreen};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_set_catalog, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(AppContext::new(store, config.clone()));
    provide_toaster(config.toast_duration_ms);

    // Load catalog on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_items().await {
                Ok(items) => store_set_catalog(&store, items),
                Err(e) => log::error!("[APP] Failed to load items: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        log::info!("[APP] View: {}", store.view().read().kind());
    });

    view! {
        <div class="app">
            {move || match store.view().get() {
                AppView::Login => view! { <LoginScreen /> }.into_any(),
                AppView::Register => view! { <RegisterScreen /> }.into_any(),
                AppView::Dashboard(user) => view! { <Dashboard user=user /> }.into_any(),
                AppView::AddItem(user) => view! { <AddItemForm user=user /> }.into_any(),
            }}
            <ToastViewport />
        </div>
    }
}
