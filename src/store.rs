//! Global Application State Store
//!
//! Single source of truth for the current screen, the session and the catalog.
//! Screens change only through `store_dispatch`.

use leptos::prelude::*;
use lost_found_domain::{Action, AppView, Item, ValidationError};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current screen; authenticated screens carry the user
    pub view: AppView,
    /// Bumped on every accepted transition
    pub epoch: u64,
    /// Postings shown on the dashboard
    pub catalog: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// A validated form waiting on its command. Remembers the screen it started on.
#[derive(Debug)]
pub struct Pending<T> {
    pub payload: T,
    epoch: u64,
}

/// Run an action through the view router. Returns whether the screen changed;
/// ignored actions do not notify subscribers.
pub fn store_dispatch(store: &AppStore, action: Action) -> bool {
    let field = store.view();
    let current = field.get_untracked();
    let next = current.clone().apply(action);
    if next == current {
        return false;
    }
    *field.write() = next;
    let epoch = store.epoch();
    *epoch.write() += 1;
    true
}

/// Start a submit. A rejected form never touches the store.
pub fn store_begin<T>(store: &AppStore, checked: Result<T, ValidationError>) -> Result<Pending<T>, ValidationError> {
    let payload = checked?;
    Ok(Pending {
        payload,
        epoch: store.epoch().get_untracked(),
    })
}

/// Apply the action a finished command produced, unless the user has left the
/// screen that started it. Returns whether the action was applied.
pub fn store_finish<T>(store: &AppStore, pending: &Pending<T>, action: Action) -> bool {
    if store.epoch().get_untracked() != pending.epoch {
        log::debug!("[store] dropping stale result, screen changed since submit");
        return false;
    }
    store_dispatch(store, action)
}

/// Replace the catalog
pub fn store_set_catalog(store: &AppStore, items: Vec<Item>) {
    let field = store.catalog();
    *field.write() = items;
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use lost_found_domain::{ItemDraft, ItemType, LoginForm, RegisterForm, User};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn jane() -> User {
        User::new("Jane", "jane@x.edu")
    }

    fn store_at(view: AppView) -> AppStore {
        Store::new(AppState {
            view,
            ..Default::default()
        })
    }

    #[test]
    fn test_dispatch_applies_transition() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::Login);

        assert!(store_dispatch(&store, Action::LoggedIn(jane())));
        assert_eq!(store.view().get_untracked(), AppView::Dashboard(jane()));
        assert_eq!(store.epoch().get_untracked(), 1);
    }

    #[test]
    fn test_ignored_action_does_not_notify() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::AddItem(jane()));

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _effect = ImmediateEffect::new(move || {
            let _ = store.view().get();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // header "Report Item" while already reporting
        assert!(!store_dispatch(&store, Action::ReportItem));
        assert!(!store_dispatch(&store, Action::LoggedIn(jane())));

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(store.view().get_untracked(), AppView::AddItem(jane()));
        assert_eq!(store.epoch().get_untracked(), 0);
    }

    #[test]
    fn test_rejected_registration_stays_on_register() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::Register);
        let form = RegisterForm {
            name: "Ann".to_string(),
            email: "ann@x.edu".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
        };

        let started = store_begin(&store, form.validate());
        assert_eq!(started.unwrap_err(), ValidationError::PasswordMismatch);
        assert_eq!(store.view().get_untracked(), AppView::Register);
        assert_eq!(store.epoch().get_untracked(), 0);
    }

    #[test]
    fn test_draft_without_type_stays_on_add_item() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::AddItem(jane()));
        let draft = ItemDraft {
            item_type: None,
            title: "Wallet".to_string(),
            description: "Brown".to_string(),
            location: "Cafeteria".to_string(),
            date: "2026-10-01".to_string(),
            image: None,
        };

        let started = store_begin(&store, draft.validate());
        assert_eq!(started.unwrap_err(), ValidationError::MissingRequiredFields);
        assert_eq!(store.view().get_untracked(), AppView::AddItem(jane()));
    }

    #[test]
    fn test_submit_finishes_back_to_dashboard() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::AddItem(jane()));
        let draft = ItemDraft {
            item_type: Some(ItemType::Found),
            title: "Umbrella".to_string(),
            description: "Green".to_string(),
            location: "Gate 2".to_string(),
            date: "2026-10-01".to_string(),
            image: None,
        };

        let pending = store_begin(&store, draft.validate()).unwrap();
        assert!(store_finish(&store, &pending, Action::BackToDashboard));
        assert_eq!(store.view().get_untracked(), AppView::Dashboard(jane()));
    }

    #[test]
    fn test_login_finishing_after_switch_to_register_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::Login);
        let form = LoginForm {
            email: "jane@x.edu".to_string(),
            password: "pw".to_string(),
        };

        let pending = store_begin(&store, form.validate()).unwrap();
        store_dispatch(&store, Action::ShowRegister);

        let user = pending.payload.clone();
        assert!(!store_finish(&store, &pending, Action::LoggedIn(user)));
        assert_eq!(store.view().get_untracked(), AppView::Register);
    }

    #[test]
    fn test_submit_finishing_in_a_new_report_session_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = store_at(AppView::AddItem(jane()));
        let pending = store_begin(&store, Ok::<(), ValidationError>(())).unwrap();

        // back, then report again before the first submit resolves
        store_dispatch(&store, Action::BackToDashboard);
        store_dispatch(&store, Action::ReportItem);

        assert!(!store_finish(&store, &pending, Action::BackToDashboard));
        assert_eq!(store.view().get_untracked(), AppView::AddItem(jane()));
    }
}
