//! View Router
//!
//! Which top-level screen is shown, and who is logged in.
//! Authenticated screens carry the `User`, so a dashboard without a session
//! cannot be constructed.

use std::fmt;

use crate::user::User;

/// Screen kind, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Dashboard,
    AddItem,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Register => "register",
            View::Dashboard => "dashboard",
            View::AddItem => "add-item",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current screen plus session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Login,
    Register,
    Dashboard(User),
    AddItem(User),
}

/// User intents that move between screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoggedIn(User),
    Registered(User),
    ShowRegister,
    ShowLogin,
    ReportItem,
    BackToDashboard,
    Logout,
}

impl AppView {
    pub fn kind(&self) -> View {
        match self {
            AppView::Login => View::Login,
            AppView::Register => View::Register,
            AppView::Dashboard(_) => View::Dashboard,
            AppView::AddItem(_) => View::AddItem,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AppView::Dashboard(user) | AppView::AddItem(user) => Some(user),
            AppView::Login | AppView::Register => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Apply one action. Actions that make no sense for the current screen
    /// leave it unchanged.
    pub fn apply(self, action: Action) -> AppView {
        let from = self.kind();
        let next = match (self, action) {
            (AppView::Login, Action::LoggedIn(user)) => AppView::Dashboard(user),
            (AppView::Login, Action::ShowRegister) => AppView::Register,
            (AppView::Register, Action::Registered(user)) => AppView::Dashboard(user),
            (AppView::Register, Action::ShowLogin) => AppView::Login,
            (AppView::Dashboard(user), Action::ReportItem) => AppView::AddItem(user),
            (AppView::AddItem(user), Action::BackToDashboard) => AppView::Dashboard(user),
            (AppView::Dashboard(_) | AppView::AddItem(_), Action::Logout) => AppView::Login,
            (current, action) => {
                log::debug!("[router] ignored {:?} in {}", action_name(&action), from);
                return current;
            }
        };
        log::debug!("[router] {} -> {}", from, next.kind());
        next
    }
}

// Keeps user details out of logs
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::LoggedIn(_) => "LoggedIn",
        Action::Registered(_) => "Registered",
        Action::ShowRegister => "ShowRegister",
        Action::ShowLogin => "ShowLogin",
        Action::ReportItem => "ReportItem",
        Action::BackToDashboard => "BackToDashboard",
        Action::Logout => "Logout",
    }
}
