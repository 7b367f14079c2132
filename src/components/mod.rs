//! UI Components
//!
//! Screens and the reusable pieces they are built from.

mod header;
mod auth_card;
mod item_card;
mod filter_bar;
mod type_selector;
mod photo_picker;
mod login_screen;
mod register_screen;
mod dashboard;
mod add_item_form;

pub use header::Header;
pub use auth_card::AuthCard;
pub use item_card::ItemCard;
pub use filter_bar::FilterBar;
pub use type_selector::TypeSelector;
pub use photo_picker::PhotoPicker;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use dashboard::Dashboard;
pub use add_item_form::AddItemForm;
