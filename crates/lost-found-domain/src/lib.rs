//! Lost & Found Domain Layer
//!
//! Contains the entities and rules of the campus board.
//! This layer has NO browser dependencies, so everything here runs under `cargo test`.

mod user;
mod item;
mod catalog;
mod filter;
mod validation;
mod router;

pub use user::{display_name_from_email, User};
pub use item::{Item, ItemType, NewItem};
pub use catalog::seed_catalog;
pub use filter::{count_by_type, filter_items, find_item, TypeFilter};
pub use validation::{ItemDraft, LoginForm, RegisterForm, ValidationError, MIN_PASSWORD_LEN};
pub use router::{Action, AppView, View};
