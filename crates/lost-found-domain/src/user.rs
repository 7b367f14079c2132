//! Session User
//!
//! The identity held in memory while someone is "logged in".

use serde::{Deserialize, Serialize};

/// Logged-in identity. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Display name used for demo logins: the local part of the address with
/// its first character uppercased. `"jane.doe@x.edu"` becomes `"Jane.doe"`.
///
/// Placeholder for real profile data.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_capitalizes_local_part() {
        assert_eq!(display_name_from_email("jane.doe@x.edu"), "Jane.doe");
        assert_eq!(display_name_from_email("bob@college.edu"), "Bob");
    }

    #[test]
    fn test_display_name_without_at_sign() {
        assert_eq!(display_name_from_email("alice"), "Alice");
    }

    #[test]
    fn test_display_name_keeps_rest_untouched() {
        assert_eq!(display_name_from_email("mARY@x.edu"), "MARY");
        assert_eq!(display_name_from_email("1st@x.edu"), "1st");
    }

    #[test]
    fn test_display_name_empty_local_part() {
        assert_eq!(display_name_from_email("@x.edu"), "");
        assert_eq!(display_name_from_email(""), "");
    }
}
