//! Form Validation
//!
//! Client-side checks for the login, registration and report forms.
//! A failed check aborts the action before any command runs.

use thiserror::Error;

use crate::item::{ItemType, NewItem};
use crate::user::{display_name_from_email, User};

pub const MIN_PASSWORD_LEN: usize = 6;

/// The only error family on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    /// Report form: type or a required text field left blank
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields | ValidationError::MissingRequiredFields => "Missing Information",
            ValidationError::PasswordMismatch => "Password Mismatch",
            ValidationError::PasswordTooShort { .. } => "Weak Password",
        }
    }

    /// Notification body
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Any non-empty pair is accepted; the name is derived from the email.
    pub fn validate(&self) -> Result<User, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(User::new(display_name_from_email(&self.email), self.email.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checks run in order: missing fields, mismatch, length.
    /// The password is not kept anywhere after this.
    pub fn validate(&self) -> Result<User, ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        Ok(User::new(self.name.clone(), self.email.clone()))
    }
}

/// Report form contents before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub item_type: Option<ItemType>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
}

impl ItemDraft {
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        let item_type = self.item_type.ok_or(ValidationError::MissingRequiredFields)?;
        if self.title.is_empty()
            || self.description.is_empty()
            || self.location.is_empty()
            || self.date.is_empty()
        {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(NewItem {
            item_type,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn register(name: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn draft() -> ItemDraft {
        ItemDraft {
            item_type: Some(ItemType::Lost),
            title: "Wallet".to_string(),
            description: "Brown leather".to_string(),
            location: "Cafeteria".to_string(),
            date: "2026-10-01".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_login_accepts_any_non_empty_pair() {
        let form = LoginForm {
            email: "jane.doe@x.edu".to_string(),
            password: "x".to_string(),
        };
        let user = form.validate().unwrap();
        assert_eq!(user.name, "Jane.doe");
        assert_eq!(user.email, "jane.doe@x.edu");
    }

    #[rstest]
    #[case("", "secret")]
    #[case("a@b.c", "")]
    #[case("", "")]
    fn test_login_missing_fields(#[case] email: &str, #[case] password: &str) {
        let form = LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[rstest]
    #[case(register("", "a@b.c", "secret1", "secret1"), ValidationError::MissingFields)]
    #[case(register("Ann", "", "secret1", "secret1"), ValidationError::MissingFields)]
    #[case(register("Ann", "a@b.c", "", "secret1"), ValidationError::MissingFields)]
    #[case(register("Ann", "a@b.c", "secret1", ""), ValidationError::MissingFields)]
    #[case(register("Ann", "a@b.c", "secret1", "secret2"), ValidationError::PasswordMismatch)]
    #[case(register("Ann", "a@b.c", "abc", "abd"), ValidationError::PasswordMismatch)]
    #[case(register("Ann", "a@b.c", "abc", "abc"), ValidationError::PasswordTooShort { min: 6 })]
    fn test_register_rejections(#[case] form: RegisterForm, #[case] expected: ValidationError) {
        assert_eq!(form.validate(), Err(expected));
    }

    #[test]
    fn test_register_success_uses_entered_name() {
        let user = register("Ann Lee", "ann@x.edu", "secret", "secret").validate().unwrap();
        assert_eq!(user, User::new("Ann Lee", "ann@x.edu"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // six characters, more than six bytes
        assert!(register("A", "a@b.c", "pässwö", "pässwö").validate().is_ok());
    }

    #[test]
    fn test_draft_valid() {
        let item = draft().validate().unwrap();
        assert_eq!(item.item_type, ItemType::Lost);
        assert_eq!(item.title, "Wallet");
        assert!(item.image.is_none());
    }

    #[test]
    fn test_draft_without_type_rejected() {
        let mut d = draft();
        d.item_type = None;
        assert_eq!(d.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_draft_empty_field_rejected() {
        let clears: [fn(&mut ItemDraft); 4] = [
            |d| d.title.clear(),
            |d| d.description.clear(),
            |d| d.location.clear(),
            |d| d.date.clear(),
        ];
        for clear in clears {
            let mut d = draft();
            clear(&mut d);
            assert_eq!(d.validate(), Err(ValidationError::MissingRequiredFields));
        }
    }

    #[test]
    fn test_draft_keeps_image() {
        let mut d = draft();
        d.image = Some("data:image/png;base64,AAAA".to_string());
        assert_eq!(d.validate().unwrap().image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[rstest]
    #[case(ValidationError::MissingFields, "Missing Information", "Please fill in all fields")]
    #[case(ValidationError::MissingRequiredFields, "Missing Information", "Please fill in all required fields")]
    #[case(ValidationError::PasswordMismatch, "Password Mismatch", "Passwords do not match")]
    #[case(ValidationError::PasswordTooShort { min: 6 }, "Weak Password", "Password must be at least 6 characters long")]
    fn test_notification_text(#[case] err: ValidationError, #[case] title: &str, #[case] message: &str) {
        assert_eq!(err.title(), title);
        assert_eq!(err.message(), message);
    }

    #[test]
    fn test_draft_and_auth_forms_word_missing_fields_differently() {
        let mut d = draft();
        d.title.clear();
        let report = d.validate().unwrap_err();
        let login = LoginForm::default().validate().unwrap_err();
        assert_eq!(report.title(), login.title());
        assert_ne!(report.message(), login.message());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::MissingFields.title(), "Missing Information");
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
    }
}
