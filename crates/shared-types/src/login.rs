#[cfg(feature = "validation")]
use validator::Validate;

use crate::Role;
#[cfg(feature = "validation")]
use crate::AppError;

/// Password every demo account is prefilled with.
pub const DEMO_PASSWORD: &str = "password123";

/// Contents of the login form. Credentials are only shape-checked; any
/// well-formed pair signs in with the selected role.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginForm {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Введите корректный email"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Пароль должен содержать минимум 6 символов"))
    )]
    pub password: String,
}

impl LoginForm {
    /// Demo credentials for `role`.
    pub fn prefilled(role: Role) -> Self {
        Self {
            email: role.demo_email().to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }

    /// Run the field rules, collecting one message per failing field.
    #[cfg(feature = "validation")]
    pub fn check(&self) -> Result<(), AppError> {
        let trimmed = LoginForm {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        trimmed.check().map_err(AppError::from)
    }
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use crate::{AppErrorKind, ALL_ROLES};

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn prefilled_forms_are_valid() {
        for role in ALL_ROLES {
            assert!(LoginForm::prefilled(*role).check().is_ok());
        }
    }

    #[test]
    fn bad_email_is_flagged() {
        for email in ["", "plain", "@iitu.edu.kz", "a@", "a@.kz", "a b@iitu.kz", "a@@b.kz"] {
            let err = form(email, "secret1").check().unwrap_err();
            assert_eq!(err.kind, AppErrorKind::ValidationError);
            assert!(err.field("email").is_some(), "{email}");
            assert!(err.field("password").is_none());
        }
    }

    #[test]
    fn malformed_domains_and_locals_are_flagged() {
        for email in ["a@b..c", "a@-.x", "a,b@c.d", "a@b.c!"] {
            let err = form(email, "password123").check().unwrap_err();
            assert!(err.field("email").is_some(), "{email} was accepted");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(form("  student@iitu.edu.kz ", "password123").check().is_ok());
    }

    #[test]
    fn short_password_is_flagged() {
        let err = form("x@iitu.edu.kz", "12345").check().unwrap_err();
        assert_eq!(
            err.field("password"),
            Some("Пароль должен содержать минимум 6 символов")
        );
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(form("x@iitu.edu.kz", "пароль").check().is_ok());
    }

    #[test]
    fn both_fields_reported_together() {
        let err = form("nope", "1").check().unwrap_err();
        assert_eq!(err.field_errors.len(), 2);
    }
}
