use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    InvalidRole,
    ValidationError,
    Storage,
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidRole => write!(f, "InvalidRole"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error shared by the session layer, config loading and forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn invalid_role(value: &str) -> Self {
        Self {
            kind: AppErrorKind::InvalidRole,
            message: format!("unknown role `{value}`"),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Storage,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Message for a single form field, if validation flagged it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Недопустимое значение поля {field}"));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_role_mentions_value() {
        let err = AppError::invalid_role("dean");
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert!(err.message.contains("dean"));
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_exposes_fields() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("invalid format"));
        assert_eq!(err.field("password"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::storage("quota exceeded");
        assert_eq!(format!("{}", err), "Storage: quota exceeded");
    }

    #[cfg(feature = "validation")]
    #[test]
    fn validation_errors_keep_first_message_per_field() {
        let mut errors = validator::ValidationErrors::new();
        let mut email = validator::ValidationError::new("email");
        email.message = Some("bad email".into());
        errors.add("email", email);
        errors.add("email", validator::ValidationError::new("length"));
        errors.add("password", validator::ValidationError::new("length"));

        let err = AppError::from(errors);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("bad email"));
        assert!(err.field("password").is_some_and(|m| m.contains("password")));
    }

    #[test]
    fn field_errors_skipped_when_empty() {
        let json = serde_json::to_string(&AppError::config("bad toml")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
