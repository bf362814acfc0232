use serde::{Deserialize, Serialize};

use crate::AppError;

/// Which browser store backs the persisted session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// `localStorage`, survives browser restarts.
    #[default]
    Local,
    /// `sessionStorage`, cleared when the tab closes.
    Session,
    /// Nothing is persisted; every start is logged out.
    None,
}

/// Log verbosity accepted in `config.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn default_title() -> String {
    "IITU Digital".to_string()
}

/// The `[portal]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            storage: StorageKind::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub portal: PortalSettings,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))
    }

    /// Parse `contents`, falling back to defaults. The parse error is handed
    /// back so the caller can log it once logging is configured.
    pub fn from_toml_or_default(contents: &str) -> (Self, Option<AppError>) {
        match Self::from_toml_str(contents) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.portal.title, "IITU Digital");
        assert_eq!(config.portal.storage, StorageKind::Local);
        assert_eq!(config.portal.log_level, LogLevel::Warn);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [portal]
            storage = "session"
            "#,
        )
        .unwrap();
        assert_eq!(config.portal.storage, StorageKind::Session);
        assert_eq!(config.portal.title, "IITU Digital");
        assert_eq!(config.portal.log_level, LogLevel::Warn);
    }

    #[test]
    fn deserialize_full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [portal]
            title = "Demo Portal"
            storage = "none"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.portal.title, "Demo Portal");
        assert_eq!(config.portal.storage, StorageKind::None);
        assert_eq!(config.portal.log_level, LogLevel::Debug);
    }

    #[test]
    fn unknown_storage_kind_is_a_config_error() {
        let err = AppConfig::from_toml_str(
            r#"
            [portal]
            storage = "cookie"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Config);
    }

    #[test]
    fn fallback_returns_defaults_and_error() {
        let (config, err) = AppConfig::from_toml_or_default("[portal\nbroken");
        assert_eq!(config, AppConfig::default());
        assert!(err.is_some());

        let (_, err) = AppConfig::from_toml_or_default("");
        assert!(err.is_none());
    }

    #[test]
    fn workspace_config_file_parses() {
        let config = AppConfig::from_toml_str(include_str!("../../../config.toml")).unwrap();
        assert_eq!(config.portal.storage, StorageKind::Local);
    }

    #[test]
    fn log_level_strings() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::default().as_str(), "warn");
    }
}
