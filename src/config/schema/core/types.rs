use super::super::{ChatConfig, HttpConfig, SessionConfig, StorageConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locales with a translation file under `locales/`.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml - computed from home, not serialized
    #[serde(skip)]
    pub home_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Base URL of the portfolio backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// "en" | "fr"
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_api_url() -> String {
    "http://localhost:8000".into()
}

fn default_locale() -> String {
    "en".into()
}

impl Default for Config {
    fn default() -> Self {
        let home = UserDirs::new()
            .map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let cvchat_dir = home.join(".cvchat");

        Self {
            config_path: cvchat_dir.join("config.toml"),
            home_dir: cvchat_dir,
            api_url: default_api_url(),
            locale: default_locale(),
            session: SessionConfig::default(),
            chat: ChatConfig::default(),
            http: HttpConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Where the session record and message log live.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage
            .dir
            .clone()
            .unwrap_or_else(|| self.home_dir.join("storage"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.api_url).map_err(|error| {
            ConfigError::Validation(format!(
                "api_url {:?} is not a valid URL: {error}",
                self.api_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "api_url must use http or https, got {:?}",
                url.scheme()
            )));
        }

        if self.session.max_questions == 0 {
            return Err(ConfigError::Validation(
                "session.max_questions must be at least 1".into(),
            ));
        }

        if self.chat.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "chat.poll_interval_secs must be at least 1".into(),
            ));
        }

        if self.chat.max_message_chars == 0 {
            return Err(ConfigError::Validation(
                "chat.max_message_chars must be at least 1".into(),
            ));
        }

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::Validation(format!(
                "locale {:?} is not one of {}",
                self.locale,
                SUPPORTED_LOCALES.join(", ")
            )));
        }

        Ok(())
    }
}
