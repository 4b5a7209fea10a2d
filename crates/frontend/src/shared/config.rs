//! Application configuration.
//!
//! The defaults are embedded in the bundle as TOML. The API base URL can be
//! overridden per browser through `localStorage` (key [`API_BASE_STORAGE_KEY`]),
//! which is handy for pointing a deployed build at a local mock.

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_categories_path() -> String {
    "/products/category-list".to_string()
}

fn default_page_size() -> usize {
    9
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://dummyjson.com"
categories_path = "/products/category-list"
page_size = 9

[logging]
level = "debug"
"#;

pub const API_BASE_STORAGE_KEY: &str = "catalog_api_base";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("page_size must be greater than zero")]
    ZeroPageSize,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        if config.api.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api.base_url = trimmed.to_string();
        }
        self
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }

    /// Full URL for an API path (path must start with `/`)
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // DEFAULT_CONFIG покрыт тестом ниже
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            api: ApiConfig {
                base_url: "https://dummyjson.com".to_string(),
                categories_path: default_categories_path(),
                page_size: default_page_size(),
            },
            logging: LoggingConfig::default(),
        })
    }
}

fn load_base_url_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
}

/// Load configuration.
///
/// Search order:
/// 1. Embedded default config
/// 2. `localStorage` override of `api.base_url`
pub fn load_config() -> AppConfig {
    // Вызывается до инициализации логгера, поэтому без log::
    let config = AppConfig::default();
    match load_base_url_from_storage() {
        Some(base_url) => config.with_base_url(&base_url),
        None => config,
    }
}
