//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box
//! (pointing at a local store instance until a real one is configured).

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the hosted record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store (e.g. `https://xyz.supabase.co`).
    #[serde(default = "default_store_url")]
    pub url: String,
    /// API key sent as both the `apikey` header and the bearer token.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_store_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            date_format: default_date_format(),
        }
    }
}

/// Client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Re-fetch a page's data every time it is navigated to.
    #[serde(default = "default_true")]
    pub refresh_on_navigate: bool,
    /// Re-issue the active page's fetch this often. 0 disables.
    #[serde(default)]
    pub auto_refresh_secs: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            refresh_on_navigate: true,
            auto_refresh_secs: 0,
        }
    }
}

/// Diagnostic logging settings. Logs go to a file; the terminal owns stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_store_url() -> String {
    "http://localhost:54321".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%m/%d %H:%M".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crmdash/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
