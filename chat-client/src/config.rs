//! # Application Configuration
//!
//! Process configuration read once from environment variables at startup and
//! treated as immutable afterwards.
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use chat_client::config::{config, init_config, Config};
//!
//! init_config(Config::from_env().expect("valid configuration")).ok();
//! let title = &config().title;
//! ```
//!
//! ## Variables
//!
//! - `CHAT_API_BASE_URL`: identity service base URL
//! - `CHAT_API_TIMEOUT_SECS`: HTTP timeout in seconds
//! - `CHAT_TITLE`: header title on the sign-in screen
//! - `CHAT_LANG`: string table (`en` or `cn`)
//! - `CHAT_WECHAT_OAUTH_APP_ID`: delegated login app id (empty disables the embed)
//! - `CHAT_WECHAT_OAUTH_REDIRECT_URL`: delegated login redirect URI

use std::env;
use std::sync::OnceLock;

use crate::auth::bridge::BridgeParams;
use crate::core::error::{AppError, Result};
use crate::ui::locales::Lang;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8094";
const DEFAULT_TITLE: &str = "ChatNio";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Identity service base URL, without a trailing slash
    pub api_base_url: String,

    /// HTTP timeout for identity service calls
    pub api_timeout_secs: u64,

    /// Header title on the sign-in screen
    pub title: String,

    /// String table for labels and placeholders
    pub lang: Lang,

    /// Delegated login bridge parameters
    pub bridge: BridgeParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout_secs: DEFAULT_TIMEOUT_SECS,
            title: DEFAULT_TITLE.to_string(),
            lang: Lang::En,
            bridge: BridgeParams::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from the process environment, replacing each bad
    /// variable with its default. Returns the errors that were replaced.
    pub fn from_env_or_defaults() -> (Self, Vec<AppError>) {
        Self::from_lookup_or_defaults(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, so tests do not touch the real
    /// environment. Fails on the first bad variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, errors) = Self::from_lookup_or_defaults(lookup);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(config),
        }
    }

    /// Load configuration through `lookup`. A bad variable falls back to its
    /// own default and leaves every other field as read.
    pub fn from_lookup_or_defaults<F>(lookup: F) -> (Self, Vec<AppError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        let api_base_url = lookup("CHAT_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = match check_base_url(&api_base_url) {
            Ok(()) => api_base_url,
            Err(e) => {
                errors.push(e);
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        let api_timeout_secs = match lookup("CHAT_API_TIMEOUT_SECS").map(|raw| parse_timeout(&raw)) {
            Some(Ok(secs)) => secs,
            Some(Err(e)) => {
                errors.push(e);
                DEFAULT_TIMEOUT_SECS
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        let title = lookup("CHAT_TITLE")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let lang = match lookup("CHAT_LANG").map(|raw| raw.parse::<Lang>()) {
            Some(Ok(lang)) => lang,
            Some(Err(e)) => {
                errors.push(e);
                Lang::En
            }
            None => Lang::En,
        };

        let bridge = BridgeParams::new(
            lookup("CHAT_WECHAT_OAUTH_APP_ID").unwrap_or_default(),
            lookup("CHAT_WECHAT_OAUTH_REDIRECT_URL").unwrap_or_default(),
        );

        let config = Self {
            api_base_url,
            api_timeout_secs,
            title,
            lang,
            bridge,
        };
        (config, errors)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        check_base_url(&self.api_base_url)?;
        check_timeout(self.api_timeout_secs)
    }
}

fn check_base_url(url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::Config(
            "CHAT_API_BASE_URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}

fn check_timeout(secs: u64) -> Result<()> {
    if secs == 0 || secs > 300 {
        return Err(AppError::Config(
            "CHAT_API_TIMEOUT_SECS must be between 1 and 300".to_string(),
        ));
    }
    Ok(())
}

fn parse_timeout(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("CHAT_API_TIMEOUT_SECS must be a valid number: {}", e)))?;
    check_timeout(secs)?;
    Ok(secs)
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Returns the rejected value if the configuration was already set.
pub fn init_config(config: Config) -> std::result::Result<(), Config> {
    CONFIG.set(config)
}

/// Access the global configuration, falling back to defaults if
/// [`init_config`] was never called.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
