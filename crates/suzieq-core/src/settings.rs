//! Runtime settings read from the process environment.
//!
//! Empty variables are treated the same as unset ones, so a deployment can
//! leave a key blank to switch an integration off.

use std::net::{IpAddr, SocketAddr};

use url::Url;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Default brain endpoint.
pub const DEFAULT_BRAIN_URL: &str = "https://suzie-q-brain.onrender.com/analyze";

/// Path of the Telegram webhook route.
pub const TELEGRAM_WEBHOOK_PATH: &str = "/telegram/webhook";

/// Path of the Slack Events API route.
pub const SLACK_EVENTS_PATH: &str = "/slack/events";

/// Environment variable names.
pub mod env_keys {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";
    pub const BRAIN_URL: &str = "BRAIN_URL";
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    pub const SUPABASE_SERVICE_KEY: &str = "SUPABASE_SERVICE_KEY";
    pub const SLACK_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
    pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    pub const CEO_SLACK_CHANNEL_ID: &str = "CEO_SLACK_CHANNEL_ID";
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address to bind the HTTP server to.
    pub host: IpAddr,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Externally visible base URL, e.g. `https://suzie-q-office.onrender.com`.
    pub public_base_url: Option<String>,
    /// Brain endpoint receiving `{"context": ...}`.
    pub brain_url: String,
    /// Supabase project URL without trailing slash. `None` disables memory.
    pub supabase_url: Option<String>,
    /// Supabase service role key.
    pub supabase_service_key: String,
    /// Slack bot token. `None` disables Slack posting.
    pub slack_bot_token: Option<String>,
    /// Telegram bot token. `None` disables Telegram replies.
    pub telegram_bot_token: Option<String>,
    /// Slack channel receiving the daily report.
    pub ceo_slack_channel: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            public_base_url: None,
            brain_url: DEFAULT_BRAIN_URL.to_string(),
            supabase_url: None,
            supabase_service_key: String::new(),
            slack_bot_token: None,
            telegram_bot_token: None,
            ceo_slack_channel: None,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = match get(env_keys::HOST) {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidHost(raw))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| SettingsError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let port = match get(env_keys::PORT) {
            Some(raw) => match raw.parse::<u16>() {
                Ok(p) if p != 0 => p,
                _ => return Err(SettingsError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let brain_url = get(env_keys::BRAIN_URL).unwrap_or_else(|| DEFAULT_BRAIN_URL.to_string());
        validate_url(env_keys::BRAIN_URL, &brain_url)?;

        let supabase_url = get(env_keys::SUPABASE_URL)
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        if let Some(ref url) = supabase_url {
            validate_url(env_keys::SUPABASE_URL, url)?;
        }

        let public_base_url = get(env_keys::PUBLIC_BASE_URL)
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        if let Some(ref url) = public_base_url {
            validate_url(env_keys::PUBLIC_BASE_URL, url)?;
        }

        Ok(Self {
            host,
            port,
            public_base_url,
            brain_url,
            supabase_url,
            supabase_service_key: get(env_keys::SUPABASE_SERVICE_KEY).unwrap_or_default(),
            slack_bot_token: get(env_keys::SLACK_BOT_TOKEN),
            telegram_bot_token: get(env_keys::TELEGRAM_BOT_TOKEN),
            ceo_slack_channel: get(env_keys::CEO_SLACK_CHANNEL_ID),
        })
    }

    /// Socket address the server binds to.
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Absolute URL of a route, when a public base URL is configured.
    pub fn public_url(&self, path: &str) -> Option<String> {
        self.public_base_url
            .as_ref()
            .map(|base| format!("{base}/{}", path.trim_start_matches('/')))
    }

    /// Absolute Telegram webhook URL to register with `setWebhook`.
    pub fn telegram_webhook_url(&self) -> Option<String> {
        self.public_url(TELEGRAM_WEBHOOK_PATH)
    }
}

fn validate_url(key: &'static str, value: &str) -> Result<(), SettingsError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(SettingsError::InvalidUrl {
            key,
            value: value.to_string(),
        }),
    }
}
