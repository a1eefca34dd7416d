use std::env;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the notes REST API (e.g. "https://notes.example.com/api").
    pub const API_BASE_URL: &str = "NOTES_API_BASE_URL";
    pub const HOST: &str = "NOTES_CLIENT_HOST";
    pub const PORT: &str = "NOTES_CLIENT_PORT";
    /// Per-request timeout for calls to the notes API, in seconds.
    pub const API_TIMEOUT_SECS: &str = "NOTES_API_TIMEOUT_SECS";
}

/// Default values
pub mod defaults {
    pub const API_BASE_URL: &str = "http://localhost:5000/api";
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 9110;
    pub const API_TIMEOUT_SECS: u64 = 30;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup(env_vars::API_BASE_URL)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::API_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let host = lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string());

        let port = lookup(env_vars::PORT)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::PORT);

        let timeout_secs = lookup(env_vars::API_TIMEOUT_SECS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::API_TIMEOUT_SECS);

        Self {
            api_base_url,
            host,
            port,
            api_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
