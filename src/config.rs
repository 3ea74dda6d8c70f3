//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the remote authentication API; `None` disables the proxy.
    pub auth_api_url: Option<String>,
    pub auth_api_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_URL`: upstream auth API; trailing `/` trimmed, empty means unset
    /// - `AUTH_API_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set to something other than a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            auth_api_url: parse_base_url(std::env::var("AUTH_API_URL").ok().as_deref()),
            auth_api_timeout_secs: env_parse_u64("AUTH_API_TIMEOUT_SECS", DEFAULT_AUTH_API_TIMEOUT_SECS),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Option<String> {
    let url = raw?.trim().trim_end_matches('/');
    if url.is_empty() { None } else { Some(url.to_owned()) }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
