//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `PORT` value is not a valid TCP port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub redirect_all_to: Option<String>,
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `REDIRECT_ALL_TO`: when set, every page request is answered with a
    ///   temporary redirect to this URL (the API surface stays local)
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but does not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let redirect_all_to = normalize_redirect(std::env::var("REDIRECT_ALL_TO").ok());

        Ok(Self { port, redirect_all_to })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}

fn normalize_redirect(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
