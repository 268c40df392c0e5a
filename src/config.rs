//! Process configuration read from the environment.
//!
//! `.env` is loaded first (when present) so local runs and deployments share
//! the same variable names.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Ok(Self { port: parse_port(std::env::var("PORT").ok().as_deref())? })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_owned(),
            source,
        }),
    }
}
