//! Runtime configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CALC_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "CALC_STATIC_DIR";
pub const LOGIN_PASSWORD_VAR: &str = "CALC_LOGIN_PASSWORD";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOGIN_PASSWORD: &str = "password";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid CALC_BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Password accepted by the token endpoint for any username
    pub login_password: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names; unset keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind, source })?;

        Ok(Self {
            bind_addr,
            static_dir: lookup(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            login_password: lookup(LOGIN_PASSWORD_VAR)
                .unwrap_or_else(|| DEFAULT_LOGIN_PASSWORD.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            login_password: DEFAULT_LOGIN_PASSWORD.to_string(),
        }
    }
}
