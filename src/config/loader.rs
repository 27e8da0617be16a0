//! Configuration loading from the environment.

use std::ffi::OsString;
use std::num::ParseIntError;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Variable holding the bind host.
pub const BIND_HOST_VAR: &str = "BACKEND_BIND_HOST";

/// Variable holding the bind port.
pub const PORT_VAR: &str = "BACKEND_PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BACKEND_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} is not valid UTF-8: {value:?}")]
    NotUnicode { var: &'static str, value: OsString },
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to [`ServerConfig::default`]. A set but
    /// non-UTF-8 variable is an error, never a fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let defaults = Self::default();

        let bind_host = read_var(&lookup, BIND_HOST_VAR)?.unwrap_or(defaults.bind_host);
        let port = match read_var(&lookup, PORT_VAR)? {
            Some(value) => parse_port(value)?,
            None => defaults.port,
        };

        Ok(Self { bind_host, port })
    }
}

fn read_var<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    match lookup(var) {
        Some(raw) => raw
            .into_string()
            .map(Some)
            .map_err(|value| ConfigError::NotUnicode { var, value }),
        None => Ok(None),
    }
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    // Surrounding whitespace is tolerated, anything else is not.
    match value.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(source) => Err(ConfigError::InvalidPort { value, source }),
    }
}
