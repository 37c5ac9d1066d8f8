// src/core/config.rs
use std::env;
use thiserror::Error;

use crate::generators::minimum_length;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Default password length {length} is below the minimum of {minimum}")]
    DefaultLengthTooShort { length: usize, minimum: usize },

    #[error("Default password length {length} exceeds the maximum of {maximum}")]
    DefaultLengthTooLong { length: usize, maximum: usize },
}

// Configuration for password generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_password_length: usize,
    pub default_include_symbols: bool,
    pub max_password_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 12,
            default_include_symbols: true,
            max_password_length: 128,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_INCLUDE_SYMBOLS") {
            match val.trim().to_lowercase().parse() {
                Ok(include) => config.default_include_symbols = include,
                Err(_) => log::warn!(
                    "Ignoring invalid DEFAULT_PASSWORD_INCLUDE_SYMBOLS '{}'",
                    val
                ),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(max) => config.max_password_length = max,
                Err(_) => log::warn!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val),
            }
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let minimum = minimum_length(self.default_include_symbols);
        if self.default_password_length < minimum {
            return Err(ConfigError::DefaultLengthTooShort {
                length: self.default_password_length,
                minimum,
            });
        }
        if self.default_password_length > self.max_password_length {
            return Err(ConfigError::DefaultLengthTooLong {
                length: self.default_password_length,
                maximum: self.max_password_length,
            });
        }
        Ok(())
    }
}
