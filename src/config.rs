//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::birthdays::YearAnchor;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the saved address book (default: "addressbook.json")
    pub data_file: PathBuf,

    /// Year the birthday report evaluates birthdays in (default: stored)
    pub birthday_anchor: YearAnchor,

    /// Maximum number of search results to show (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 60)
    pub match_confidence_threshold: u8,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the data file (default: addressbook.json)
    /// - `BIRTHDAY_YEAR_ANCHOR`: `stored` or `current` (default: stored)
    /// - `MAX_MATCH_RESULTS`: Max search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min fuzzy score (default: 60)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.data_file,
        };

        let birthday_anchor = match env::var("BIRTHDAY_YEAR_ANCHOR") {
            Ok(val) => val
                .parse::<YearAnchor>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_YEAR_ANCHOR".to_string(),
                    reason,
                })?,
            Err(_) => defaults.birthday_anchor,
        };

        let max_match_results =
            Self::parse_env_usize("MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold = Self::parse_env_u8(
            "MATCH_CONFIDENCE_THRESHOLD",
            defaults.match_confidence_threshold,
        )?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_file,
            birthday_anchor,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("addressbook.json"),
            birthday_anchor: YearAnchor::Stored,
            max_match_results: 5,
            match_confidence_threshold: 60,
            log_level: "warn".to_string(),
        }
    }
}
