//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while executing a user command.
///
/// Every variant renders as the exact text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A supplied field failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found.{}", suggestion_hint(.suggestion))]
    ContactNotFound {
        name: String,
        suggestion: Option<String>,
    },

    /// The command was given fewer arguments than it needs
    #[error("Insufficient arguments provided.")]
    InsufficientArguments,

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" Did you mean '{}'?", name),
        None => String::new(),
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid address book document
    #[error("Malformed address book data: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file was written by an incompatible format version
    #[error("Unsupported address book format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::InsufficientArguments;
        assert_eq!(err.to_string(), "Insufficient arguments provided.");

        let err = CommandError::UnknownCommand("fly".to_string());
        assert_eq!(err.to_string(), "Invalid command.");

        let err = CommandError::from(ValidationError::InvalidEmail("x".to_string()));
        assert_eq!(err.to_string(), "Invalid email format.");

        let err = StorageError::UnsupportedVersion {
            found: 7,
            expected: 1,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported address book format version 7 (expected 1)"
        );
    }

    #[test]
    fn test_contact_not_found_with_suggestion() {
        let err = CommandError::ContactNotFound {
            name: "Jon".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Contact not found.");

        let err = CommandError::ContactNotFound {
            name: "Jon".to_string(),
            suggestion: Some("John".to_string()),
        };
        assert_eq!(err.to_string(), "Contact not found. Did you mean 'John'?");
    }
}
