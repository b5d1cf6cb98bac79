//! Domain validation errors.

use std::fmt;

/// Address sub-fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    City,
    State,
    ZipCode,
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zip code",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during domain value object validation.
///
/// The `Display` output of every variant is meant to be shown to the user
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is blank.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidDateFormat(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// One of the address sub-fields failed validation.
    InvalidAddressField {
        field: AddressField,
        message: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn address(field: AddressField, message: &'static str) -> Self {
        Self::InvalidAddressField { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits long."),
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::InvalidEmail(_) => write!(f, "Invalid email format."),
            Self::InvalidAddressField { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}
