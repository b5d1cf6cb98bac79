//! Address value object.

use super::errors::{AddressField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

static CITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Failed to compile city regex"));
static STATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("Failed to compile state regex"));
static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(?:[-\s][0-9]{4})?$").expect("Failed to compile zip regex"));

/// A US-style postal address.
///
/// Every sub-field is validated on construction, in the order street, city,
/// state, zip code; the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Validate the four sub-fields and build an address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddressField` naming the first
    /// offending sub-field.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let street = street.into();
        let city = city.into();
        let state = state.into();
        let zip_code = zip_code.into();

        if street.trim().is_empty() {
            return Err(ValidationError::address(
                AddressField::Street,
                "Street cannot be empty.",
            ));
        }

        if !CITY_REGEX.is_match(&city) {
            return Err(ValidationError::address(
                AddressField::City,
                "City must contain only letters and spaces.",
            ));
        }
        if city.trim().is_empty() {
            return Err(ValidationError::address(
                AddressField::City,
                "City cannot be empty.",
            ));
        }

        if !STATE_REGEX.is_match(&state) {
            return Err(ValidationError::address(
                AddressField::State,
                "State must be a valid 2-letter state code.",
            ));
        }

        if !ZIP_REGEX.is_match(&zip_code) {
            return Err(ValidationError::address(
                AddressField::ZipCode,
                "Zip code must be in the format '12345' or '12345-6789'.",
            ));
        }

        Ok(Self {
            street,
            city,
            state,
            zip_code,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

/// Unvalidated wire shape, routed through [`Address::new`] on load.
#[derive(Deserialize)]
struct RawAddress {
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAddress::deserialize(deserializer)?;
        Address::new(raw.street, raw.city, raw.state, raw.zip_code)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}
