//! Domain value objects and field validators.
//!
//! Every field a contact can carry is a type-safe wrapper that can only be
//! built through validation, so invalid data never reaches the address book.
//! The `validate_*` functions are the entry points used by the contact model
//! and by the command layer.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use email::EmailAddress;
pub use errors::{AddressField, ValidationError};
pub use name::ContactName;
pub use phone::PhoneNumber;

/// Validate a phone number of exactly ten digits.
pub fn validate_phone(value: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(value)
}

/// Validate a `DD.MM.YYYY` birthday.
pub fn validate_birthday(value: &str) -> Result<Birthday, ValidationError> {
    Birthday::parse(value)
}

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<EmailAddress, ValidationError> {
    EmailAddress::new(value)
}

/// Validate a postal address, sub-field by sub-field.
pub fn validate_address(
    street: &str,
    city: &str,
    state: &str,
    zip_code: &str,
) -> Result<Address, ValidationError> {
    Address::new(street, city, state, zip_code)
}
