//! Contact record: one person and every field stored about them.

use crate::domain::{
    validate_address, validate_birthday, validate_email, validate_phone, Address, Birthday,
    ContactName, EmailAddress, PhoneNumber, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at creation. Every mutation validates its input before
/// touching the record, so a rejected value leaves the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    emails: Vec<EmailAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Contact {
    /// Create an empty contact with the given name.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
        }
    }

    /// Create an empty contact, validating the name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    // ==================== Phones ====================

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = validate_phone(phone)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every stored copy of `phone`.
    ///
    /// The input is validated even when nothing matches; removing a number
    /// that is not stored is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = validate_phone(phone)?;
        self.phones.retain(|p| *p != phone);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// Applied as a removal followed by an addition: when `new` is invalid the
    /// old number is already gone and nothing is added in its place.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        self.remove_phone(old)?;
        self.add_phone(new)
    }

    /// Find the first stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Result<Option<&PhoneNumber>, ValidationError> {
        let phone = validate_phone(phone)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    // ==================== Birthday & address ====================

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(validate_birthday(birthday)?);
        Ok(())
    }

    /// Validate and set the address, replacing any previous one.
    pub fn set_address(
        &mut self,
        street: &str,
        city: &str,
        state: &str,
        zip_code: &str,
    ) -> Result<(), ValidationError> {
        self.address = Some(validate_address(street, city, state, zip_code)?);
        Ok(())
    }

    /// Set an already validated address.
    pub fn replace_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    // ==================== Emails ====================

    /// Validate and append an email address. Duplicates are kept.
    pub fn add_email(&mut self, email: &str) -> Result<(), ValidationError> {
        let email = validate_email(email)?;
        self.push_email(email);
        Ok(())
    }

    /// Append an already validated email address.
    pub fn push_email(&mut self, email: EmailAddress) {
        self.emails.push(email);
    }

    /// Remove every stored copy of `email`, validating it first.
    pub fn remove_email(&mut self, email: &str) -> Result<(), ValidationError> {
        let email = validate_email(email)?;
        self.emails.retain(|e| *e != email);
        Ok(())
    }
}

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, emails: {}",
            self.name,
            join(&self.phones, "; "),
            join(&self.emails, "; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", address: {}", address)?;
        }
        Ok(())
    }
}
