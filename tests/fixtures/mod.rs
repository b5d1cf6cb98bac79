//! Test fixtures and sample data.
//!
//! Dates are chosen around Wednesday 15 May 2024 (ISO week 20).

use chrono::NaiveDate;
use contact_book::{AddressBook, CommandContext, Contact};

/// Wednesday, 15 May 2024.
#[allow(dead_code)]
pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

/// Command context with default settings on [`wednesday`].
#[allow(dead_code)]
pub fn context() -> CommandContext {
    CommandContext::new(wednesday())
}

/// Create a contact with a phone number.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phone: &str) -> Contact {
    let mut contact = Contact::named(name).unwrap();
    contact.add_phone(phone).unwrap();
    contact
}

/// Create a contact with a birthday and nothing else.
#[allow(dead_code)]
pub fn contact_born(name: &str, birthday: &str) -> Contact {
    let mut contact = Contact::named(name).unwrap();
    contact.set_birthday(birthday).unwrap();
    contact
}

/// An address book of contacts with birthdays.
#[allow(dead_code)]
pub fn birthday_book(entries: &[(&str, &str)]) -> AddressBook {
    AddressBook::from_contacts(
        entries
            .iter()
            .map(|(name, birthday)| contact_born(name, birthday)),
    )
}

/// A fully populated contact.
#[allow(dead_code)]
pub fn full_contact(name: &str) -> Contact {
    let mut contact = sample_contact(name, "1234567890");
    contact.add_phone("5555555555").unwrap();
    contact
        .add_email(&format!("{}@example.com", name.to_lowercase()))
        .unwrap();
    contact.set_birthday("29.02.2000").unwrap();
    contact
        .set_address("Main", "New York", "NY", "10001-0001")
        .unwrap();
    contact
}
