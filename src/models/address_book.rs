//! The address book: every contact, keyed by name, in insertion order.

use crate::birthdays::{upcoming_birthdays, UpcomingBirthdays, YearAnchor};
use crate::models::Contact;
use chrono::NaiveDate;

/// In-memory collection of contacts.
///
/// Names are unique. Adding a contact under an existing name replaces the
/// stored record in place, so listing order is the order names were first
/// added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from contacts in order; later duplicates win.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut book = Self::new();
        for contact in contacts {
            book.add(contact);
        }
        book
    }

    /// Insert a contact, overwriting any contact with the same name.
    pub fn add(&mut self, contact: Contact) {
        match self.position(contact.name().as_str()) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name().as_str() == name)
    }

    /// Remove the contact with this name, if any.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|index| self.contacts.remove(index))
    }

    /// All contacts in insertion order.
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Birthday greetings due this week and next, relative to `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, anchor: YearAnchor) -> UpcomingBirthdays {
        upcoming_birthdays(self, today, anchor)
    }

    /// Index of the contact with this name in insertion order.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name().as_str() == name)
    }

    /// The contact at an index returned by [`Self::position`].
    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Contact {
        &mut self.contacts[index]
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
