//! Contact records and the address book that holds them.

pub mod address_book;
pub mod contact;

pub use address_book::AddressBook;
pub use contact::Contact;
