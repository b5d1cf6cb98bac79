//! Contact Book - a command-line address book with birthday reminders.
//!
//! Contacts carry a name, phone numbers, emails, an optional birthday and an
//! optional postal address. Every field is validated on the way in, and the
//! whole book is saved to a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone, email, birthday, address, name)
//! - **models**: The contact record and the address book
//! - **birthdays**: The upcoming birthday report
//! - **matching**: Phone/email lookup and fuzzy name matching
//! - **repositories**: Loading and saving the address book
//! - **commands**: Command parsing and handlers
//! - **session**: The interactive read-eval-print loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types for commands, storage and configuration

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod session;

pub use birthdays::{upcoming_birthdays, GreetingDay, UpcomingBirthdays, YearAnchor};
pub use commands::{execute, execute_line, Command, CommandContext, Outcome};
pub use config::Config;
pub use domain::ValidationError;
pub use error::{CommandError, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::{AddressBook, Contact};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use session::Session;
