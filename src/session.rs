//! Interactive session: the read-eval-print loop around the address book.
//!
//! The session owns the address book for its whole lifetime. It is loaded
//! from the repository when the session opens and saved back when the user
//! exits or input ends.

use crate::commands::{execute_line, CommandContext, Outcome};
use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// A running contact book session.
pub struct Session<R: AddressBookRepository> {
    repository: R,
    book: AddressBook,
    context: CommandContext,
}

impl<R: AddressBookRepository> Session<R> {
    /// Load the address book and start a session.
    pub fn open(repository: R, context: CommandContext) -> StorageResult<Self> {
        let book = repository.load()?;
        Ok(Self {
            repository,
            book,
            context,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Save the current address book.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    /// Read commands from `input` until `close`/`exit` or end of input,
    /// writing replies to `output`. `today` is consulted for every command.
    pub fn run<I, O, T>(&mut self, mut input: I, mut output: O, today: T) -> Result<()>
    where
        I: BufRead,
        O: Write,
        T: Fn() -> NaiveDate,
    {
        tracing::info!(contacts = self.book.len(), "Session started");
        writeln!(output, "{}", GREETING)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                tracing::info!("End of input");
                writeln!(output)?;
                break;
            }

            let ctx = self.context.with_today(today());
            match execute_line(&line, &mut self.book, &ctx) {
                Some(Outcome::Reply(reply)) => writeln!(output, "{}", reply)?,
                Some(Outcome::Exit) => break,
                None => {}
            }
        }

        self.save().context("Failed to save address book")?;
        writeln!(output, "{}", FAREWELL)?;
        tracing::info!(contacts = self.book.len(), "Session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryRepository {
        saved: RefCell<Option<AddressBook>>,
    }

    impl AddressBookRepository for MemoryRepository {
        fn load(&self) -> StorageResult<AddressBook> {
            Ok(self.saved.borrow().clone().unwrap_or_default())
        }

        fn save(&self, book: &AddressBook) -> StorageResult<()> {
            *self.saved.borrow_mut() = Some(book.clone());
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn run(session: &mut Session<MemoryRepository>, script: &str) -> String {
        let mut output = Vec::new();
        session
            .run(Cursor::new(script.to_string()), &mut output, today)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_saves_and_says_goodbye() {
        let mut session =
            Session::open(MemoryRepository::default(), CommandContext::new(today())).unwrap();
        let output = run(&mut session, "add John 1234567890\nexit\nall\n");

        assert!(output.starts_with(GREETING));
        assert!(output.contains("Contact added."));
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(!output.contains("Contact name: John"));
        assert_eq!(output.matches(FAREWELL).count(), 1);

        let saved = session.repository().saved.borrow().clone().unwrap();
        assert!(saved.find("John").is_some());
    }

    #[test]
    fn test_end_of_input_also_saves() {
        let mut session =
            Session::open(MemoryRepository::default(), CommandContext::new(today())).unwrap();
        run(&mut session, "add John 1234567890\n\n   \n");
        assert!(session.repository().saved.borrow().is_some());
    }

    #[test]
    fn test_unknown_command_keeps_running() {
        let mut session =
            Session::open(MemoryRepository::default(), CommandContext::new(today())).unwrap();
        let output = run(&mut session, "dance\nhello\nclose\n");
        assert!(output.contains("Invalid command."));
        assert!(output.contains("How can I help you?"));
    }
}
