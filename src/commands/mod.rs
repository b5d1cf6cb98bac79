//! User commands.
//!
//! A line of input is split on whitespace into a command word and its
//! arguments. Each command runs against the address book and always produces
//! text for the user: failures are rendered, never propagated.

pub mod handlers;

use crate::birthdays::YearAnchor;
use crate::config::Config;
use crate::error::CommandError;
use crate::models::AddressBook;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Every command the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddAddress,
    AddEmail,
    RemovePhone,
    RemoveEmail,
    Delete,
    Search,
    Help,
    Exit,
}

impl Command {
    /// Canonical command word.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::AddAddress => "add-address",
            Self::AddEmail => "add-email",
            Self::RemovePhone => "remove-phone",
            Self::RemoveEmail => "remove-email",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.to_ascii_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "add-address" => Self::AddAddress,
            "add-email" => Self::AddEmail,
            "remove-phone" => Self::RemovePhone,
            "remove-email" => Self::RemoveEmail,
            "delete" => Self::Delete,
            "search" => Self::Search,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => return Err(CommandError::UnknownCommand(s.to_string())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a command needs besides the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Reference date for the birthday report
    pub today: NaiveDate,

    pub birthday_anchor: YearAnchor,

    /// Cap on `search` results
    pub max_match_results: usize,

    /// Minimum fuzzy score for search results and "did you mean" hints
    pub match_confidence_threshold: u8,
}

impl CommandContext {
    /// Context with default settings.
    pub fn new(today: NaiveDate) -> Self {
        Self::from_config(&Config::default(), today)
    }

    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self {
            today,
            birthday_anchor: config.birthday_anchor,
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
        }
    }

    /// Same settings, different reference date.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }
}

/// Split a line into its command word and arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

/// What a command line asks of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this line and keep reading.
    Reply(String),
    /// Save and end the session.
    Exit,
}

/// Run one command and render its outcome.
pub fn execute(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> Outcome {
    tracing::debug!(command = %command, args = args.len(), "Executing command");

    let result = match command {
        Command::Exit => return Outcome::Exit,
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_phone(args, book, ctx),
        Command::Phone => handlers::show_phone(args, book, ctx),
        Command::All => Ok(handlers::show_all(book)),
        Command::AddBirthday => handlers::add_birthday(args, book, ctx),
        Command::ShowBirthday => handlers::show_birthday(args, book, ctx),
        Command::Birthdays => Ok(handlers::birthdays(book, ctx)),
        Command::AddAddress => handlers::add_address(args, book, ctx),
        Command::AddEmail => handlers::add_email(args, book, ctx),
        Command::RemovePhone => handlers::remove_phone(args, book, ctx),
        Command::RemoveEmail => handlers::remove_email(args, book, ctx),
        Command::Delete => handlers::delete_contact(args, book, ctx),
        Command::Search => handlers::search(args, book, ctx),
        Command::Help => Ok(handlers::help()),
    };

    Outcome::Reply(result.unwrap_or_else(|e| {
        tracing::warn!(command = %command, error = ?e, "Command rejected");
        e.to_string()
    }))
}

/// Parse and run a full input line.
///
/// Returns `None` for blank input.
pub fn execute_line(line: &str, book: &mut AddressBook, ctx: &CommandContext) -> Option<Outcome> {
    let (word, args) = parse_input(line)?;
    let outcome = match word.parse::<Command>() {
        Ok(command) => execute(command, &args, book, ctx),
        Err(e) => {
            tracing::warn!(command = word, "Unknown command");
            Outcome::Reply(e.to_string())
        }
    };
    Some(outcome)
}
