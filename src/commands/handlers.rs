//! One handler per command.
//!
//! Handlers validate every argument before changing the address book, so a
//! rejected command leaves the book as it was.

use super::CommandContext;
use crate::domain::{validate_address, validate_email, validate_phone, ContactName};
use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, Contact};

fn not_found(book: &AddressBook, name: &str, ctx: &CommandContext) -> CommandError {
    let suggestion = ContactMatcher::new()
        .suggest(name, book.list_all(), ctx.match_confidence_threshold)
        .map(str::to_string);
    CommandError::ContactNotFound {
        name: name.to_string(),
        suggestion,
    }
}

fn contact<'a>(
    book: &'a AddressBook,
    name: &str,
    ctx: &CommandContext,
) -> CommandResult<&'a Contact> {
    book.find(name).ok_or_else(|| not_found(book, name, ctx))
}

fn contact_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
    ctx: &CommandContext,
) -> CommandResult<&'a mut Contact> {
    match book.position(name) {
        Some(index) => Ok(book.at_mut(index)),
        None => Err(not_found(book, name, ctx)),
    }
}

/// `add <name> <phone> [<street> <city> <state> <zip> [<email>...]]`
///
/// Creates the contact if needed. Address fields are only applied when all
/// four are given; arguments after them are emails.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, rest @ ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    let name = ContactName::new(*name)?;
    let phone = validate_phone(phone)?;
    let address = match rest {
        [street, city, state, zip_code, ..] => {
            Some(validate_address(street, city, state, zip_code)?)
        }
        _ => None,
    };
    let emails = rest
        .iter()
        .skip(4)
        .map(|email| validate_email(email))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut contact, message) = match book.find(name.as_str()) {
        Some(existing) => (existing.clone(), "Contact updated."),
        None => (Contact::new(name), "Contact added."),
    };
    contact.push_phone(phone);
    if let Some(address) = address {
        contact.replace_address(address);
    }
    for email in emails {
        contact.push_email(email);
    }

    tracing::info!(contact = %contact.name(), "{}", message);
    book.add(contact);
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_phone(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, old, new, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.edit_phone(old, new)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook, ctx: &CommandContext) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    let phones: Vec<&str> = contact(book, name, ctx)?
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    Ok(format!("Phones for {}: {}", name, phones.join(", ")))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }
    book.list_all()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(
    args: &[&str],
    book: &AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    Ok(match contact(book, name, ctx)?.birthday() {
        Some(birthday) => format!("Birthday for {}: {}", name, birthday),
        None => "Birthday not set.".to_string(),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, ctx: &CommandContext) -> String {
    book.upcoming_birthdays(ctx.today, ctx.birthday_anchor)
        .to_string()
}

/// `add-address <name> <street> <city> <state> <zip>`
pub fn add_address(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, street, city, state, zip_code, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.set_address(street, city, state, zip_code)?;
    Ok("Address added.".to_string())
}

/// `add-email <name> <email>`
pub fn add_email(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, email, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.add_email(email)?;
    Ok(format!("Email '{}' added to contact '{}'.", email, name))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.remove_phone(phone)?;
    Ok("Phone number removed.".to_string())
}

/// `remove-email <name> <email>`
pub fn remove_email(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, email, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    contact_mut(book, name, ctx)?.remove_email(email)?;
    Ok("Email removed.".to_string())
}

/// `delete <name>`
pub fn delete_contact(
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    if book.delete(name).is_none() {
        return Err(not_found(book, name, ctx));
    }
    tracing::info!(contact = *name, "Contact deleted");
    Ok("Contact deleted.".to_string())
}

/// `search <query...>`: phone, email, or part of a name.
pub fn search(args: &[&str], book: &AddressBook, ctx: &CommandContext) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::InsufficientArguments);
    }
    let query = args.join(" ");
    let matches = ContactMatcher::new().find_matches(
        &query,
        book.list_all(),
        ctx.max_match_results,
        ctx.match_confidence_threshold,
    );
    if matches.is_empty() {
        return Ok("No matching contacts.".to_string());
    }
    Ok(matches
        .iter()
        .map(|m| m.contact.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `help`
pub fn help() -> String {
    [
        "Commands:",
        "  hello",
        "  add <name> <phone> [<street> <city> <state> <zip> [<email>...]]",
        "  change <name> <old phone> <new phone>",
        "  phone <name>",
        "  all",
        "  add-birthday <name> <DD.MM.YYYY>",
        "  show-birthday <name>",
        "  birthdays",
        "  add-address <name> <street> <city> <state> <zip>",
        "  add-email <name> <email>",
        "  remove-phone <name> <phone>",
        "  remove-email <name> <email>",
        "  delete <name>",
        "  search <phone | email | name>",
        "  close | exit",
    ]
    .join("\n")
}
