//! Tests for the upcoming birthday report.
//!
//! These tests validate:
//! - Week bucketing relative to "today"
//! - Weekend roll-forward to the following Monday
//! - Grouping of names that share a greeting day
//! - The lookahead limit

use chrono::NaiveDate;
use contact_book::{upcoming_birthdays, AddressBook, GreetingDay, YearAnchor};

mod fixtures;
use fixtures::*;

fn report(book: &AddressBook) -> contact_book::UpcomingBirthdays {
    upcoming_birthdays(book, wednesday(), YearAnchor::Stored)
}

#[test]
fn test_wednesday_saturday_rolls_to_monday_next_week() {
    let report = report(&birthday_book(&[("Sam", "18.05.2024")]));

    assert!(report.this_week.is_empty());
    assert_eq!(
        report.next_week.names_on(GreetingDay::Monday),
        Some(&["Sam".to_string()][..])
    );
}

#[test]
fn test_wednesday_friday_is_this_week() {
    let report = report(&birthday_book(&[("Fay", "17.05.2024")]));

    assert_eq!(
        report.this_week.names_on(GreetingDay::Friday),
        Some(&["Fay".to_string()][..])
    );
    assert!(report.next_week.is_empty());
}

#[test]
fn test_shared_greeting_day_is_one_entry() {
    let book = birthday_book(&[
        ("Ann", "16.05.2024"),
        ("Bob", "16.05.2024"),
        ("Sat", "18.05.2024"),
        ("Sun", "19.05.2024"),
    ]);
    let report = report(&book);

    assert_eq!(report.this_week.iter().count(), 1);
    assert_eq!(
        report.this_week_summary(),
        "Greetings this week: Thursday: Ann, Bob"
    );
    assert_eq!(
        report.next_week_summary(),
        "Greetings next week: Monday: Sat, Sun"
    );
}

#[test]
fn test_more_than_thirteen_days_ahead_is_not_reported() {
    for birthday in ["29.05.2024", "30.05.2024", "14.06.2024", "15.05.2025"] {
        let report = report(&birthday_book(&[("Later", birthday)]));
        assert!(
            report.this_week.is_empty() && report.next_week.is_empty(),
            "{} should not be reported",
            birthday
        );
    }
}

#[test]
fn test_empty_book_reports_no_greetings() {
    let report = report(&AddressBook::new());
    assert_eq!(
        report.to_string(),
        "No greetings this week.\nNo greetings next week."
    );
}

#[test]
fn test_days_are_listed_in_weekday_order() {
    let book = birthday_book(&[
        ("Fri", "17.05.2024"),
        ("Wed", "15.05.2024"),
        ("Thu", "16.05.2024"),
    ]);
    assert_eq!(
        report(&book).this_week_summary(),
        "Greetings this week: Wednesday: Wed; Thursday: Thu; Friday: Fri"
    );
}

#[test]
fn test_anchor_changes_which_weekday_is_used() {
    // 16 May 1990 was a Wednesday; 16 May 2024 is a Thursday.
    let book = birthday_book(&[("Old", "16.05.1990")]);

    let stored = upcoming_birthdays(&book, wednesday(), YearAnchor::Stored);
    assert_eq!(
        stored.this_week.names_on(GreetingDay::Wednesday),
        Some(&["Old".to_string()][..])
    );

    let current = upcoming_birthdays(&book, wednesday(), YearAnchor::Current);
    assert_eq!(
        current.this_week.names_on(GreetingDay::Thursday),
        Some(&["Old".to_string()][..])
    );
}

#[test]
fn test_report_via_address_book() {
    let book = birthday_book(&[("Fay", "17.05.2024")]);
    let today = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    let report = book.upcoming_birthdays(today, YearAnchor::Stored);
    assert_eq!(report.this_week_summary(), "Greetings this week: Friday: Fay");
}
