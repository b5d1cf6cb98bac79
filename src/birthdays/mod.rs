//! Birthday reminders.
//!
//! Computes which contacts should be greeted this week and next week.

pub mod upcoming;

pub use upcoming::{upcoming_birthdays, GreetingBucket, GreetingDay, UpcomingBirthdays, YearAnchor};
