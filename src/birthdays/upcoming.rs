//! Upcoming birthday report.
//!
//! Birthdays are compared with "today" by ISO week number and day of year:
//!
//! - a birthday later in the current week is greeted on its own weekday, or on
//!   the following Monday if it falls on the weekend;
//! - a Monday-Friday birthday in the following week is greeted on its weekday
//!   as long as it is at most six days away (by day of year);
//! - everything else is left out.

use crate::domain::Birthday;
use crate::models::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which calendar year a birthday is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearAnchor {
    /// Compare the stored date as-is, birth year included.
    #[default]
    Stored,

    /// Compare the next occurrence of the birthday on or after today.
    Current,
}

impl YearAnchor {
    /// The date that gets compared against `today`.
    ///
    /// Under `Current` this is today's year, or next year once the date has
    /// passed. 29 February maps to 28 February in a common year.
    pub fn comparison_date(self, birthday: &Birthday, today: NaiveDate) -> NaiveDate {
        let date = birthday.date();
        match self {
            Self::Stored => date,
            Self::Current => {
                let this_year = in_year(date, today.year());
                if this_year >= today {
                    this_year
                } else {
                    in_year(date, today.year() + 1)
                }
            }
        }
    }

    /// Which report week `date` (from [`Self::comparison_date`]) lands in.
    ///
    /// `Stored` compares bare ISO week numbers and days of year. `Current`
    /// compares calendar weeks and day distance, so it crosses New Year.
    fn week_of(self, date: NaiveDate, today: NaiveDate) -> Option<ReportWeek> {
        match self {
            Self::Stored => {
                let (week, day) = (date.iso_week().week(), date.ordinal());
                let (current_week, current_day) = (today.iso_week().week(), today.ordinal());
                if week == current_week && day >= current_day {
                    Some(ReportWeek::This)
                } else if week == current_week + 1 && current_day + 6 >= day {
                    Some(ReportWeek::Next)
                } else {
                    None
                }
            }
            Self::Current => {
                let days_ahead = date.signed_duration_since(today).num_days();
                if date.iso_week() == today.iso_week() && days_ahead >= 0 {
                    Some(ReportWeek::This)
                } else if date.iso_week() == (today + Duration::days(7)).iso_week()
                    && days_ahead <= 6
                {
                    Some(ReportWeek::Next)
                } else {
                    None
                }
            }
        }
    }
}

fn in_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportWeek {
    This,
    Next,
}

impl FromStr for YearAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stored" => Ok(Self::Stored),
            "current" => Ok(Self::Current),
            other => Err(format!("expected 'stored' or 'current', got: {}", other)),
        }
    }
}

/// Weekday a greeting is sent on. Weekends are never greeting days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GreetingDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl GreetingDay {
    /// `None` for Saturday and Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl fmt::Display for GreetingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Names to greet, grouped by greeting day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingBucket {
    days: BTreeMap<GreetingDay, Vec<String>>,
}

impl GreetingBucket {
    fn push(&mut self, day: GreetingDay, name: &str) {
        self.days.entry(day).or_default().push(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Names greeted on `day`, in the order they were found.
    pub fn names_on(&self, day: GreetingDay) -> Option<&[String]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Days in weekday order with their names.
    pub fn iter(&self) -> impl Iterator<Item = (GreetingDay, &[String])> {
        self.days.iter().map(|(day, names)| (*day, names.as_slice()))
    }

    fn summary(&self, heading: &str, empty: &str) -> String {
        if self.is_empty() {
            return empty.to_string();
        }
        let entries: Vec<String> = self
            .iter()
            .map(|(day, names)| format!("{}: {}", day, names.join(", ")))
            .collect();
        format!("{}: {}", heading, entries.join("; "))
    }
}

/// The two halves of the birthday report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    pub this_week: GreetingBucket,
    pub next_week: GreetingBucket,
}

impl UpcomingBirthdays {
    pub fn this_week_summary(&self) -> String {
        self.this_week
            .summary("Greetings this week", "No greetings this week.")
    }

    pub fn next_week_summary(&self) -> String {
        self.next_week
            .summary("Greetings next week", "No greetings next week.")
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.this_week_summary(), self.next_week_summary())
    }
}

/// Build the birthday report for `book` as seen on `today`.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate, anchor: YearAnchor) -> UpcomingBirthdays {
    let mut report = UpcomingBirthdays::default();

    for contact in book {
        let Some(birthday) = contact.birthday() else {
            continue;
        };
        let name = contact.name().as_str();
        let date = anchor.comparison_date(birthday, today);

        match (anchor.week_of(date, today), GreetingDay::from_weekday(date.weekday())) {
            (Some(ReportWeek::This), Some(greeting_day)) => report.this_week.push(greeting_day, name),
            (Some(ReportWeek::This), None) => report.next_week.push(GreetingDay::Monday, name),
            (Some(ReportWeek::Next), Some(greeting_day)) => report.next_week.push(greeting_day, name),
            _ => {}
        }
    }

    report
}
