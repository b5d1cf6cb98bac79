//! Matching utilities for contact lookup.
//!
//! This module provides fuzzy and exact matching for contacts based on
//! names, emails and phone numbers.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
