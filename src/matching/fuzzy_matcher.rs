//! Contact lookup by phone, email or approximate name.
//!
//! This module provides contact matching with:
//! - Exact matching on phone and email
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::models::Contact;

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub contact: &'a Contact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact email match
    ExactEmail,

    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find contacts matching a free-form query.
    ///
    /// A query containing '@' is treated as an email, a query with ten digits
    /// (after stripping formatting) as a phone number, and anything else as a
    /// name.
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        contacts: &'a [Contact],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = if query.contains('@') {
            let normalized = Self::normalize_email(query);
            contacts
                .iter()
                .filter(|c| {
                    c.emails()
                        .iter()
                        .any(|e| Self::normalize_email(e.as_str()) == normalized)
                })
                .map(|contact| MatchResult {
                    contact,
                    confidence: 100,
                    match_type: MatchType::ExactEmail,
                })
                .collect()
        } else if Self::normalize_phone(query).len() == 10 {
            let normalized = Self::normalize_phone(query);
            contacts
                .iter()
                .filter(|c| c.phones().iter().any(|p| p.as_str() == normalized))
                .map(|contact| MatchResult {
                    contact,
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                })
                .collect()
        } else {
            contacts
                .iter()
                .filter_map(|contact| {
                    let confidence = self.fuzzy_match_name(query, contact.name().as_str())?;
                    (confidence >= min_confidence).then_some(MatchResult {
                        contact,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    })
                })
                .collect()
        };

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.name().cmp(b.contact.name()))
        });
        results.truncate(max_results);

        results
    }

    /// The stored name closest to `name`, if any scores at least
    /// `min_confidence`.
    pub fn suggest<'a>(
        &self,
        name: &str,
        contacts: &'a [Contact],
        min_confidence: u8,
    ) -> Option<&'a str> {
        contacts
            .iter()
            .filter_map(|contact| {
                let candidate = contact.name().as_str();
                let confidence = self.fuzzy_match_name(name, candidate)?;
                (confidence >= min_confidence).then_some((confidence, candidate))
            })
            .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1)))
            .map(|(_, candidate)| candidate)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(contact_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix.
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Normalize an email address for comparison.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Normalize a phone number for comparison.
    ///
    /// Extracts only digits and keeps the last 10 (drops a country code).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        let mut john = Contact::named("John Smith").unwrap();
        john.add_phone("5551234567").unwrap();
        john.add_email("john@example.com").unwrap();

        let mut jane = Contact::named("Jane Doe").unwrap();
        jane.add_phone("5559876543").unwrap();

        let johnny = Contact::named("Johnny").unwrap();

        vec![john, jane, johnny]
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(
            ContactMatcher::normalize_phone("+1 (555) 123-4567"),
            "5551234567"
        );
        assert_eq!(ContactMatcher::normalize_phone("555-1234"), "5551234");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(
            ContactMatcher::normalize_name("  John   SMITH "),
            "john smith"
        );
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(ContactMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_exact_email_match() {
        let contacts = contacts();
        let matches = ContactMatcher::new().find_matches("JOHN@example.com", &contacts, 5, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].contact.name().as_str(), "John Smith");
        assert_eq!(matches[0].confidence, 100);
        assert_eq!(matches[0].match_type, MatchType::ExactEmail);
    }

    #[test]
    fn test_exact_phone_match_ignores_formatting() {
        let contacts = contacts();
        let matches = ContactMatcher::new().find_matches("(555) 987-6543", &contacts, 5, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].contact.name().as_str(), "Jane Doe");
        assert_eq!(matches[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_fuzzy_name_ranking() {
        let contacts = contacts();
        let matches = ContactMatcher::new().find_matches("john", &contacts, 5, 30);
        let names: Vec<&str> = matches.iter().map(|m| m.contact.name().as_str()).collect();
        assert_eq!(names, vec!["Johnny", "John Smith"]);
        assert!(matches.iter().all(|m| m.match_type == MatchType::FuzzyName));
    }

    #[test]
    fn test_max_results_truncates() {
        let contacts = contacts();
        let matches = ContactMatcher::new().find_matches("john", &contacts, 1, 0);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_suggest_closest_name() {
        let contacts = contacts();
        let matcher = ContactMatcher::new();
        assert_eq!(matcher.suggest("Jane Do", &contacts, 60), Some("Jane Doe"));
        assert_eq!(matcher.suggest("Zebediah", &contacts, 60), None);
    }
}
