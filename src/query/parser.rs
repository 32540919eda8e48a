//! Natural-language filter parsing
//!
//! Translates a constrained free-text query into the same
//! [`StringFilters`] set used by the structured list endpoint. Recognition
//! is a fixed, ordered table of independent pattern→effect rules; anything
//! outside that set is rejected rather than guessed at. Regexes are
//! compiled once at parser construction.

use crate::error::Error;
use crate::strings::filter::StringFilters;
use regex::Regex;

/// One recognition rule: applied in table order against the lowercased
/// query, writing into the filter set. Later rules may overwrite earlier
/// effects (`first_vowel` intentionally wins over `contains_letter`).
type RuleFn = fn(&QueryParser, &str, &mut StringFilters) -> Result<(), ParseError>;

const RULES: &[(&str, RuleFn)] = &[
    ("palindrome", QueryParser::rule_palindrome),
    ("word_count", QueryParser::rule_word_count),
    ("longer_than", QueryParser::rule_longer_than),
    ("shorter_than", QueryParser::rule_shorter_than),
    ("contains_letter", QueryParser::rule_contains_letter),
    ("first_vowel", QueryParser::rule_first_vowel),
];

/// Word-count phrases; the first phrase found in the query wins and the
/// rest are skipped.
const WORD_COUNT_PHRASES: &[(&str, i64)] = &[
    ("single word", 1),
    ("two word", 2),
    ("2 word", 2),
    ("three word", 3),
    ("3 word", 3),
];

/// Natural-language parse failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No rule produced a filter
    #[error("Unable to parse natural language query")]
    Unrecognized,
    /// A rule matched but its filter value is unusable
    #[error("Query parsed but resulted in conflicting filters")]
    Conflicting,
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Unrecognized => Error::QueryParse(err.to_string()),
            ParseError::Conflicting => Error::QueryConflict(err.to_string()),
        }
    }
}

/// Compiled natural-language query parser
pub struct QueryParser {
    longer_than: Regex,
    shorter_than: Regex,
    contains_letter: Regex,
}

impl QueryParser {
    /// Compile the recognition patterns
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self {
            longer_than: compile(r"longer than (\d+)")?,
            shorter_than: compile(r"shorter than (\d+)")?,
            contains_letter: compile(
                r"contain(?:s|ing)? (?:the letter |the character )?([a-z])",
            )?,
        })
    }

    /// Parse a query into a filter set.
    ///
    /// The query is lowercased, then every rule in the table runs in
    /// order. An empty result means nothing was recognized.
    pub fn parse(&self, query: &str) -> Result<StringFilters, ParseError> {
        let lowered = query.to_lowercase();
        let mut filters = StringFilters::default();

        for (name, rule) in RULES {
            rule(self, &lowered, &mut filters)?;
            tracing::trace!(rule = name, ?filters, "rule applied");
        }

        if filters.is_empty() {
            return Err(ParseError::Unrecognized);
        }
        Ok(filters)
    }

    fn rule_palindrome(&self, query: &str, filters: &mut StringFilters) -> Result<(), ParseError> {
        if query.contains("palindrom") {
            filters.is_palindrome = Some(true);
        }
        Ok(())
    }

    fn rule_word_count(&self, query: &str, filters: &mut StringFilters) -> Result<(), ParseError> {
        for (phrase, count) in WORD_COUNT_PHRASES {
            if query.contains(phrase) {
                filters.word_count = Some(*count);
                break;
            }
        }
        Ok(())
    }

    fn rule_longer_than(&self, query: &str, filters: &mut StringFilters) -> Result<(), ParseError> {
        if let Some(caps) = self.longer_than.captures(query) {
            let n: i64 = caps[1].parse().map_err(|_| ParseError::Conflicting)?;
            filters.min_length = Some(n.checked_add(1).ok_or(ParseError::Conflicting)?);
        }
        Ok(())
    }

    fn rule_shorter_than(
        &self,
        query: &str,
        filters: &mut StringFilters,
    ) -> Result<(), ParseError> {
        if let Some(caps) = self.shorter_than.captures(query) {
            let n: i64 = caps[1].parse().map_err(|_| ParseError::Conflicting)?;
            filters.max_length = Some(n.checked_sub(1).ok_or(ParseError::Conflicting)?);
        }
        Ok(())
    }

    fn rule_contains_letter(
        &self,
        query: &str,
        filters: &mut StringFilters,
    ) -> Result<(), ParseError> {
        if let Some(caps) = self.contains_letter.captures(query) {
            filters.contains_character = caps[1].chars().next();
        }
        Ok(())
    }

    fn rule_first_vowel(&self, query: &str, filters: &mut StringFilters) -> Result<(), ParseError> {
        if query.contains("first vowel") {
            filters.contains_character = Some('a');
        }
        Ok(())
    }
}

fn compile(pattern: &str) -> crate::error::Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::Internal(format!("invalid query pattern '{}': {}", pattern, e)))
}
