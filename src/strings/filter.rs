//! Typed filter set shared by the structured list endpoint and the
//! natural-language endpoint
//!
//! Filters apply conjunctively: a record matches only if every supplied
//! constraint holds. The two endpoints differ in exactly one way — the
//! character-containment check is case-sensitive for the structured list
//! and case-insensitive for natural-language queries — so the caller
//! picks a [`ContainsMatch`] mode.

use crate::error::{Error, Result};
use crate::strings::types::{ListQuery, StringRecord};
use serde::Serialize;

/// Parsed filter constraints; `None` means the constraint was not supplied
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StringFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

/// How `contains_character` compares against the stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainsMatch {
    /// Substring containment against the value as stored
    CaseSensitive,
    /// Containment against a lowercased copy of the value
    CaseInsensitive,
}

impl StringFilters {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Validate and type the raw list query parameters.
    ///
    /// Each present parameter is validated independently, in a fixed
    /// order, before any filter is applied; the first violation wins.
    pub fn from_list_query(query: &ListQuery) -> Result<Self> {
        let mut filters = Self::default();

        if let Some(raw) = &query.is_palindrome {
            filters.is_palindrome = Some(match raw.as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(Error::Validation(
                        "Invalid value for is_palindrome (must be true or false)".to_string(),
                    ))
                }
            });
        }

        if let Some(raw) = &query.min_length {
            filters.min_length = Some(raw.parse().map_err(|_| {
                Error::Validation("Invalid value for min_length (must be a number)".to_string())
            })?);
        }

        if let Some(raw) = &query.max_length {
            filters.max_length = Some(raw.parse().map_err(|_| {
                Error::Validation("Invalid value for max_length (must be a number)".to_string())
            })?);
        }

        if let Some(raw) = &query.word_count {
            filters.word_count = Some(raw.parse().map_err(|_| {
                Error::Validation("Invalid value for word_count (must be a number)".to_string())
            })?);
        }

        if let Some(raw) = &query.contains_character {
            let mut chars = raw.chars();
            filters.contains_character = match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => {
                    return Err(Error::Validation(
                        "Invalid value for contains_character (must be a single character)"
                            .to_string(),
                    ))
                }
            };
        }

        Ok(filters)
    }

    /// Conjunctive match of every supplied constraint against one record
    pub fn matches(&self, record: &StringRecord, mode: ContainsMatch) -> bool {
        if let Some(want) = self.is_palindrome {
            if record.properties.is_palindrome != want {
                return false;
            }
        }

        if let Some(min) = self.min_length {
            if (record.properties.length as i64) < min {
                return false;
            }
        }

        if let Some(max) = self.max_length {
            if (record.properties.length as i64) > max {
                return false;
            }
        }

        if let Some(count) = self.word_count {
            if record.properties.word_count as i64 != count {
                return false;
            }
        }

        if let Some(ch) = self.contains_character {
            let found = match mode {
                ContainsMatch::CaseSensitive => record.value.contains(ch),
                ContainsMatch::CaseInsensitive => record.value.to_lowercase().contains(ch),
            };
            if !found {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;

    fn query(
        is_palindrome: Option<&str>,
        min_length: Option<&str>,
        max_length: Option<&str>,
        word_count: Option<&str>,
        contains_character: Option<&str>,
    ) -> ListQuery {
        ListQuery {
            is_palindrome: is_palindrome.map(String::from),
            min_length: min_length.map(String::from),
            max_length: max_length.map(String::from),
            word_count: word_count.map(String::from),
            contains_character: contains_character.map(String::from),
        }
    }

    #[test]
    fn test_parse_all_params() {
        let filters = StringFilters::from_list_query(&query(
            Some("true"),
            Some("2"),
            Some("10"),
            Some("1"),
            Some("a"),
        ))
        .unwrap();

        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.min_length, Some(2));
        assert_eq!(filters.max_length, Some(10));
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.contains_character, Some('a'));
    }

    #[test]
    fn test_parse_no_params() {
        let filters =
            StringFilters::from_list_query(&query(None, None, None, None, None)).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_invalid_is_palindrome() {
        let err = StringFilters::from_list_query(&query(Some("yes"), None, None, None, None))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for is_palindrome (must be true or false)"
        );
    }

    #[test]
    fn test_invalid_numeric_params() {
        for (min, max, wc, expected) in [
            (Some("abc"), None, None, "min_length"),
            (None, Some("x"), None, "max_length"),
            (None, None, Some("1.5.2"), "word_count"),
        ] {
            let err =
                StringFilters::from_list_query(&query(None, min, max, wc, None)).unwrap_err();
            assert!(err.to_string().contains(expected));
        }
    }

    #[test]
    fn test_invalid_contains_character() {
        for bad in ["ab", ""] {
            let err =
                StringFilters::from_list_query(&query(None, None, None, None, Some(bad)))
                    .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid value for contains_character (must be a single character)"
            );
        }
    }

    #[test]
    fn test_multibyte_contains_character_is_one_character() {
        let filters =
            StringFilters::from_list_query(&query(None, None, None, None, Some("é"))).unwrap();
        assert_eq!(filters.contains_character, Some('é'));
    }

    #[test]
    fn test_validation_order_first_violation_wins() {
        // both parameters invalid; is_palindrome is checked first
        let err = StringFilters::from_list_query(&query(
            Some("maybe"),
            Some("abc"),
            None,
            None,
            None,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("is_palindrome"));
    }

    #[test]
    fn test_negative_bounds_are_vacuous() {
        let filters =
            StringFilters::from_list_query(&query(None, Some("-5"), None, None, None)).unwrap();
        let record = analysis::analyze("abc");
        assert!(filters.matches(&record, ContainsMatch::CaseSensitive));
    }

    #[test]
    fn test_length_range_composition() {
        let filters = StringFilters {
            min_length: Some(4),
            max_length: Some(8),
            ..Default::default()
        };

        let records = [
            analysis::analyze("abc"),
            analysis::analyze("hello"),
            analysis::analyze("九个字符的长字符串"),
        ];
        let matching: Vec<_> = records
            .iter()
            .filter(|r| filters.matches(r, ContainsMatch::CaseSensitive))
            .collect();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].value, "hello");
    }

    #[test]
    fn test_word_count_exact_match() {
        let filters = StringFilters {
            word_count: Some(2),
            ..Default::default()
        };

        assert!(filters.matches(&analysis::analyze("hello world"), ContainsMatch::CaseSensitive));
        assert!(!filters.matches(&analysis::analyze("hello"), ContainsMatch::CaseSensitive));
    }

    #[test]
    fn test_palindrome_filter_both_polarities() {
        let yes = StringFilters {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let no = StringFilters {
            is_palindrome: Some(false),
            ..Default::default()
        };
        let racecar = analysis::analyze("racecar");
        let hello = analysis::analyze("hello");

        assert!(yes.matches(&racecar, ContainsMatch::CaseSensitive));
        assert!(!yes.matches(&hello, ContainsMatch::CaseSensitive));
        assert!(no.matches(&hello, ContainsMatch::CaseSensitive));
        assert!(!no.matches(&racecar, ContainsMatch::CaseSensitive));
    }

    #[test]
    fn test_contains_character_case_modes() {
        let filters = StringFilters {
            contains_character: Some('h'),
            ..Default::default()
        };
        let record = analysis::analyze("Hello");

        // 'h' is not in "Hello" as stored, but is in its lowercased copy
        assert!(!filters.matches(&record, ContainsMatch::CaseSensitive));
        assert!(filters.matches(&record, ContainsMatch::CaseInsensitive));
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let filters = StringFilters::default();
        assert!(filters.matches(&analysis::analyze(""), ContainsMatch::CaseSensitive));
        assert!(filters.matches(&analysis::analyze("anything"), ContainsMatch::CaseSensitive));
    }

    #[test]
    fn test_conjunction_requires_all_constraints() {
        let filters = StringFilters {
            is_palindrome: Some(true),
            min_length: Some(5),
            ..Default::default()
        };

        // palindrome but too short
        assert!(!filters.matches(&analysis::analyze("abba"), ContainsMatch::CaseSensitive));
        // long enough but not a palindrome
        assert!(!filters.matches(&analysis::analyze("abcdef"), ContainsMatch::CaseSensitive));
        // both
        assert!(filters.matches(&analysis::analyze("racecar"), ContainsMatch::CaseSensitive));
    }
}
