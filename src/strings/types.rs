//! Wire types for the string store API
//!
//! Defines the stored record shape, response envelopes, and raw query
//! parameter structs. Field names are the JSON shape; no renaming.

use crate::strings::filter::StringFilters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored string plus its derived properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    /// Lowercase hex SHA-256 of `value`; also the storage key
    pub id: String,
    /// The original string exactly as submitted
    pub value: String,
    pub properties: StringProperties,
    /// Insert time, never mutated
    #[serde(with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
}

/// Derived properties computed once at insert time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    /// Duplicate of the record id, kept in the properties block for
    /// client convenience
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<char, usize>,
}

/// Raw query parameters for the structured list endpoint; validated and
/// typed by [`StringFilters::from_list_query`]
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// Query parameters for the natural-language endpoint
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}

/// Response envelope for the structured list endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    /// Echo of the filters actually applied, with parsed typed values
    pub filters_applied: StringFilters,
}

/// Response envelope for the natural-language endpoint
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// How a natural-language query was understood
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    /// The query string exactly as received
    pub original: String,
    pub parsed_filters: StringFilters,
}

/// ISO-8601 UTC with millisecond precision and `Z` suffix
/// (`2026-08-07T12:34:56.789Z`)
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
