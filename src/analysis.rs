//! Derived string properties
//!
//! Pure functions computing the properties stored alongside each string:
//! content hash, palindrome status, character statistics, word count, and
//! the character frequency map. `analyze` assembles a complete
//! [`StringRecord`] from a raw value.

use crate::strings::types::{StringProperties, StringRecord};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

/// Lowercase hex SHA-256 digest of the raw string bytes.
///
/// This digest is the record id and the storage key, so it must be stable
/// across calls for the same input.
pub fn sha256_hex(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex_encode(&digest)
}

fn hex_encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Palindrome check over the lowercased value with every character outside
/// `[a-z0-9]` stripped. An empty result after stripping counts as a
/// palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Number of distinct characters, case-sensitive, nothing stripped.
pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<char>>().len()
}

/// Number of whitespace-delimited non-empty tokens.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Occurrence count for each character in the value, case-sensitive.
pub fn character_frequency(value: &str) -> HashMap<char, usize> {
    let mut frequency = HashMap::new();
    for ch in value.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}

/// Compute all derived properties and stamp the record with the current
/// UTC time.
pub fn analyze(value: &str) -> StringRecord {
    let sha256_hash = sha256_hex(value);
    StringRecord {
        id: sha256_hash.clone(),
        value: value.to_string(),
        properties: StringProperties {
            length: value.chars().count(),
            is_palindrome: is_palindrome(value),
            unique_characters: unique_characters(value),
            word_count: word_count(value),
            sha256_hash,
            character_frequency_map: character_frequency(value),
        },
        created_at: Utc::now(),
    }
}
