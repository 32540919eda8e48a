//! In-memory string record store
//!
//! Keys are the lowercase hex SHA-256 of the stored value, so the same
//! value always lands in the same slot and duplicates are detected by
//! key presence alone. Contents live for the process lifetime only.

use crate::strings::types::StringRecord;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory store mapping content hash → record
pub struct StringStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl StringStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a record by content hash
    pub async fn get(&self, hash: &str) -> Option<StringRecord> {
        let records = self.records.read().await;
        records.get(hash).cloned()
    }

    /// Insert a record unless its hash is already present; returns whether
    /// the insert happened.
    ///
    /// The existence check and the insert run under one write lock, so
    /// concurrent creates of the same value cannot both succeed.
    pub async fn try_insert(&self, record: StringRecord) -> bool {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return false;
        }
        records.insert(record.id.clone(), record);
        true
    }

    /// Remove a record by content hash, returning it if it was present
    pub async fn remove(&self, hash: &str) -> Option<StringRecord> {
        let mut records = self.records.write().await;
        records.remove(hash)
    }

    /// Snapshot of all records; iteration order carries no guarantee
    pub async fn values(&self) -> Vec<StringRecord> {
        let records = self.records.read().await;
        records.values().cloned().collect()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for StringStore {
    fn default() -> Self {
        Self::new()
    }
}
