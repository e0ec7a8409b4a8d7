//! Append-only ledger repository.
//!
//! Owns serialization of the achievement sequence to the key-value store.
//! Loading fails soft: an absent or corrupt stored value yields an empty
//! ledger rather than an error. Appending propagates write failures so the
//! caller can retry or warn the user instead of silently losing the entry.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::{KeyValueStore, StoreError};
use crate::types::Achievement;

/// Storage key the mobile client used for the achievement sequence.
pub const DEFAULT_STORAGE_KEY: &str = "@achievements";

/// Repository for the persisted achievement ledger.
///
/// The ledger is an ordered sequence, newest first. Entries are immutable
/// once appended; no update or delete is defined.
pub struct LedgerRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl LedgerRepository {
    /// Create a repository over `store` using the default storage key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a repository with an explicit storage key.
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Get the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the full stored sequence.
    ///
    /// Absent or unparseable stored data yields an empty ledger. A read
    /// failure is also recovered as empty; the caller never sees an error
    /// from a load.
    pub async fn load(&self) -> Vec<Achievement> {
        let raw = match self.store.get_string(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ledger read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Achievement>>(&raw) {
            Ok(entries) => {
                debug!(key = %self.key, count = entries.len(), "Loaded achievement ledger");
                entries
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Corrupt ledger data, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append `entry` at the head of the ledger and persist the result.
    ///
    /// Returns the new sequence. On a write failure the persisted store is
    /// unchanged and the error propagates; the entry is not silently lost.
    pub async fn append(&self, entry: Achievement) -> Result<Vec<Achievement>, StoreError> {
        let mut entries = self.load().await;

        if entries.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::WriteFailed(format!(
                "duplicate achievement id {}",
                entry.id
            )));
        }

        entries.insert(0, entry);

        let serialized = serde_json::to_string(&entries)?;
        self.store.set_string(&self.key, &serialized).await?;

        debug!(
            key = %self.key,
            count = entries.len(),
            "Appended achievement to ledger"
        );

        Ok(entries)
    }
}
