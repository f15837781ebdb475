//! Persisted tracker state and its key-value encoding.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const COMPLETED_IDS_KEY: &str = "completedChallengeIds";
pub const STREAK_KEY: &str = "streakCount";
pub const LAST_COMPLETION_KEY: &str = "lastCompletionDate";
pub const COMPLETION_COUNTS_KEY: &str = "habitCompletionCounts";

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Challenges ever completed. Never shrinks.
    pub completed_ids: BTreeSet<String>,
    pub streak: u32,
    pub last_completion: Option<DateTime<Local>>,
    /// Lifetime completions per habit.
    pub completion_counts: BTreeMap<String, u64>,
}

impl CompletionRecord {
    /// Read the record from `store`.
    ///
    /// Missing keys take their defaults. A value that cannot be decoded is
    /// logged and treated as missing.
    ///
    /// # Errors
    /// Returns an error only if the store itself fails a read.
    pub fn load_from<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StorageError> {
        let mut record = Self::default();

        if let Some(raw) = store.get(COMPLETED_IDS_KEY)? {
            match serde_json::from_str::<BTreeSet<String>>(&raw) {
                Ok(ids) => record.completed_ids = ids,
                Err(e) => tracing::warn!("ignoring unreadable {}: {}", COMPLETED_IDS_KEY, e),
            }
        }

        if let Some(raw) = store.get(STREAK_KEY)? {
            match raw.trim().parse::<u32>() {
                Ok(streak) => record.streak = streak,
                Err(e) => tracing::warn!("ignoring unreadable {}: {}", STREAK_KEY, e),
            }
        }

        if let Some(raw) = store.get(LAST_COMPLETION_KEY)? {
            match DateTime::parse_from_rfc3339(raw.trim()) {
                Ok(at) => record.last_completion = Some(at.with_timezone(&Local)),
                Err(e) => tracing::warn!("ignoring unreadable {}: {}", LAST_COMPLETION_KEY, e),
            }
        }

        if let Some(raw) = store.get(COMPLETION_COUNTS_KEY)? {
            match serde_json::from_str::<BTreeMap<String, u64>>(&raw) {
                Ok(counts) => record.completion_counts = counts,
                Err(e) => tracing::warn!("ignoring unreadable {}: {}", COMPLETION_COUNTS_KEY, e),
            }
        }

        Ok(record)
    }

    /// Write every field to `store` as one batch.
    ///
    /// # Errors
    /// Returns the store's error if the batch cannot be written.
    pub fn save_to<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        let completed_ids = encode_json(&self.completed_ids)?;
        let streak = self.streak.to_string();
        let last_completion = self.last_completion.map(|at| at.to_rfc3339());
        let completion_counts = encode_json(&self.completion_counts)?;

        store.write_batch(&[
            (COMPLETED_IDS_KEY, Some(completed_ids.as_str())),
            (STREAK_KEY, Some(streak.as_str())),
            (LAST_COMPLETION_KEY, last_completion.as_deref()),
            (COMPLETION_COUNTS_KEY, Some(completion_counts.as_str())),
        ])
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::QueryFailed(e.to_string()))
}
