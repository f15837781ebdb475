//! Streak tracker.
//!
//! Owns the completion record, applies the calendar-day rules from
//! [`super::rules`], and writes the full record back to its store after every
//! mutation. Persistence is best effort: failures are logged and the
//! in-memory record stays authoritative for the life of the tracker.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::record::CompletionRecord;
use super::rules::{streak_after_completion, DayGap};
use crate::clock::Clock;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Serializable view of the tracker for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub completed_ids: Vec<String>,
    pub streak: u32,
    pub last_completion: Option<DateTime<Local>>,
    pub completed_today: bool,
    pub completion_counts: BTreeMap<String, u64>,
}

/// Tracks completed challenges, the daily streak and per-habit counters.
pub struct StreakTracker<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    record: CompletionRecord,
}

impl<S: KeyValueStore, C: Clock> StreakTracker<S, C> {
    /// Load state from `store` and correct a streak that lapsed while the
    /// tracker was not running.
    ///
    /// A store that cannot be read yields an empty record.
    pub fn open(store: S, clock: C) -> Self {
        let mut tracker = Self {
            store,
            clock,
            record: CompletionRecord::default(),
        };
        tracker.load();
        tracker.reconcile_lapse();
        tracker
    }

    /// Replace the in-memory record with what the store holds.
    ///
    /// A streak without a last completion date is zeroed, since it can only
    /// come from a partial or corrupted write.
    pub fn load(&mut self) {
        self.record = match CompletionRecord::load_from(&self.store) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("failed to load streak state, starting empty: {}", e);
                CompletionRecord::default()
            }
        };
        if self.record.last_completion.is_none() && self.record.streak != 0 {
            tracing::warn!(
                "stored streak of {} has no last completion date, resetting",
                self.record.streak
            );
            self.record.streak = 0;
            self.persist();
        }
        tracing::debug!(
            "loaded streak state: streak={} completed={} last={:?}",
            self.record.streak,
            self.record.completed_ids.len(),
            self.record.last_completion
        );
    }

    /// Zero the streak if at least one full calendar day passed with no
    /// completion. Returns whether a lapse was detected.
    pub fn reconcile_lapse(&mut self) -> bool {
        let last_day = self.last_completion_day();
        let DayGap::Lapsed(days) = DayGap::between(last_day, self.clock.today()) else {
            return false;
        };
        if self.record.streak != 0 {
            tracing::info!(
                "streak of {} lapsed after {} days without a completion",
                self.record.streak,
                days
            );
        }
        self.record.streak = 0;
        self.persist();
        true
    }

    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.record.completed_ids.contains(challenge_id)
    }

    /// Record a completion of `challenge_id` at the clock's current time.
    ///
    /// Returns the streak after the completion.
    pub fn mark_complete(&mut self, challenge_id: &str) -> u32 {
        let now = self.clock.now();
        let before = self.record.streak;

        self.record.completed_ids.insert(challenge_id.to_string());
        self.record.streak =
            streak_after_completion(before, self.last_completion_day(), now.date_naive());
        self.record.last_completion = Some(now);

        tracing::debug!(
            "completed '{}': streak {} -> {}",
            challenge_id,
            before,
            self.record.streak
        );
        self.persist();
        self.record.streak
    }

    pub fn completion_count(&self, habit_id: &str) -> u64 {
        self.record
            .completion_counts
            .get(habit_id)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the new count.
    pub fn increment_completion_count(&mut self, habit_id: &str) -> u64 {
        let count = self
            .record
            .completion_counts
            .entry(habit_id.to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;
        self.persist();
        count
    }

    pub fn streak(&self) -> u32 {
        self.record.streak
    }

    pub fn last_completion(&self) -> Option<DateTime<Local>> {
        self.record.last_completion
    }

    /// Completed challenge identifiers in sorted order.
    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.record.completed_ids.iter().map(String::as_str)
    }

    pub fn record(&self) -> &CompletionRecord {
        &self.record
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            completed_ids: self.record.completed_ids.iter().cloned().collect(),
            streak: self.record.streak,
            last_completion: self.record.last_completion,
            completed_today: self.last_completion_day() == Some(self.clock.today()),
            completion_counts: self.record.completion_counts.clone(),
        }
    }

    /// Write the record to the store, reporting failure.
    ///
    /// # Errors
    /// Returns the storage error from the first failed write.
    pub fn save(&mut self) -> Result<(), StorageError> {
        self.record.save_to(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consume the tracker, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!("failed to persist streak state: {}", e);
        }
    }

    fn last_completion_day(&self) -> Option<chrono::NaiveDate> {
        self.record.last_completion.map(|at| at.date_naive())
    }
}
