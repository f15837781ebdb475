//! # Streaky Core Library
//!
//! Core logic for Streaky, a daily micro-challenge and habit tracker. All
//! operations are exposed through the standalone `streaky` CLI; UI shells are
//! expected to sit on top of the same library.
//!
//! ## Architecture
//!
//! - **Streak Tracker**: completed challenges, the consecutive-day streak and
//!   per-habit counters, persisted to a key-value store after every mutation
//! - **Clock**: injectable time source so day-boundary rules are testable
//! - **Storage**: SQLite key-value store and TOML configuration
//! - **Access**: entitlement gate callers consult before recording premium
//!   challenge completions
//!
//! ## Key Components
//!
//! - [`StreakTracker`]: streak state and its transition rules
//! - [`Database`]: durable key-value storage
//! - [`Config`]: application configuration management
//! - [`Clock`]: time source abstraction

pub mod access;
pub mod clock;
pub mod error;
pub mod storage;
pub mod tracker;

pub use access::{can_access_challenge, complete_challenge, Challenge, EntitlementProvider, StaticEntitlement};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AccessDenied, ConfigError, CoreError, StorageError};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
pub use tracker::{CompletionRecord, StreakTracker, TrackerSnapshot};
