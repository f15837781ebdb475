mod config;
pub mod database;
mod memory;

pub use config::{Config, DisplayConfig, EntitlementConfig, LogConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// String key-value storage consumed by the streak tracker.
///
/// Values are opaque strings; the tracker owns their encoding.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Apply several writes together. `Some` sets a key, `None` removes it.
    ///
    /// The default applies them one by one; stores that can commit
    /// atomically should override it.
    fn write_batch(&mut self, writes: &[(&str, Option<&str>)]) -> Result<(), StorageError> {
        for (key, value) in writes {
            match value {
                Some(value) => self.set(key, value)?,
                None => self.remove(key)?,
            }
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn write_batch(&mut self, writes: &[(&str, Option<&str>)]) -> Result<(), StorageError> {
        (**self).write_batch(writes)
    }
}

/// Returns the data directory.
///
/// `STREAKY_DATA_DIR` wins when set. Otherwise `~/.config/streaky[-dev]/`,
/// where STREAKY_ENV=dev selects the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("STREAKY_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STREAKY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("streaky-dev")
            } else {
                base_dir.join("streaky")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
