//! Key/value persistence for the three records the app keeps.
//!
//! Records are stored wholesale as JSON documents. There are no partial
//! updates: callers read a record, change their copy, and write it back.

pub mod records;
pub mod sqlite;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use sqlite::SqliteStore;

pub const KEY_DRINKS: &str = "drinks";
pub const KEY_CHECKINS: &str = "checkIns";
pub const KEY_SESSION: &str = "bakdag";

pub trait KvStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Decode the record under `key`, `None` when nothing is stored.
    fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| AppError::CorruptRecord {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Overwrite the record under `key`.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_roundtrip_and_absent_key() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get::<Vec<u32>>("nums").unwrap(), None);

        store.set("nums", &vec![1u32, 2, 3]).unwrap();
        store.set("nums", &vec![4u32]).unwrap();
        assert_eq!(store.get::<Vec<u32>>("nums").unwrap(), Some(vec![4]));
    }

    #[test]
    fn undecodable_record_is_reported_with_its_key() {
        let mut store = MemoryStore::new();
        store.set_raw(KEY_CHECKINS, "{not json").unwrap();

        match store.get::<Vec<u32>>(KEY_CHECKINS) {
            Err(AppError::CorruptRecord { key, .. }) => assert_eq!(key, KEY_CHECKINS),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
