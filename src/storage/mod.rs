// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Key-value storage backends
//!
//! A small string-to-string store in the shape of browser local storage.
//! `MemoryStorage` keeps items in process and can simulate the usual
//! failure modes (quota exhaustion, storage switched off); `FileStorage`
//! persists every key of a profile into one JSON file.

use std::collections::HashMap;

use crate::error::StorageError;

mod file;

pub use file::FileStorage;

/// String key-value store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Read an item; `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write an item, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an item. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage with optional quota
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Switch storage off; every call fails with `StorageError::Disabled`.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        if let Some(limit) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_missing() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("missing").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_set_and_get() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();

        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_remove() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        storage.remove_item("never-set").unwrap();
        assert!(storage.get_item("k").unwrap().is_none());
    }

    #[test]
    fn test_memory_storage_quota_exceeded() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.set_item("key", "1234567").unwrap();

        let err = storage.set_item("other", "xx").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 17,
                limit: 10
            }
        ));
        assert!(storage.get_item("other").unwrap().is_none());
    }

    #[test]
    fn test_memory_storage_quota_counts_replacement_once() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.set_item("key", "1234567").unwrap();
        storage.set_item("key", "7654321").unwrap();
        assert_eq!(storage.get_item("key").unwrap().as_deref(), Some("7654321"));
    }

    #[test]
    fn test_memory_storage_disabled() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        storage.set_disabled(true);

        assert!(matches!(storage.get_item("k"), Err(StorageError::Disabled)));
        assert!(matches!(
            storage.set_item("k", "w"),
            Err(StorageError::Disabled)
        ));
        assert!(matches!(
            storage.remove_item("k"),
            Err(StorageError::Disabled)
        ));

        storage.set_disabled(false);
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
