// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StorageError;

use super::KeyValueStorage;

/// Storage persisted as a single JSON object file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Read(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }

    fn write_map(&self, map: Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Existing items for a write; a corrupt file is overwritten entirely.
    fn map_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_map() {
            Ok(map) => Ok(map),
            Err(StorageError::Read(reason)) => {
                tracing::warn!(
                    target: "frontier_admin.storage",
                    path = %self.path.display(),
                    %reason,
                    "replacing unreadable storage file"
                );
                Ok(Map::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.read_map()?;
        match map.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(StorageError::Read(format!(
                "item '{}' is not a string",
                key
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(map)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));
        assert!(storage.get_item("anything").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_set_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("storage.json");
        let mut storage = FileStorage::new(&path);

        storage.set_item("k", "v").unwrap();
        assert!(path.exists());
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let mut storage = FileStorage::new(&path);

        storage.set_item("first", "1").unwrap();
        storage.set_item("second", "2").unwrap();
        storage.remove_item("first").unwrap();

        let reopened = FileStorage::new(&path);
        assert!(reopened.get_item("first").unwrap().is_none());
        assert_eq!(reopened.get_item("second").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_corrupt_file_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get_item("k"), Err(StorageError::Read(_))));
    }

    #[test]
    fn test_file_storage_non_string_item_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, r#"{"k": {"nested": true}}"#).unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get_item("k"), Err(StorageError::Read(_))));
    }

    #[test]
    fn test_file_storage_write_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_storage_write_into_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        assert!(storage.set_item("k", "v").is_err());
    }
}
