// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings store
//!
//! Reads and writes the settings blob under one fixed key. Loading never
//! fails: anything missing or unreadable degrades to the variant defaults.

use crate::config::{FormVariant, Settings, DEFAULT_STORAGE_KEY};
use crate::error::StorageError;
use crate::storage::KeyValueStorage;

pub struct SettingsStore<K> {
    storage: K,
    key: String,
    defaults: Settings,
}

impl<K: KeyValueStorage> SettingsStore<K> {
    pub fn new(storage: K, variant: FormVariant) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY, variant)
    }

    pub fn with_key(storage: K, key: impl Into<String>, variant: FormVariant) -> Self {
        Self {
            storage,
            key: key.into(),
            defaults: Settings::defaults_for(variant),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut K {
        &mut self.storage
    }

    /// Load persisted settings merged over the defaults.
    pub fn load(&self) -> Settings {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.defaults.clone(),
            Err(e) => {
                tracing::warn!(
                    target: "frontier_admin.store",
                    error = %e,
                    "failed to load saved settings"
                );
                return self.defaults.clone();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Settings::merged_over(&self.defaults, &value),
            Err(e) => {
                tracing::warn!(
                    target: "frontier_admin.store",
                    error = %e,
                    "saved settings are not valid JSON"
                );
                self.defaults.clone()
            }
        }
    }

    /// Persist settings under the store key. Failures are reported, never retried.
    pub fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        let content =
            serde_json::to_string(settings).map_err(|e| StorageError::Write(e.to_string()))?;
        self.storage.set_item(&self.key, &content)
    }

    /// Forget any persisted settings.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}
