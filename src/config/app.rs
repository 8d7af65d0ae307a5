// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application configuration, stored in ~/.frontier-admin/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AdminError, Result};

use super::FormVariant;

/// Key under which the settings blob is stored
pub const DEFAULT_STORAGE_KEY: &str = "frontierAdminSettings";

/// Host configuration for the admin form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Form layout (and therefore the Office win32 default)
    pub variant: FormVariant,

    /// Storage key for the settings blob
    pub storage_key: String,

    /// How long a status message stays visible
    pub status_dismiss_ms: u64,

    /// Delay before the simulated tenant acknowledgment
    pub acknowledge_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: FormVariant::Classic,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            status_dismiss_ms: 3000,
            acknowledge_ms: 500,
        }
    }
}

impl AppConfig {
    /// Get the frontier-admin home directory (~/.frontier-admin or $FRONTIER_ADMIN_HOME).
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var("FRONTIER_ADMIN_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".frontier-admin")
    }

    pub fn config_path(home: &Path) -> PathBuf {
        home.join("config.toml")
    }

    /// File backing the key-value storage.
    pub fn storage_path(home: &Path) -> PathBuf {
        home.join("local_storage.json")
    }

    /// Load configuration from a home directory.
    pub fn load_from(home: &Path) -> Result<Self> {
        let path = Self::config_path(home);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        if config.storage_key.trim().is_empty() {
            return Err(AdminError::Config(format!(
                "storage_key in {} must not be empty",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Write configuration into a home directory.
    pub fn save_to(&self, home: &Path) -> Result<()> {
        std::fs::create_dir_all(home)?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::config_path(home), content)?;
        Ok(())
    }

    pub fn status_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.status_dismiss_ms)
    }

    pub fn acknowledge_after(&self) -> Duration {
        Duration::from_millis(self.acknowledge_ms)
    }
}
