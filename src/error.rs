// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Frontier admin control
//!
//! Storage failures have their own enum, returned by the key-value backends
//! and the settings store.

use thiserror::Error;

/// Main error type for admin control operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// Persistent storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Terminal rendering errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Key-value storage failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// The write would exceed the storage quota
    #[error("Quota exceeded: {needed} bytes exceeds limit of {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    /// Storage is switched off for this profile
    #[error("Storage is disabled")]
    Disabled,

    /// Stored content could not be read back
    #[error("Read failed: {0}")]
    Read(String),

    /// Content could not be written
    #[error("Write failed: {0}")]
    Write(String),

    /// Underlying file errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for admin control operations
pub type Result<T> = std::result::Result<T, AdminError>;

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        AdminError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for AdminError {
    fn from(err: toml::ser::Error) -> Self {
        AdminError::Toml(err.to_string())
    }
}
