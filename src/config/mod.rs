// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for Frontier admin control
//!
//! Holds the persisted access settings record and the host configuration.

pub mod app;
pub mod settings;

pub use app::{AppConfig, DEFAULT_STORAGE_KEY};
pub use settings::*;
