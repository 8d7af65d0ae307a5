// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! frontier-admin - administrator control for Frontier feature access.
//!
//! An administrator picks an access level (no access, all users, specific
//! groups) for two platforms, Web Apps and Office win32, and the choice is
//! persisted under a single storage key.
//!
//! Architecture highlights:
//! - `store`: load/save of [`config::Settings`] with defaults merged under stored values
//! - `controller`: form logic over an abstract [`controller::FormSurface`]
//! - `storage`: key/value backends (in-memory and file-backed)
//! - `scheduler`: deferred status dismissal and save acknowledgment
//! - `tui`, `cli`: interactive form and non-interactive commands

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod scheduler;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::{AdminError, Result};
