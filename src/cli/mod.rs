// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module for frontier-admin
//!
//! Handles command-line argument parsing and the non-interactive commands.

pub mod args;
pub mod commands;

pub use args::*;
