// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for frontier-admin.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{AccessLevel, FormVariant};

/// Frontier admin control
#[derive(Parser, Debug)]
#[command(name = "frontier-admin")]
#[command(version, about = "Choose Frontier access levels for Web Apps and Office win32")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Home directory holding config.toml and local storage
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Form variant (overrides config.toml)
    #[arg(long, global = true)]
    pub variant: Option<FormVariant>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default when no command given)
    Form,

    /// Show the saved configuration
    Show,

    /// Change access levels and save
    Set(SetArgs),

    /// Check that both platforms have an access level
    Validate,

    /// Forget saved settings
    Reset,
}

/// Arguments for the set subcommand
#[derive(clap::Args, Debug, Default)]
pub struct SetArgs {
    /// Web Apps access level (noAccess, allUsers, specificGroups)
    #[arg(long)]
    pub web_apps: Option<AccessLevel>,

    /// Office win32 access level (noAccess, allUsers, specificGroups)
    #[arg(long = "office-win32")]
    pub office_win32: Option<AccessLevel>,

    /// Group list for Web Apps
    #[arg(long)]
    pub web_apps_groups: Option<String>,

    /// Group list for Office win32
    #[arg(long = "office-win32-groups")]
    pub office_win32_groups: Option<String>,
}

impl SetArgs {
    pub fn is_empty(&self) -> bool {
        self.web_apps.is_none()
            && self.office_win32.is_none()
            && self.web_apps_groups.is_none()
            && self.office_win32_groups.is_none()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
