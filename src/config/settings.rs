// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frontier access settings
//!
//! The record persisted by the settings store: one access level per platform
//! plus the free-text group list that applies when a platform is limited to
//! specific groups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

mod merge;

/// Access level for a Frontier platform feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessLevel {
    /// Features disabled
    #[default]
    NoAccess,
    /// Features enabled for every user
    AllUsers,
    /// Features enabled for the groups named in the group list
    SpecificGroups,
}

impl AccessLevel {
    /// All levels in display order.
    pub fn all() -> &'static [AccessLevel] {
        &[
            AccessLevel::NoAccess,
            AccessLevel::AllUsers,
            AccessLevel::SpecificGroups,
        ]
    }

    /// Stored and control value (`noAccess`, `allUsers`, `specificGroups`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::NoAccess => "noAccess",
            AccessLevel::AllUsers => "allUsers",
            AccessLevel::SpecificGroups => "specificGroups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::NoAccess => "No access",
            AccessLevel::AllUsers => "All users",
            AccessLevel::SpecificGroups => "Specific groups",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccessLevel::NoAccess => "Frontier features are disabled",
            AccessLevel::AllUsers => "Frontier features enabled for all users",
            AccessLevel::SpecificGroups => "Frontier features enabled for specific user groups",
        }
    }

    /// Description as shown for a given platform and form variant.
    ///
    /// The tabbed form hands the Office win32 toggle to users when it is
    /// enabled for everyone.
    pub fn description_for(&self, platform: Platform, variant: FormVariant) -> &'static str {
        match (self, platform, variant) {
            (AccessLevel::AllUsers, Platform::OfficeWin32, FormVariant::Tabbed) => {
                "Frontier features enabled for all users (users control the toggle)"
            }
            _ => self.description(),
        }
    }

    pub fn needs_groups(&self) -> bool {
        matches!(self, AccessLevel::SpecificGroups)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessLevel::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AdminError::InvalidInput(format!("unknown access level: '{}'", s)))
    }
}

/// Platform whose Frontier access is being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    WebApps,
    OfficeWin32,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[Platform::WebApps, Platform::OfficeWin32]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::WebApps => "Web Apps",
            Platform::OfficeWin32 => "Office win32",
        }
    }

    /// Identifier used for the platform's radio group and tab.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::WebApps => "webApps",
            Platform::OfficeWin32 => "officeWin32",
        }
    }
}

impl FromStr for Platform {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::all()
            .iter()
            .copied()
            .find(|platform| platform.key() == s)
            .ok_or_else(|| AdminError::InvalidInput(format!("unknown platform: '{}'", s)))
    }
}

/// Layout of the admin form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Both platforms on one page, no tabs
    #[default]
    Classic,
    /// One tab per platform; Office win32 defaults to all users
    Tabbed,
}

impl FromStr for FormVariant {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(FormVariant::Classic),
            "tabbed" => Ok(FormVariant::Tabbed),
            other => Err(AdminError::InvalidInput(format!(
                "unknown form variant: '{}'",
                other
            ))),
        }
    }
}

/// Persisted Frontier access settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub web_apps: AccessLevel,
    pub office_win32: AccessLevel,
    /// Group list for Web Apps; only meaningful with `SpecificGroups`
    pub web_apps_groups: String,
    /// Group list for Office win32; only meaningful with `SpecificGroups`
    pub office_win32_groups: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults_for(FormVariant::Classic)
    }
}

impl Settings {
    /// Default settings for a form variant.
    pub fn defaults_for(variant: FormVariant) -> Self {
        let office_win32 = match variant {
            FormVariant::Classic => AccessLevel::NoAccess,
            FormVariant::Tabbed => AccessLevel::AllUsers,
        };
        Self {
            web_apps: AccessLevel::NoAccess,
            office_win32,
            web_apps_groups: String::new(),
            office_win32_groups: String::new(),
        }
    }

    pub fn access(&self, platform: Platform) -> AccessLevel {
        match platform {
            Platform::WebApps => self.web_apps,
            Platform::OfficeWin32 => self.office_win32,
        }
    }

    pub fn set_access(&mut self, platform: Platform, level: AccessLevel) {
        match platform {
            Platform::WebApps => self.web_apps = level,
            Platform::OfficeWin32 => self.office_win32 = level,
        }
    }

    pub fn groups(&self, platform: Platform) -> &str {
        match platform {
            Platform::WebApps => &self.web_apps_groups,
            Platform::OfficeWin32 => &self.office_win32_groups,
        }
    }

    pub fn set_groups(&mut self, platform: Platform, groups: impl Into<String>) {
        let groups = groups.into();
        match platform {
            Platform::WebApps => self.web_apps_groups = groups,
            Platform::OfficeWin32 => self.office_win32_groups = groups,
        }
    }
}
