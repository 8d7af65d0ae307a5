// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::Settings;

impl Settings {
    /// Overlay a stored JSON value on top of `defaults`, field by field.
    ///
    /// Non-object values yield the defaults unchanged. Known keys that fail to
    /// deserialize keep their default; unknown keys are ignored.
    pub fn merged_over(defaults: &Settings, stored: &Value) -> Settings {
        let Value::Object(map) = stored else {
            tracing::warn!(
                target: "frontier_admin.store",
                "stored settings are not an object, using defaults"
            );
            return defaults.clone();
        };

        Settings {
            web_apps: field_or(map, "webApps", defaults.web_apps),
            office_win32: field_or(map, "officeWin32", defaults.office_win32),
            web_apps_groups: field_or(map, "webAppsGroups", defaults.web_apps_groups.clone()),
            office_win32_groups: field_or(
                map,
                "officeWin32Groups",
                defaults.office_win32_groups.clone(),
            ),
        }
    }
}

fn field_or<T: DeserializeOwned>(map: &Map<String, Value>, key: &str, default: T) -> T {
    let Some(value) = map.get(key) else {
        return default;
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(
                target: "frontier_admin.store",
                key,
                error = %e,
                "ignoring unreadable stored field"
            );
            default
        }
    }
}
