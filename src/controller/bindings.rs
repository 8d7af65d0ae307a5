// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Control binding table
//!
//! Maps each logical field of the form to the identifier of the control that
//! holds it. Built once at startup and consulted by every read/write helper.

use crate::config::{FormVariant, Platform};

/// Tab activator and the panel it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabControls {
    pub button: String,
    pub panel: String,
}

/// Controls belonging to one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformControls {
    /// Radio group holding the access level
    pub radio_group: String,
    /// Group list text area
    pub groups_input: String,
    /// Present in the tabbed variant only
    pub tab: Option<TabControls>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBindings {
    variant: FormVariant,
    web_apps: PlatformControls,
    office_win32: PlatformControls,
    pub save_button: String,
    pub cancel_button: String,
    pub status: String,
}

impl ControlBindings {
    pub fn for_variant(variant: FormVariant) -> Self {
        let platform_controls = |platform: Platform| {
            let key = platform.key();
            let tab = match variant {
                FormVariant::Classic => None,
                FormVariant::Tabbed => Some(TabControls {
                    button: format!("{}Tab", key),
                    panel: format!("{}Panel", key),
                }),
            };
            PlatformControls {
                radio_group: key.to_string(),
                groups_input: format!("{}Groups", key),
                tab,
            }
        };

        Self {
            variant,
            web_apps: platform_controls(Platform::WebApps),
            office_win32: platform_controls(Platform::OfficeWin32),
            save_button: "saveBtn".to_string(),
            cancel_button: "cancelBtn".to_string(),
            status: "statusMessage".to_string(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn platform(&self, platform: Platform) -> &PlatformControls {
        match platform {
            Platform::WebApps => &self.web_apps,
            Platform::OfficeWin32 => &self.office_win32,
        }
    }

    pub fn platforms(&self) -> impl Iterator<Item = (Platform, &PlatformControls)> {
        Platform::all().iter().map(move |p| (*p, self.platform(*p)))
    }

    pub fn has_tabs(&self) -> bool {
        self.platforms().any(|(_, controls)| controls.tab.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_bindings() {
        let bindings = ControlBindings::for_variant(FormVariant::Classic);
        let web = bindings.platform(Platform::WebApps);

        assert_eq!(web.radio_group, "webApps");
        assert_eq!(web.groups_input, "webAppsGroups");
        assert!(web.tab.is_none());
        assert!(!bindings.has_tabs());
        assert_eq!(bindings.save_button, "saveBtn");
        assert_eq!(bindings.cancel_button, "cancelBtn");
        assert_eq!(bindings.status, "statusMessage");
    }

    #[test]
    fn test_tabbed_bindings() {
        let bindings = ControlBindings::for_variant(FormVariant::Tabbed);
        let office = bindings.platform(Platform::OfficeWin32);

        assert_eq!(office.radio_group, "officeWin32");
        assert_eq!(office.groups_input, "officeWin32Groups");
        let tab = office.tab.as_ref().unwrap();
        assert_eq!(tab.button, "officeWin32Tab");
        assert_eq!(tab.panel, "officeWin32Panel");
        assert!(bindings.has_tabs());
        assert_eq!(bindings.variant(), FormVariant::Tabbed);
    }

    #[test]
    fn test_platforms_in_display_order() {
        let bindings = ControlBindings::for_variant(FormVariant::Classic);
        let order: Vec<Platform> = bindings.platforms().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Platform::WebApps, Platform::OfficeWin32]);
    }
}
