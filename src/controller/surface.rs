// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Form surface
//!
//! The controller only ever talks to controls through `FormSurface`, by
//! identifier. `FormState` is the in-memory implementation that the terminal
//! form renders.

use std::collections::BTreeMap;

use crate::config::AccessLevel;

use super::bindings::ControlBindings;

/// Status message flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Named controls with gettable and settable state
///
/// Setters return `false` when no control with that identifier exists.
pub trait FormSurface {
    /// Value of the checked radio in `group`, if any.
    fn checked_value(&self, group: &str) -> Option<String>;

    /// Check the radio carrying `value` in `group`.
    fn set_checked(&mut self, group: &str, value: &str) -> bool;

    fn text_value(&self, id: &str) -> Option<String>;

    fn set_text_value(&mut self, id: &str, value: &str) -> bool;

    fn is_visible(&self, id: &str) -> Option<bool>;

    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    /// Active state of a tab activator or panel.
    fn is_active(&self, id: &str) -> Option<bool>;

    fn set_active(&mut self, id: &str, active: bool) -> bool;

    fn show_status(&mut self, text: &str, kind: StatusKind);

    fn hide_status(&mut self);
}

/// Mutually exclusive choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    pub options: Vec<String>,
    pub checked: Option<String>,
}

/// Free-text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    pub value: String,
    pub visible: bool,
}

/// In-memory form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    radios: BTreeMap<String, RadioGroup>,
    texts: BTreeMap<String, TextArea>,
    toggles: BTreeMap<String, bool>,
    status: Option<StatusMessage>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with every control named by `bindings`. Radios start unchecked,
    /// text areas empty and hidden, tabs inactive.
    pub fn for_bindings(bindings: &ControlBindings) -> Self {
        let levels: Vec<String> = AccessLevel::all()
            .iter()
            .map(|l| l.as_str().to_string())
            .collect();

        let mut form = Self::new();
        for (_, controls) in bindings.platforms() {
            form.add_radio_group(&controls.radio_group, levels.clone());
            form.add_text_area(&controls.groups_input);
            if let Some(tab) = &controls.tab {
                form.add_toggle(&tab.button);
                form.add_toggle(&tab.panel);
            }
        }
        form
    }

    pub fn add_radio_group(&mut self, name: &str, options: Vec<String>) {
        self.radios.insert(
            name.to_string(),
            RadioGroup {
                options,
                checked: None,
            },
        );
    }

    pub fn add_text_area(&mut self, id: &str) {
        self.texts.insert(id.to_string(), TextArea::default());
    }

    pub fn add_toggle(&mut self, id: &str) {
        self.toggles.insert(id.to_string(), false);
    }

    /// Drop a control of any kind. Returns whether something was removed.
    pub fn remove_control(&mut self, id: &str) -> bool {
        let radio = self.radios.remove(id).is_some();
        let text = self.texts.remove(id).is_some();
        let toggle = self.toggles.remove(id).is_some();
        radio || text || toggle
    }

    /// Clear the checked radio of `group`.
    pub fn uncheck(&mut self, group: &str) -> bool {
        match self.radios.get_mut(group) {
            Some(radio) => {
                radio.checked = None;
                true
            }
            None => false,
        }
    }

    pub fn radio_group(&self, name: &str) -> Option<&RadioGroup> {
        self.radios.get(name)
    }

    pub fn text_area(&self, id: &str) -> Option<&TextArea> {
        self.texts.get(id)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}

impl FormSurface for FormState {
    fn checked_value(&self, group: &str) -> Option<String> {
        self.radios.get(group).and_then(|r| r.checked.clone())
    }

    fn set_checked(&mut self, group: &str, value: &str) -> bool {
        match self.radios.get_mut(group) {
            Some(radio) if radio.options.iter().any(|o| o == value) => {
                radio.checked = Some(value.to_string());
                true
            }
            _ => false,
        }
    }

    fn text_value(&self, id: &str) -> Option<String> {
        self.texts.get(id).map(|t| t.value.clone())
    }

    fn set_text_value(&mut self, id: &str, value: &str) -> bool {
        match self.texts.get_mut(id) {
            Some(text) => {
                text.value = value.to_string();
                true
            }
            None => false,
        }
    }

    fn is_visible(&self, id: &str) -> Option<bool> {
        self.texts.get(id).map(|t| t.visible)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.texts.get_mut(id) {
            Some(text) => {
                text.visible = visible;
                true
            }
            None => false,
        }
    }

    fn is_active(&self, id: &str) -> Option<bool> {
        self.toggles.get(id).copied()
    }

    fn set_active(&mut self, id: &str, active: bool) -> bool {
        match self.toggles.get_mut(id) {
            Some(flag) => {
                *flag = active;
                true
            }
            None => false,
        }
    }

    fn show_status(&mut self, text: &str, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            kind,
        });
    }

    fn hide_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormVariant;

    #[test]
    fn test_for_bindings_classic() {
        let form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Classic));

        let radio = form.radio_group("webApps").unwrap();
        assert_eq!(radio.options.len(), 3);
        assert!(radio.checked.is_none());
        assert_eq!(form.is_visible("officeWin32Groups"), Some(false));
        assert_eq!(form.is_active("webAppsTab"), None);
    }

    #[test]
    fn test_for_bindings_tabbed_has_toggles() {
        let form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Tabbed));
        assert_eq!(form.is_active("webAppsTab"), Some(false));
        assert_eq!(form.is_active("officeWin32Panel"), Some(false));
    }

    #[test]
    fn test_set_checked_requires_known_option() {
        let mut form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Classic));

        assert!(form.set_checked("webApps", "allUsers"));
        assert!(!form.set_checked("webApps", "everyone"));
        assert!(!form.set_checked("missing", "allUsers"));
        assert_eq!(form.checked_value("webApps").as_deref(), Some("allUsers"));
    }

    #[test]
    fn test_radio_selection_is_exclusive() {
        let mut form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Classic));
        form.set_checked("webApps", "allUsers");
        form.set_checked("webApps", "specificGroups");
        assert_eq!(
            form.checked_value("webApps").as_deref(),
            Some("specificGroups")
        );
    }

    #[test]
    fn test_text_and_visibility() {
        let mut form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Classic));

        assert!(form.set_text_value("webAppsGroups", "group-A"));
        assert!(form.set_visible("webAppsGroups", true));
        assert_eq!(form.text_value("webAppsGroups").as_deref(), Some("group-A"));
        assert_eq!(form.is_visible("webAppsGroups"), Some(true));
        assert!(!form.set_text_value("nope", "x"));
        assert!(!form.set_visible("nope", true));
    }

    #[test]
    fn test_remove_and_uncheck() {
        let mut form = FormState::for_bindings(&ControlBindings::for_variant(FormVariant::Classic));
        form.set_checked("officeWin32", "noAccess");

        assert!(form.uncheck("officeWin32"));
        assert!(form.checked_value("officeWin32").is_none());
        assert!(form.remove_control("officeWin32"));
        assert!(!form.remove_control("officeWin32"));
        assert!(!form.uncheck("officeWin32"));
    }

    #[test]
    fn test_status_show_and_hide() {
        let mut form = FormState::new();
        form.show_status("Saved", StatusKind::Success);
        assert_eq!(form.status().unwrap().kind, StatusKind::Success);

        form.hide_status();
        assert!(form.status().is_none());
    }
}
