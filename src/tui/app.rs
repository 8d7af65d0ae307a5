// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Wraps the settings controller with focus, editing and tab navigation for
//! the terminal form.

use crate::config::{AccessLevel, FormVariant, Platform};
use crate::controller::{FormState, FormSurface, SettingsController, StatusKind};
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStorage;

/// Result of input handling
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Editing a group list
    Editing,
}

/// Focusable form element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusItem {
    /// Access level radio group
    Access(Platform),
    /// Group list text area (only while visible)
    Groups(Platform),
    Save,
    Cancel,
}

impl FocusItem {
    pub fn label(&self) -> &'static str {
        match self {
            FocusItem::Access(_) => "Access",
            FocusItem::Groups(_) => "Groups",
            FocusItem::Save => "Save",
            FocusItem::Cancel => "Cancel",
        }
    }
}

/// Application state
pub struct App<K, S> {
    /// Settings controller owning the form
    pub controller: SettingsController<K, FormState, S>,
    /// Input mode
    pub input_mode: InputMode,
    /// Index into `focus_items()`
    pub focus_index: usize,
    /// Current input buffer for text editing
    pub input_buffer: String,
}

impl<K: KeyValueStorage, S: Scheduler> App<K, S> {
    /// Create a new app around an initialized controller
    pub fn new(controller: SettingsController<K, FormState, S>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Normal,
            focus_index: 0,
            input_buffer: String::new(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.controller.variant()
    }

    /// Platforms shown on screen: the active tab, or both without tabs.
    pub fn visible_platforms(&self) -> Vec<Platform> {
        match self.controller.active_tab() {
            Some(tab) => vec![tab],
            None => Platform::all().to_vec(),
        }
    }

    pub fn group_list_visible(&self, platform: Platform) -> bool {
        let id = &self.controller.bindings().platform(platform).groups_input;
        self.controller.surface().is_visible(id).unwrap_or(false)
    }

    /// Selected level as the form shows it.
    pub fn selected_level(&self, platform: Platform) -> Option<AccessLevel> {
        let group = &self.controller.bindings().platform(platform).radio_group;
        self.controller
            .surface()
            .checked_value(group)
            .and_then(|v| v.parse().ok())
    }

    pub fn group_text(&self, platform: Platform) -> String {
        let id = &self.controller.bindings().platform(platform).groups_input;
        self.controller.surface().text_value(id).unwrap_or_default()
    }

    /// Focus order for the current screen.
    pub fn focus_items(&self) -> Vec<FocusItem> {
        let mut items = Vec::new();
        for platform in self.visible_platforms() {
            items.push(FocusItem::Access(platform));
            if self.group_list_visible(platform) {
                items.push(FocusItem::Groups(platform));
            }
        }
        items.push(FocusItem::Save);
        items.push(FocusItem::Cancel);
        items
    }

    pub fn focused(&self) -> FocusItem {
        let items = self.focus_items();
        let index = self.focus_index.min(items.len() - 1);
        items[index]
    }

    pub fn move_up(&mut self) {
        if self.focus_index > 0 {
            self.focus_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let last = self.focus_items().len() - 1;
        if self.focus_index < last {
            self.focus_index += 1;
        }
    }

    /// Step the focused radio group to the next or previous level.
    pub fn cycle_level(&mut self, forward: bool) {
        let FocusItem::Access(platform) = self.focused() else {
            return;
        };
        let levels = AccessLevel::all();
        let current = self
            .selected_level(platform)
            .and_then(|level| levels.iter().position(|l| *l == level));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % levels.len(),
            (Some(0), false) => levels.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.controller.choose(platform, levels[next]);
        self.refocus(FocusItem::Access(platform));
    }

    /// Activate the focused element
    pub fn select(&mut self) {
        match self.focused() {
            FocusItem::Access(_) => self.cycle_level(true),
            FocusItem::Groups(platform) => self.start_editing(platform),
            FocusItem::Save => self.save(),
            FocusItem::Cancel => self.cancel(),
        }
    }

    pub fn start_editing(&mut self, platform: Platform) {
        self.input_buffer = self.group_text(platform);
        self.input_mode = InputMode::Editing;
    }

    pub fn confirm_edit(&mut self) {
        if let FocusItem::Groups(platform) = self.focused() {
            let text = std::mem::take(&mut self.input_buffer);
            self.controller.enter_groups(platform, &text);
        }
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_editing(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn save(&mut self) {
        // The controller already reports failures on the status line.
        if let Err(e) = self.controller.save() {
            tracing::debug!(target: "frontier_admin.tui", error = %e, "save failed");
        }
    }

    pub fn cancel(&mut self) {
        let focused = self.focused();
        self.controller.cancel();
        self.refocus(focused);
    }

    pub fn validate(&mut self) {
        if self.controller.validate() {
            self.controller
                .notify("Both platforms have an access level.", StatusKind::Info);
        }
    }

    /// Move to the next (or previous) tab in the tabbed form.
    pub fn switch_tab(&mut self, forward: bool) {
        let Some(current) = self.controller.active_tab() else {
            return;
        };
        let tabs = Platform::all();
        let i = tabs.iter().position(|t| *t == current).unwrap_or(0);
        let next = if forward {
            (i + 1) % tabs.len()
        } else if i == 0 {
            tabs.len() - 1
        } else {
            i - 1
        };
        if self.controller.switch_tab(tabs[next]).is_ok() {
            self.focus_index = 0;
        }
    }

    /// Run deferred work that has come due
    pub fn tick(&mut self) {
        self.controller.run_pending();
    }

    /// Keep focus on `item` after the focus order changed, or clamp if it is gone.
    fn refocus(&mut self, item: FocusItem) {
        let items = self.focus_items();
        self.focus_index = items
            .iter()
            .position(|i| *i == item)
            .unwrap_or_else(|| self.focus_index.min(items.len() - 1));
    }
}
