// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings controller
//!
//! Keeps the form controls and the in-memory settings snapshot in step,
//! and mediates save, cancel, validation and tab switching. All deferred
//! work (status dismissal, the simulated tenant acknowledgment) goes through
//! the scheduler and runs from `run_pending`.

use std::time::Duration;

use crate::config::{AccessLevel, AppConfig, FormVariant, Platform, Settings};
use crate::error::{AdminError, Result};
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::storage::KeyValueStorage;
use crate::store::SettingsStore;

pub mod bindings;
pub mod surface;

pub use bindings::{ControlBindings, PlatformControls, TabControls};
pub use surface::{FormState, FormSurface, StatusKind, StatusMessage};

pub const SAVED_MESSAGE: &str = "Settings saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save settings. Please try again.";
pub const CANCELLED_MESSAGE: &str = "Changes cancelled. Settings restored.";
pub const INCOMPLETE_MESSAGE: &str = "Please select an option for both Web Apps and Office win32.";

/// Delays for deferred work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dismiss_status_after: Duration,
    pub acknowledge_after: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            dismiss_status_after: Duration::from_secs(3),
            acknowledge_after: Duration::from_millis(500),
        }
    }
}

pub struct SettingsController<K, F, S> {
    store: SettingsStore<K>,
    surface: F,
    bindings: ControlBindings,
    scheduler: S,
    timing: Timing,
    snapshot: Settings,
    active_tab: Option<Platform>,
}

impl<K, F, S> SettingsController<K, F, S>
where
    K: KeyValueStorage,
    F: FormSurface,
    S: Scheduler,
{
    /// Create a controller. Nothing is loaded until `init` or `load_into_ui`.
    pub fn new(
        store: SettingsStore<K>,
        surface: F,
        bindings: ControlBindings,
        scheduler: S,
    ) -> Self {
        let snapshot = store.defaults().clone();
        Self {
            store,
            surface,
            bindings,
            scheduler,
            timing: Timing::default(),
            snapshot,
            active_tab: None,
        }
    }

    /// Build from host configuration and run `init`.
    pub fn from_config(config: &AppConfig, storage: K, surface: F, scheduler: S) -> Self {
        let store = SettingsStore::with_key(storage, config.storage_key.clone(), config.variant);
        let mut controller = Self::new(
            store,
            surface,
            ControlBindings::for_variant(config.variant),
            scheduler,
        )
        .with_timing(Timing {
            dismiss_status_after: config.status_dismiss_after(),
            acknowledge_after: config.acknowledge_after(),
        });
        controller.init();
        controller
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Load persisted settings and, in the tabbed form, open the first tab.
    pub fn init(&mut self) {
        self.load_into_ui();
        if self.bindings.has_tabs() {
            if let Err(e) = self.switch_tab(Platform::WebApps) {
                tracing::warn!(target: "frontier_admin.controller", error = %e, "failed to open first tab");
            }
        }
        tracing::debug!(
            target: "frontier_admin.controller",
            variant = ?self.variant(),
            "admin control initialized"
        );
    }

    pub fn variant(&self) -> FormVariant {
        self.bindings.variant()
    }

    pub fn snapshot(&self) -> &Settings {
        &self.snapshot
    }

    pub fn active_tab(&self) -> Option<Platform> {
        self.active_tab
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn store(&self) -> &SettingsStore<K> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SettingsStore<K> {
        &mut self.store
    }

    /// Push persisted settings into the controls.
    pub fn load_into_ui(&mut self) {
        let settings = self.store.load();

        for (platform, controls) in self.bindings.platforms() {
            let level = settings.access(platform);
            if !self.surface.set_checked(&controls.radio_group, level.as_str()) {
                tracing::debug!(
                    target: "frontier_admin.controller",
                    group = %controls.radio_group,
                    value = level.as_str(),
                    "no radio control for stored value"
                );
            }
            self.surface
                .set_text_value(&controls.groups_input, settings.groups(platform));
        }

        self.snapshot = settings;
        self.refresh_visibility();
    }

    /// Settings as the controls currently show them.
    ///
    /// A missing control, an unchecked group or an unknown value reads as
    /// `noAccess`; a missing group list reads as empty.
    pub fn read_from_ui(&self) -> Settings {
        let mut settings = Settings::defaults_for(self.variant());
        for (platform, controls) in self.bindings.platforms() {
            let level = self.selected_level(&controls.radio_group).unwrap_or_default();
            settings.set_access(platform, level);
            settings.set_groups(
                platform,
                self.surface
                    .text_value(&controls.groups_input)
                    .unwrap_or_default(),
            );
        }
        settings
    }

    /// Public query for the current form configuration.
    pub fn get_configuration(&self) -> Settings {
        self.read_from_ui()
    }

    /// Persist the form. On failure the controls and snapshot are left as they are.
    pub fn save(&mut self) -> Result<()> {
        let settings = self.read_from_ui();

        match self.store.save(&settings) {
            Ok(()) => {
                self.snapshot = settings.clone();
                tracing::info!(
                    target: "frontier_admin.controller",
                    settings = ?settings,
                    "Frontier admin control settings saved"
                );
                self.show_status(SAVED_MESSAGE, StatusKind::Success);
                self.scheduler.schedule(
                    self.timing.acknowledge_after,
                    ScheduledTask::Acknowledge(settings),
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    target: "frontier_admin.controller",
                    error = %e,
                    "failed to save settings"
                );
                self.show_status(SAVE_FAILED_MESSAGE, StatusKind::Error);
                Err(e.into())
            }
        }
    }

    /// Discard unsaved edits.
    pub fn cancel(&mut self) {
        self.load_into_ui();
        self.show_status(CANCELLED_MESSAGE, StatusKind::Info);
    }

    /// Both radio groups must carry a recognized selection.
    pub fn validate(&mut self) -> bool {
        let valid = self
            .bindings
            .platforms()
            .all(|(_, controls)| self.selected_level(&controls.radio_group).is_some());

        if !valid {
            self.show_status(INCOMPLETE_MESSAGE, StatusKind::Error);
        }
        valid
    }

    /// Activate one tab and its panel, deactivating all others.
    pub fn switch_tab(&mut self, tab: Platform) -> Result<()> {
        if !self.bindings.has_tabs() {
            return Err(AdminError::InvalidInput(format!(
                "{:?} form has no tabs",
                self.variant()
            )));
        }

        for (platform, controls) in self.bindings.platforms() {
            if let Some(tab_controls) = &controls.tab {
                let active = platform == tab;
                self.surface.set_active(&tab_controls.button, active);
                self.surface.set_active(&tab_controls.panel, active);
            }
        }
        self.active_tab = Some(tab);
        self.refresh_visibility();
        Ok(())
    }

    /// Radio change or group list input.
    pub fn on_setting_change(&mut self) {
        self.snapshot = self.read_from_ui();
        self.refresh_visibility();
        tracing::debug!(
            target: "frontier_admin.controller",
            settings = ?self.snapshot,
            "settings changed"
        );
    }

    /// Select an access level as a user would, then react to the change.
    pub fn choose(&mut self, platform: Platform, level: AccessLevel) -> bool {
        let group = self.bindings.platform(platform).radio_group.clone();
        let changed = self.surface.set_checked(&group, level.as_str());
        if changed {
            self.on_setting_change();
        }
        changed
    }

    /// Type into a platform's group list, then react to the change.
    pub fn enter_groups(&mut self, platform: Platform, groups: &str) -> bool {
        let input = self.bindings.platform(platform).groups_input.clone();
        let changed = self.surface.set_text_value(&input, groups);
        if changed {
            self.on_setting_change();
        }
        changed
    }

    /// Human-readable meaning of a level for this form.
    pub fn describe(&self, platform: Platform, level: AccessLevel) -> &'static str {
        level.description_for(platform, self.variant())
    }

    /// Show a transient status message.
    pub fn notify(&mut self, text: &str, kind: StatusKind) {
        self.show_status(text, kind);
    }

    /// Run every scheduled task that is due. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let tasks = self.scheduler.take_due();
        let count = tasks.len();
        for task in tasks {
            match task {
                ScheduledTask::DismissStatus => self.surface.hide_status(),
                ScheduledTask::Acknowledge(settings) => self.acknowledge(&settings),
            }
        }
        count
    }

    fn acknowledge(&self, settings: &Settings) {
        tracing::info!(
            target: "frontier_admin.api",
            applied_at = %chrono::Utc::now().to_rfc3339(),
            "API Response: Settings successfully applied to tenant"
        );
        for platform in Platform::all() {
            let level = settings.access(*platform);
            tracing::info!(
                target: "frontier_admin.api",
                platform = platform.label(),
                level = level.as_str(),
                "{} access level: {}",
                platform.label(),
                self.describe(*platform, level)
            );
        }
    }

    fn selected_level(&self, group: &str) -> Option<AccessLevel> {
        self.surface
            .checked_value(group)
            .and_then(|value| value.parse().ok())
    }

    fn show_status(&mut self, text: &str, kind: StatusKind) {
        self.surface.show_status(text, kind);
        self.scheduler
            .schedule(self.timing.dismiss_status_after, ScheduledTask::DismissStatus);
    }

    /// Group lists are visible exactly when their platform is set to specific groups.
    fn refresh_visibility(&mut self) {
        for (_, controls) in self.bindings.platforms() {
            let visible = self
                .selected_level(&controls.radio_group)
                .is_some_and(|level| level.needs_groups());
            self.surface.set_visible(&controls.groups_input, visible);
        }
    }
}
