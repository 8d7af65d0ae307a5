// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Non-interactive commands
//!
//! Each command drives the same controller as the interactive form, over an
//! in-memory form and a virtual clock, and writes its report to `out`.

use std::io::Write;

use crate::config::{AppConfig, Platform, Settings};
use crate::controller::{ControlBindings, FormState, SettingsController};
use crate::error::{AdminError, Result};
use crate::scheduler::ManualScheduler;
use crate::storage::KeyValueStorage;
use crate::store::SettingsStore;

use super::args::{OutputFormat, SetArgs};

type HeadlessController<K> = SettingsController<K, FormState, ManualScheduler>;

fn headless<K: KeyValueStorage>(config: &AppConfig, storage: K) -> HeadlessController<K> {
    let form = FormState::for_bindings(&ControlBindings::for_variant(config.variant));
    SettingsController::from_config(config, storage, form, ManualScheduler::new())
}

/// Run every queued task, jumping the virtual clock as needed.
fn drain<K: KeyValueStorage>(controller: &mut HeadlessController<K>) {
    while controller.scheduler_mut().skip_to_next() {
        controller.run_pending();
    }
}

/// Render settings as text, one platform per block.
pub fn format_settings(settings: &Settings, config: &AppConfig) -> String {
    let mut out = String::new();
    for platform in Platform::all() {
        let level = settings.access(*platform);
        out.push_str(&format!(
            "{:<14}{:<16}{}\n",
            format!("{}:", platform.label()),
            level.as_str(),
            level.description_for(*platform, config.variant)
        ));
        if level.needs_groups() {
            out.push_str(&format!("  Groups:     {}\n", settings.groups(*platform)));
        }
    }
    out
}

/// Print the saved configuration.
pub fn show<K: KeyValueStorage, W: Write>(
    config: &AppConfig,
    storage: K,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let store = SettingsStore::with_key(storage, config.storage_key.clone(), config.variant);
    let settings = store.load();

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?,
        OutputFormat::Text => write!(out, "{}", format_settings(&settings, config))?,
    }
    Ok(())
}

/// Apply the requested changes through the form and save them.
pub fn set<K: KeyValueStorage, W: Write>(
    config: &AppConfig,
    storage: K,
    args: &SetArgs,
    out: &mut W,
) -> Result<Settings> {
    if args.is_empty() {
        return Err(AdminError::InvalidInput(
            "nothing to set; pass at least one of --web-apps, --office-win32, --web-apps-groups, --office-win32-groups".to_string(),
        ));
    }

    let mut controller = headless(config, storage);

    let changes = [
        (Platform::WebApps, args.web_apps, &args.web_apps_groups),
        (
            Platform::OfficeWin32,
            args.office_win32,
            &args.office_win32_groups,
        ),
    ];
    for (platform, level, groups) in changes {
        if let Some(level) = level {
            controller.choose(platform, level);
        }
        if let Some(groups) = groups {
            controller.enter_groups(platform, groups);
        }
    }

    let result = controller.save();
    if let Some(status) = controller.surface().status() {
        writeln!(out, "{}", status.text)?;
    }
    result?;

    let saved = controller.snapshot().clone();
    drain(&mut controller);
    Ok(saved)
}

/// Check the saved settings as the form would. Returns whether they are complete.
pub fn validate<K: KeyValueStorage, W: Write>(
    config: &AppConfig,
    storage: K,
    out: &mut W,
) -> Result<bool> {
    let mut controller = headless(config, storage);
    let valid = controller.validate();
    match controller.surface().status() {
        Some(status) if !valid => writeln!(out, "{}", status.text)?,
        _ => writeln!(out, "Settings are valid.")?,
    }
    Ok(valid)
}

/// Remove saved settings so the next load starts from defaults.
pub fn reset<K: KeyValueStorage, W: Write>(config: &AppConfig, storage: K, out: &mut W) -> Result<()> {
    let mut store = SettingsStore::with_key(storage, config.storage_key.clone(), config.variant);
    store.clear()?;
    tracing::info!(target: "frontier_admin.cli", key = store.key(), "saved settings removed");
    writeln!(out, "Settings reset to defaults.")?;
    Ok(())
}
