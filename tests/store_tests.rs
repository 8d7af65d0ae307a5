// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use frontier_admin::config::{AccessLevel, FormVariant, Settings};
use frontier_admin::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use frontier_admin::store::SettingsStore;
use proptest::prelude::*;
use tempfile::TempDir;

fn access_level() -> impl Strategy<Value = AccessLevel> {
    prop_oneof![
        Just(AccessLevel::NoAccess),
        Just(AccessLevel::AllUsers),
        Just(AccessLevel::SpecificGroups),
    ]
}

fn settings() -> impl Strategy<Value = Settings> {
    (access_level(), access_level(), ".*", ".*").prop_map(
        |(web_apps, office_win32, web_apps_groups, office_win32_groups)| Settings {
            web_apps,
            office_win32,
            web_apps_groups,
            office_win32_groups,
        },
    )
}

proptest! {
    #[test]
    fn prop_save_then_load_is_lossless(value in settings()) {
        let mut store = SettingsStore::new(MemoryStorage::new(), FormVariant::Classic);
        store.save(&value).unwrap();
        prop_assert_eq!(store.load(), value);
    }
}

#[test]
fn test_load_empty_storage_returns_defaults() {
    let store = SettingsStore::new(MemoryStorage::new(), FormVariant::Classic);
    let loaded = store.load();
    assert_eq!(loaded, Settings::defaults_for(FormVariant::Classic));
    assert_eq!(loaded.web_apps, AccessLevel::NoAccess);
    assert_eq!(loaded.office_win32, AccessLevel::NoAccess);
    assert_eq!(loaded.web_apps_groups, "");
    assert_eq!(loaded.office_win32_groups, "");
}

#[test]
fn test_tabbed_defaults_open_office_to_all_users() {
    let store = SettingsStore::new(MemoryStorage::new(), FormVariant::Tabbed);
    assert_eq!(store.load().office_win32, AccessLevel::AllUsers);
}

#[test]
fn test_partial_blob_merges_over_defaults() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item("frontierAdminSettings", r#"{"webApps":"allUsers"}"#)
        .unwrap();
    let store = SettingsStore::new(storage, FormVariant::Classic);

    let loaded = store.load();
    assert_eq!(loaded.web_apps, AccessLevel::AllUsers);
    assert_eq!(loaded.office_win32, AccessLevel::NoAccess);
    assert_eq!(loaded.web_apps_groups, "");
    assert_eq!(loaded.office_win32_groups, "");
}

#[test]
fn test_malformed_blob_returns_defaults() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item("frontierAdminSettings", "{not json")
        .unwrap();
    let store = SettingsStore::new(storage, FormVariant::Classic);
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_file_storage_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut value = Settings::default();
    value.web_apps = AccessLevel::SpecificGroups;
    value.web_apps_groups = "group-A\ngroup-B".to_string();

    let mut store = SettingsStore::new(FileStorage::new(&path), FormVariant::Classic);
    store.save(&value).unwrap();
    drop(store);

    let reopened = SettingsStore::new(FileStorage::new(&path), FormVariant::Classic);
    assert_eq!(reopened.load(), value);
}

#[test]
fn test_file_storage_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut storage = FileStorage::new(&path);
    storage.set_item("theme", "dark").unwrap();

    let mut store = SettingsStore::new(storage, FormVariant::Classic);
    store.save(&Settings::default()).unwrap();
    store.clear().unwrap();

    assert_eq!(
        store.storage().get_item("theme").unwrap().as_deref(),
        Some("dark")
    );
    assert!(store
        .storage()
        .get_item("frontierAdminSettings")
        .unwrap()
        .is_none());
}

#[test]
fn test_save_over_quota_fails_and_keeps_previous() {
    let mut store = SettingsStore::new(MemoryStorage::with_quota(150), FormVariant::Classic);
    store.save(&Settings::default()).unwrap();

    let mut big = Settings::default();
    big.web_apps = AccessLevel::SpecificGroups;
    big.web_apps_groups = "g".repeat(500);
    assert!(store.save(&big).is_err());
    assert_eq!(store.load(), Settings::default());
}
