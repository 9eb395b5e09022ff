//! Integration tests for ledger persistence.

use hokusai_core::{NoteId, UsageLedger};
use hokusai_pipeline::LedgerStore;
use std::fs;
use tempfile::TempDir;

fn id(s: &str) -> NoteId {
    s.parse().unwrap()
}

#[test]
fn absent_file_loads_the_default_ledger() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));

    let ledger = store.load().unwrap();
    assert!(ledger.used_notes().is_empty());
    assert_eq!(*ledger.total_available(), 100);
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));

    let ledger = UsageLedger::default().mark_used(&id("007"));
    store.save(&ledger).unwrap();
    assert_eq!(store.load().unwrap(), ledger);
}

#[test]
fn corrupt_file_is_surfaced_not_reset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("usage_log.json");
    fs::write(&path, "{ this is not json").unwrap();
    let store = LedgerStore::new(&path);

    let err = store.load().unwrap_err();
    assert!(format!("{}", err).contains("corrupt"));

    // The broken file must be left in place for the operator.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
}

#[test]
fn mark_used_is_idempotent_through_the_store() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));

    let once = store.mark_used(&id("003")).unwrap();
    let twice = store.mark_used(&id("003")).unwrap();
    assert_eq!(once.used_notes(), twice.used_notes());
    assert_eq!(twice.used_count(), 1);
}

#[test]
fn mark_used_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("data").join("usage_log.json"));

    store.mark_used(&id("001")).unwrap();
    assert!(store.path().exists());
}

#[test]
fn no_temp_file_survives_a_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("usage_log.json");
    let store = LedgerStore::new(&path);

    store.save(&UsageLedger::default()).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn ledger_file_uses_the_documented_field_names() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));
    store.mark_used(&id("001")).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["used_notes"][0], "001");
    assert_eq!(value["total_available"], 100);
    assert!(value["last_updated"].is_string());
}
