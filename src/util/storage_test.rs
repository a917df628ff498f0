#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_stores_and_loads() {
    let storage = MemoryStorage::new();
    storage.store("record");
    assert_eq!(storage.load(), Some("record".to_owned()));
}

#[test]
fn memory_storage_overwrites_on_store() {
    let storage = MemoryStorage::new();
    storage.store("first");
    storage.store("second");
    assert_eq!(storage.load(), Some("second".to_owned()));
}

#[test]
fn memory_storage_clear_removes_record() {
    let storage = MemoryStorage::new();
    storage.store("record");
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_instances_are_isolated() {
    let a = MemoryStorage::new();
    let b = MemoryStorage::new();
    a.store("only-in-a");
    assert_eq!(b.load(), None);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[test]
fn browser_storage_is_noop_in_non_hydrate_tests() {
    let storage = BrowserStorage;
    storage.store("record");
    assert_eq!(storage.load(), None);
    storage.clear();
}
