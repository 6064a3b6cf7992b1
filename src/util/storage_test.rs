use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("token").unwrap(), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "t1").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("t1"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::with_entries([("token", "old")]);
    storage.set("token", "new").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("new"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::with_entries([("user", "{}")]);
    storage.remove("token");
    assert_eq!(storage.snapshot().len(), 1);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    other.set("user", "{}").unwrap();
    assert_eq!(storage.get("user").unwrap().as_deref(), Some("{}"));
    storage.remove("user");
    assert!(other.is_empty());
}

// =============================================================
// BrowserStorage
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_nothing_outside_browser() {
    let storage = BrowserStorage;
    storage.set("token", "t1").unwrap();
    assert_eq!(storage.get("token").unwrap(), None);
    storage.remove("token");
}
