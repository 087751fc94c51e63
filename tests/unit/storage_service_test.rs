//! Unit tests for the Storage Service over a real SQLite slot.

use std::sync::Arc;

use quickurl::database::Database;
use quickurl::services::storage_service::{
    default_entries, StorageService, StorageServiceTrait, DEFAULT_SLOT_KEY,
};
use quickurl::types::entry::ListEntry;
use tempfile::TempDir;

fn on_disk() -> (Arc<Database>, TempDir) {
    let tmp = TempDir::new().unwrap();
    let db = Database::open(tmp.path().join("store.db")).unwrap();
    (Arc::new(db), tmp)
}

#[test]
fn test_first_run_returns_seed_and_seed_is_valid() {
    let (db, _tmp) = on_disk();
    let svc = StorageService::new(db, DEFAULT_SLOT_KEY);
    let loaded = svc.load();
    assert_eq!(loaded.len(), default_entries().len());
    assert!(loaded.iter().all(ListEntry::is_valid));
    for entry in &loaded {
        if entry.is_divider {
            assert!(entry.title.is_empty() && entry.target.is_empty());
        } else {
            assert!(!entry.target.is_empty());
        }
    }
}

#[test]
fn test_corrupt_slot_returns_seed() {
    let (db, _tmp) = on_disk();
    db.write_slot(DEFAULT_SLOT_KEY, br#"[{"id":"not-a-uuid"}]"#).unwrap();
    let svc = StorageService::new(db, DEFAULT_SLOT_KEY);
    let titles: Vec<String> = svc.load().into_iter().map(|e| e.title).collect();
    let seed: Vec<String> = default_entries().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, seed);
}

#[test]
fn test_repeated_loads_from_empty_slot_agree_on_ids() {
    let (db, _tmp) = on_disk();
    let svc = StorageService::new(db, DEFAULT_SLOT_KEY);
    assert_eq!(svc.load(), svc.load());
    assert_eq!(svc.load(), default_entries());
}

#[test]
fn test_save_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("store.db");
    let items = vec![
        ListEntry::new("Docs", "https://docs.rs"),
        ListEntry::divider(),
        ListEntry::new("Crates", "https://crates.io"),
    ];

    {
        let svc = StorageService::new(Arc::new(Database::open(&path).unwrap()), DEFAULT_SLOT_KEY);
        svc.save(&items).unwrap();
    }

    let svc = StorageService::new(Arc::new(Database::open(&path).unwrap()), DEFAULT_SLOT_KEY);
    assert_eq!(svc.load(), items);
}

#[test]
fn test_slot_key_isolates_lists() {
    let (db, _tmp) = on_disk();
    let a = StorageService::new(db.clone(), "a");
    let b = StorageService::new(db, "b");
    a.save(&[ListEntry::new("Only A", "https://a.com")]).unwrap();
    b.save(&[]).unwrap();
    assert_eq!(a.load().len(), 1);
    assert!(b.load().is_empty());
    assert_eq!(a.slot_key(), "a");
}

#[test]
fn test_stored_layout_uses_stable_field_names() {
    let (db, _tmp) = on_disk();
    let svc = StorageService::new(db.clone(), DEFAULT_SLOT_KEY);
    let mut entry = ListEntry::new("File", "file:///tmp/x.txt");
    entry.bookmark_token = Some(b"grant".to_vec());
    svc.save(&[entry.clone()]).unwrap();

    let raw = db.read_slot(DEFAULT_SLOT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["id"], entry.id.to_string());
    assert_eq!(record["title"], "File");
    assert_eq!(record["target"], "file:///tmp/x.txt");
    assert_eq!(record["isDivider"], false);
    assert_eq!(record["bookmarkToken"], "Z3JhbnQ=");
}
