// QuickUrl Storage Service
// Persists the ordered entry list as a JSON array in a named key-value slot.
// Missing or undecodable data falls back to a fixed seed list.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::Database;
use crate::types::entry::ListEntry;
use crate::types::errors::StorageError;

/// Slot name used when settings do not override it.
pub const DEFAULT_SLOT_KEY: &str = "savedURLItems";

/// Trait defining the storage interface the list manager persists through.
pub trait StorageServiceTrait {
    /// Returns the persisted list, or [`default_entries`] when nothing usable is stored.
    fn load(&self) -> Vec<ListEntry>;
    /// Replaces the persisted list with `items`.
    fn save(&self, items: &[ListEntry]) -> Result<(), StorageError>;
}

/// Ids of the seed entries. Fixed so that a seed handed out before the
/// first save still names the same entries on the next load.
const SEED_IDS: [u128; 4] = [
    0x5155_6c00_0000_4000_8000_0000_0000_0001,
    0x5155_6c00_0000_4000_8000_0000_0000_0002,
    0x5155_6c00_0000_4000_8000_0000_0000_0003,
    0x5155_6c00_0000_4000_8000_0000_0000_0004,
];

/// Entries seeded on first run and after corruption.
pub fn default_entries() -> Vec<ListEntry> {
    let entries = [
        ListEntry::new("Google", "https://www.google.com"),
        ListEntry::new("GitHub", "https://github.com"),
        ListEntry::divider(),
        ListEntry::new("Stack Overflow", "https://stackoverflow.com"),
    ];
    entries
        .into_iter()
        .zip(SEED_IDS)
        .map(|(entry, id)| ListEntry {
            id: Uuid::from_u128(id),
            ..entry
        })
        .collect()
}

/// Encodes entries as a JSON array, preserving order.
pub fn encode_entries(items: &[ListEntry]) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(items)?)
}

pub fn decode_entries(bytes: &[u8]) -> Result<Vec<ListEntry>, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn decode_or_seed(stored: Option<Vec<u8>>) -> Vec<ListEntry> {
    let Some(bytes) = stored else {
        debug!("No stored entries, seeding defaults");
        return default_entries();
    };
    match decode_entries(&bytes) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Stored entries are undecodable, seeding defaults");
            default_entries()
        }
    }
}

/// SQLite-backed storage writing to a single key-value slot.
pub struct StorageService {
    db: Arc<Database>,
    slot_key: String,
}

impl StorageService {
    pub fn new(db: Arc<Database>, slot_key: &str) -> Self {
        Self {
            db,
            slot_key: slot_key.to_string(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }
}

impl StorageServiceTrait for StorageService {
    fn load(&self) -> Vec<ListEntry> {
        match self.db.read_slot(&self.slot_key) {
            Ok(stored) => decode_or_seed(stored),
            Err(e) => {
                warn!(error = %e, slot = %self.slot_key, "Failed to read entries, seeding defaults");
                default_entries()
            }
        }
    }

    fn save(&self, items: &[ListEntry]) -> Result<(), StorageError> {
        let bytes = encode_entries(items)?;
        self.db.write_slot(&self.slot_key, &bytes)?;
        debug!(count = items.len(), slot = %self.slot_key, "Saved entries");
        Ok(())
    }
}

/// In-process storage double. Holds the encoded bytes so loads exercise the
/// same decoding path as the database-backed service.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<Vec<u8>>>,
    fail_writes: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw slot contents, e.g. corrupt bytes.
    pub fn with_raw(bytes: &[u8]) -> Self {
        let storage = Self::default();
        storage.slot.replace(Some(bytes.to_vec()));
        storage
    }

    /// Makes every subsequent `save` fail until switched back.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    pub fn raw(&self) -> Option<Vec<u8>> {
        self.slot.borrow().clone()
    }
}

impl StorageServiceTrait for MemoryStorage {
    fn load(&self) -> Vec<ListEntry> {
        decode_or_seed(self.slot.borrow().clone())
    }

    fn save(&self, items: &[ListEntry]) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Database("write rejected".to_string()));
        }
        let bytes = encode_entries(items)?;
        self.slot.replace(Some(bytes));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

impl<T: StorageServiceTrait + ?Sized> StorageServiceTrait for Box<T> {
    fn load(&self) -> Vec<ListEntry> {
        (**self).load()
    }

    fn save(&self, items: &[ListEntry]) -> Result<(), StorageError> {
        (**self).save(items)
    }
}

impl<T: StorageServiceTrait + ?Sized> StorageServiceTrait for std::rc::Rc<T> {
    fn load(&self) -> Vec<ListEntry> {
        (**self).load()
    }

    fn save(&self, items: &[ListEntry]) -> Result<(), StorageError> {
        (**self).save(items)
    }
}
