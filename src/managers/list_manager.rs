// QuickUrl List Manager
// Owns the ordered entry list, applies mutations, persists after each one,
// and notifies subscribers.

use std::collections::BTreeSet;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::services::storage_service::StorageServiceTrait;
use crate::types::entry::ListEntry;

/// Change notification sent to subscribers after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Reloaded,
    Added { id: Uuid },
    Updated { id: Uuid },
    Removed { ids: Vec<Uuid> },
    Moved,
}

/// Trait defining the list management interface.
///
/// Lookups by id that miss are silent no-ops and return `false`.
pub trait ListManagerTrait {
    fn load_all(&mut self);
    fn add(&mut self, title: &str, target: &str) -> Uuid;
    fn add_divider(&mut self) -> Uuid;
    fn update(&mut self, id: &Uuid, title: &str, target: &str) -> bool;
    fn update_bookmark_token(&mut self, id: &Uuid, token: Option<Vec<u8>>) -> bool;
    fn delete_at(&mut self, offsets: &[usize]) -> Vec<Uuid>;
    fn move_entries(&mut self, from_offsets: &[usize], to: usize) -> bool;
    fn entries(&self) -> &[ListEntry];
    fn get(&self, id: &Uuid) -> Option<&ListEntry>;
    fn subscribe(&mut self) -> Receiver<ListEvent>;
}

/// Removes the items at `offsets` in one batch.
///
/// Offsets refer to positions before any removal; duplicates and
/// out-of-range offsets are ignored. Returns the removed items in order.
pub fn remove_at_offsets<T>(items: &mut Vec<T>, offsets: &[usize]) -> Vec<T> {
    let targets: BTreeSet<usize> = offsets.iter().copied().filter(|&i| i < items.len()).collect();
    if targets.is_empty() {
        return Vec::new();
    }
    let mut removed = Vec::with_capacity(targets.len());
    let mut kept = Vec::with_capacity(items.len() - targets.len());
    for (i, item) in items.drain(..).enumerate() {
        if targets.contains(&i) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

/// Moves the items at `from_offsets` so they sit at `to`.
///
/// The moved items are removed first and `to` indexes the remaining
/// sequence (clamped to its end). Moved items keep their relative order.
/// Returns false if no offset was in range.
pub fn move_offsets<T>(items: &mut Vec<T>, from_offsets: &[usize], to: usize) -> bool {
    let mut moved = remove_at_offsets(items, from_offsets);
    if moved.is_empty() {
        return false;
    }
    let dest = to.min(items.len());
    let tail = items.split_off(dest);
    items.append(&mut moved);
    items.extend(tail);
    true
}

/// In-memory list manager persisting through a [`StorageServiceTrait`].
pub struct ListManager<S: StorageServiceTrait> {
    storage: S,
    entries: Vec<ListEntry>,
    loaded: bool,
    subscribers: Vec<Sender<ListEvent>>,
}

impl<S: StorageServiceTrait> ListManager<S> {
    /// Creates a manager that loads from `storage` on first use.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            loaded: false,
            subscribers: Vec::new(),
        }
    }

    /// Creates a manager and loads immediately.
    pub fn open(storage: S) -> Self {
        let mut manager = Self::new(storage);
        manager.load_all();
        manager
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn find_index(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    // Mutating an unloaded list would overwrite the stored one on save.
    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load_all();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.entries) {
            warn!(error = %e, "Failed to persist entries; keeping in-memory state");
        }
    }

    fn notify(&mut self, event: ListEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn commit(&mut self, event: ListEvent) {
        self.persist();
        self.notify(event);
    }

    fn push(&mut self, entry: ListEntry) -> Uuid {
        self.ensure_loaded();
        let id = entry.id;
        self.entries.push(entry);
        self.commit(ListEvent::Added { id });
        id
    }
}

impl<S: StorageServiceTrait> ListManagerTrait for ListManager<S> {
    /// Replaces the in-memory list with the stored one.
    fn load_all(&mut self) {
        self.entries = self.storage.load();
        self.loaded = true;
        debug!(count = self.entries.len(), "Loaded entries");
        self.notify(ListEvent::Reloaded);
    }

    fn add(&mut self, title: &str, target: &str) -> Uuid {
        let id = self.push(ListEntry::new(title, target));
        debug!(%id, "Added entry");
        id
    }

    fn add_divider(&mut self) -> Uuid {
        let id = self.push(ListEntry::divider());
        debug!(%id, "Added divider");
        id
    }

    /// Replaces title and target in place, keeping position and bookmark token.
    fn update(&mut self, id: &Uuid, title: &str, target: &str) -> bool {
        self.ensure_loaded();
        let Some(index) = self.find_index(id) else {
            debug!(%id, "Update for unknown entry ignored");
            return false;
        };
        if self.entries[index].is_divider {
            debug!(%id, "Dividers carry no title or target, update ignored");
            return false;
        }
        let entry = &mut self.entries[index];
        entry.title = title.to_string();
        entry.target = target.to_string();
        self.commit(ListEvent::Updated { id: *id });
        true
    }

    fn update_bookmark_token(&mut self, id: &Uuid, token: Option<Vec<u8>>) -> bool {
        self.ensure_loaded();
        let Some(index) = self.find_index(id) else {
            debug!(%id, "Token update for unknown entry ignored");
            return false;
        };
        if self.entries[index].is_divider {
            debug!(%id, "Dividers carry no bookmark token, update ignored");
            return false;
        }
        self.entries[index].bookmark_token = token;
        self.commit(ListEvent::Updated { id: *id });
        true
    }

    fn delete_at(&mut self, offsets: &[usize]) -> Vec<Uuid> {
        self.ensure_loaded();
        let ids: Vec<Uuid> = remove_at_offsets(&mut self.entries, offsets)
            .into_iter()
            .map(|e| e.id)
            .collect();
        if !ids.is_empty() {
            debug!(count = ids.len(), "Deleted entries");
            self.commit(ListEvent::Removed { ids: ids.clone() });
        }
        ids
    }

    fn move_entries(&mut self, from_offsets: &[usize], to: usize) -> bool {
        self.ensure_loaded();
        if !move_offsets(&mut self.entries, from_offsets, to) {
            return false;
        }
        debug!(?from_offsets, to, "Moved entries");
        self.commit(ListEvent::Moved);
        true
    }

    fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    fn get(&self, id: &Uuid) -> Option<&ListEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    fn subscribe(&mut self) -> Receiver<ListEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
