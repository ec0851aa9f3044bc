//! Lock table implementation
//!
//! Lazily populated map of collection name to lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lock shared by every writer/deleter of one collection
pub type CollectionLock = Arc<Mutex<()>>;

/// Per-collection lock registry
///
/// ## Concurrency:
/// - `locks`: guarded by a parking_lot Mutex held only for the map access
/// - Returned locks are cloned `Arc`s, locked after the guard is released
#[derive(Default)]
pub struct LockTable {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockTable {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for `collection`, creating it on first touch
    ///
    /// Repeated calls with the same name return the same `Arc`.
    pub fn lock_for(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }

        let lock = CollectionLock::default();
        locks.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Number of collections that have a lock
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `collection` has been touched
    pub fn contains(&self, collection: &str) -> bool {
        self.locks.lock().contains_key(collection)
    }
}
