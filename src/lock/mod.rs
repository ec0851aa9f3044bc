//! Lock Table Module
//!
//! One mutual-exclusion lock per collection.
//!
//! ## Responsibilities
//! - Serialize writers and deleters within a collection
//! - Let different collections proceed fully in parallel
//! - Hand out the same lock for a name for the store's lifetime
//!
//! ## Data Structure Choice
//! A `HashMap<String, Arc<Mutex<()>>>` behind a single guard mutex:
//! - The guard covers only the lookup/insert, never filesystem I/O
//! - Entries are never removed, so the table grows with every distinct
//!   collection name ever touched

mod table;

pub use table::{CollectionLock, LockTable};
