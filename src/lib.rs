//! # FileDB
//!
//! An embedded document store that keeps JSON documents directly on the
//! filesystem, with:
//! - Atomic writes (temp file + rename) so no partial document is ever visible
//! - One writer lock per collection, created on first touch
//! - Lock-free reads and directory enumeration
//! - An injected, leveled logger
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store                                │
//! │      write / read / read_all / delete / delete_collection    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────┐
//!          │            │                 │
//!          ▼            ▼                 ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ Lock Table  │ │Path Resolver│ │  Document   │
//!   │(per collec.)│ │   (probe)   │ │(codec+atom.)│
//!   └─────────────┘ └──────┬──────┘ └──────┬──────┘
//!                          │               │
//!                          ▼               ▼
//!                   {base}/{collection}/{resource}.json
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filedb::{Options, Store};
//! use serde_json::json;
//!
//! let db = Store::open("./filedb_data", Options::default())?;
//! db.write("users", "ayush", &json!({"name": "Ayush", "age": "19"}))?;
//!
//! let user: serde_json::Value = db.read("users", "ayush")?;
//! assert_eq!(user["name"], "Ayush");
//! # Ok::<(), filedb::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;

pub mod lock;
pub mod path;
pub mod document;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Options, SyncStrategy};
pub use error::{Result, StoreError};
pub use logger::{LogLevel, Logger, NoopLogger, TracingLogger};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FileDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
