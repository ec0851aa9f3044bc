//! Path Module
//!
//! Maps collections and resources onto the filesystem.
//!
//! ## On-Disk Layout
//! ```text
//! {base_dir}/
//!   ├── users/                (collection = directory)
//!   │     ├── ayush.json      (resource = one document file)
//!   │     └── john.json.tmp   (in-flight write, renamed into place)
//!   └── orders/
//! ```

mod name;
mod resolver;

pub use name::{validate_collection, validate_resource};
pub use resolver::{normalize, PathResolver, Probe, ProbeKind};

/// Extension carried by every document file
pub const DOCUMENT_EXTENSION: &str = "json";

/// Suffix appended to a document path while it is being written
pub const TEMP_SUFFIX: &str = "tmp";
