//! Document Module
//!
//! Encoding and atomic publication of document files.
//!
//! ## File Format
//! Canonical JSON, tab-indented, followed by exactly one `\n`:
//! ```text
//! {
//! 	"name": "Ayush",
//! 	"age": "19"
//! }
//! ```
//!
//! ## Write Protocol
//! ```text
//! encode → {resource}.json.tmp (truncate, optional fsync) → rename → {resource}.json
//! ```
//! A reader sees the complete old file or the complete new file, never a mix.

mod codec;
mod writer;

pub use codec::{decode, encode};
pub use writer::AtomicWriter;
