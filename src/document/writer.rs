//! Atomic writer
//!
//! Writes a temp file next to the target and renames it into place.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::SyncStrategy;
use crate::error::{Result, StoreError};

/// Publishes bytes to a path via temp file + rename
#[derive(Debug, Clone, Copy)]
pub struct AtomicWriter {
    sync_strategy: SyncStrategy,
}

impl AtomicWriter {
    pub fn new(sync_strategy: SyncStrategy) -> Self {
        Self { sync_strategy }
    }

    /// Write `bytes` to `temp_path`, then rename it onto `final_path`
    ///
    /// The temp file is truncated, never appended to. If the rename fails the
    /// temp file is left on disk and `final_path` keeps its previous content.
    pub fn publish(&self, temp_path: &Path, final_path: &Path, bytes: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(temp_path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;

        let file = writer.into_inner().map_err(|e| StoreError::Io(e.into_error()))?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(temp_path, final_path)?;
        Ok(())
    }
}
