//! Store Module
//!
//! The entry point that composes the lock table, resolver, and document paths.
//!
//! ## Responsibilities
//! - Own the base directory and its lock table
//! - Validate names before touching the filesystem
//! - Serialize writers/deleters per collection
//! - Report what happened through the injected logger

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Options;
use crate::document::{self, AtomicWriter};
use crate::error::{Result, StoreError};
use crate::lock::{CollectionLock, LockTable};
use crate::logger::Logger;
use crate::path::{self, PathResolver, DOCUMENT_EXTENSION, TEMP_SUFFIX};

/// An embedded document store rooted at one base directory
///
/// ## Concurrency Model: per-collection writer lock
///
/// - **Mutations** (write/delete/delete_collection/sweep): hold the
///   collection's lock from just before the first filesystem access until
///   return. Different collections never contend.
///
/// - **Reads** (read/read_all/list/exists): take no lock. A read racing a
///   write sees the complete old or complete new document because writes
///   publish by rename.
///
/// Two stores over different base directories share nothing.
pub struct Store {
    /// Options the store was opened with
    options: Options,

    /// Builds and probes paths under the base directory
    resolver: PathResolver,

    /// One lock per collection name ever touched
    locks: LockTable,

    /// Temp file + rename publisher
    writer: AtomicWriter,
}

impl Store {
    /// Open a store at `base_dir`, creating the directory if missing
    ///
    /// Opening an existing directory is not an error.
    pub fn open(base_dir: impl AsRef<Path>, options: Options) -> Result<Self> {
        let resolver = PathResolver::new(base_dir.as_ref());
        let dir = resolver.base_dir();

        if dir.is_dir() {
            options
                .logger
                .debug(format_args!("Using '{}' (database already exists)", dir.display()));
        } else {
            options
                .logger
                .info(format_args!("Creating the database at '{}'", dir.display()));
            fs::create_dir_all(dir)?;
        }

        Ok(Self {
            writer: AtomicWriter::new(options.sync_strategy),
            options,
            resolver,
            locks: LockTable::new(),
        })
    }

    /// Open with default options
    pub fn open_path(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(base_dir, Options::default())
    }

    // =========================================================================
    // Write Path
    // =========================================================================

    /// Write `value` as `{collection}/{resource}.json`, replacing any prior version
    ///
    /// Steps:
    /// 1. Validate names
    /// 2. Acquire the collection lock
    /// 3. Create the collection directory
    /// 4. Encode (nothing is written on failure)
    /// 5. Publish via temp file + rename
    pub fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        value: &T,
    ) -> Result<()> {
        path::validate_collection(collection)?;
        path::validate_resource(resource)?;

        let lock = self.lock_for(collection);
        let _guard = lock.lock();

        let dir = self.resolver.collection_path(collection);
        if !dir.is_dir() {
            fs::create_dir_all(&dir)?;
            self.logger()
                .info(format_args!("Created collection directory '{}'", dir.display()));
        }

        let bytes = document::encode(value)?;

        let final_path = self.resolver.resource_path(collection, resource);
        let temp_path = self.resolver.temp_path(collection, resource);
        self.writer.publish(&temp_path, &final_path, &bytes)?;

        self.logger().trace(format_args!(
            "Wrote {}/{} ({} bytes)",
            collection,
            resource,
            bytes.len()
        ));
        Ok(())
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Read and decode `{collection}/{resource}`
    ///
    /// Returns `NotFound` if no document exists, `Decode` if the stored text
    /// is malformed.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        path::validate_collection(collection)?;
        path::validate_resource(resource)?;

        let file_path = self.resolver.locate_document(collection, resource)?;

        let bytes = fs::read(&file_path)?;
        document::decode(&file_path, &bytes)
    }

    /// Whether `{collection}/{resource}` has a document
    pub fn exists(&self, collection: &str, resource: &str) -> Result<bool> {
        path::validate_collection(collection)?;
        path::validate_resource(resource)?;

        match self.resolver.locate_document(collection, resource) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Enumeration Path
    // =========================================================================

    /// Raw text of every document in `collection`
    ///
    /// Order follows the directory listing. Temp files and sub-directories
    /// are skipped.
    pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
        path::validate_collection(collection)?;

        let dir = self.collection_dir(collection)?;

        let mut records = Vec::new();
        for file_path in document_entries(&dir)? {
            records.push(fs::read_to_string(&file_path)?);
        }

        Ok(records)
    }

    /// Every document in `collection`, decoded
    pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        path::validate_collection(collection)?;

        let dir = self.collection_dir(collection)?;

        let mut records = Vec::new();
        for file_path in document_entries(&dir)? {
            let bytes = fs::read(&file_path)?;
            records.push(document::decode(&file_path, &bytes)?);
        }

        Ok(records)
    }

    /// Resource names in `collection`, sorted
    pub fn list(&self, collection: &str) -> Result<Vec<String>> {
        path::validate_collection(collection)?;

        let dir = self.collection_dir(collection)?;

        let mut names: Vec<String> = document_entries(&dir)?
            .iter()
            .filter_map(|file_path| file_path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();

        names.sort();
        Ok(names)
    }

    // =========================================================================
    // Delete Path
    // =========================================================================

    /// Delete exactly one document
    ///
    /// `NotFound` if the document does not exist, including when the name
    /// resolves to a directory.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        path::validate_collection(collection)?;
        path::validate_resource(resource)?;

        let lock = self.lock_for(collection);
        let _guard = lock.lock();

        let file_path = self.resolver.locate_document(collection, resource)?;

        fs::remove_file(&file_path)?;
        self.logger()
            .debug(format_args!("Deleted {}/{}", collection, resource));
        Ok(())
    }

    /// Delete a collection and everything under it
    pub fn delete_collection(&self, collection: &str) -> Result<()> {
        path::validate_collection(collection)?;

        let lock = self.lock_for(collection);
        let _guard = lock.lock();

        let dir = self.collection_dir(collection)?;
        fs::remove_dir_all(&dir)?;

        self.logger()
            .info(format_args!("Deleted collection '{}'", dir.display()));
        Ok(())
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Remove temp files left behind by failed writes
    ///
    /// Returns the number of files removed.
    pub fn sweep_temp_files(&self, collection: &str) -> Result<usize> {
        path::validate_collection(collection)?;

        let lock = self.lock_for(collection);
        let _guard = lock.lock();

        let dir = self.collection_dir(collection)?;

        let mut removed = 0;
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_path = entry.path();

            if entry.file_type()?.is_file() && is_temp_file(&file_path) {
                fs::remove_file(&file_path)?;
                removed += 1;
            }
        }

        if removed > 0 {
            self.logger().warn(format_args!(
                "Swept {} leftover temp file(s) from '{}'",
                removed,
                dir.display()
            ));
        }
        Ok(removed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The lock serializing writers of `collection`
    ///
    /// The same `Arc` is returned for a name for the store's lifetime.
    pub fn lock_for(&self, collection: &str) -> CollectionLock {
        self.locks.lock_for(collection)
    }

    /// Get the (normalized) base directory
    pub fn base_dir(&self) -> &Path {
        self.resolver.base_dir()
    }

    /// Number of collections with a lock entry
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// Get the options
    pub fn options(&self) -> &Options {
        &self.options
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn logger(&self) -> &Arc<dyn Logger> {
        &self.options.logger
    }

    /// Probe a collection and require a directory
    fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        let dir = self.resolver.collection_path(collection);
        let probe = self.resolver.probe(&dir)?;
        if !probe.is_dir() {
            return Err(StoreError::NotFound(dir));
        }
        Ok(probe.path)
    }
}

/// Regular document files directly under `dir`, in directory-listing order
///
/// Temp files and sub-directories are skipped.
fn document_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_path = entry.path();

        if entry.file_type()?.is_file() && is_document(&file_path) {
            paths.push(file_path);
        }
    }

    Ok(paths)
}

/// "ayush.json" → true, "ayush.json.tmp" → false
fn is_document(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == DOCUMENT_EXTENSION)
}

/// "ayush.json.tmp" → true
fn is_temp_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == TEMP_SUFFIX)
        && path.file_stem().map_or(false, |stem| is_document(Path::new(stem)))
}
