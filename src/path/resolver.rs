//! Path Resolver
//!
//! Builds collection/resource paths and probes them for existence.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StoreError};

use super::{DOCUMENT_EXTENSION, TEMP_SUFFIX};

/// What a probe found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    /// A collection directory
    Directory,
    /// A document file
    Document,
}

/// Result of a successful probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// The path that actually exists (bare or with the document extension)
    pub path: PathBuf,
    pub kind: ProbeKind,
}

impl Probe {
    pub fn is_dir(&self) -> bool {
        self.kind == ProbeKind::Directory
    }

    pub fn is_document(&self) -> bool {
        self.kind == ProbeKind::Document
    }
}

/// Resolves names under one base directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir` (normalized lexically)
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: normalize(base_dir),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `{base}/{collection}`
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_dir.join(collection)
    }

    /// `{base}/{collection}/{resource}` (as addressed by callers)
    pub fn bare_resource_path(&self, collection: &str, resource: &str) -> PathBuf {
        self.collection_path(collection).join(resource)
    }

    /// `{base}/{collection}/{resource}.json`
    pub fn resource_path(&self, collection: &str, resource: &str) -> PathBuf {
        with_suffix(&self.bare_resource_path(collection, resource), DOCUMENT_EXTENSION)
    }

    /// `{base}/{collection}/{resource}.json.tmp`
    pub fn temp_path(&self, collection: &str, resource: &str) -> PathBuf {
        with_suffix(&self.resource_path(collection, resource), TEMP_SUFFIX)
    }

    /// Probe `path`, falling back to `path.json`
    ///
    /// Returns:
    /// - `Ok(Probe)` for whichever of the two exists (bare path wins)
    /// - `Err(NotFound)` if neither does
    pub fn probe(&self, path: &Path) -> Result<Probe> {
        if let Some(probe) = stat(path)? {
            return Ok(probe);
        }

        let document = with_suffix(path, DOCUMENT_EXTENSION);
        if let Some(probe) = stat(&document)? {
            return Ok(probe);
        }

        Err(StoreError::NotFound(path.to_path_buf()))
    }

    /// Probe `{collection}/{resource}` and return its document file
    ///
    /// The probe only establishes that something exists; the returned path is
    /// always `{resource}.json`, which must be a regular file. A bare
    /// directory or a stray extensionless file is `NotFound`, and so is a
    /// bare path that is really another resource's document
    /// ("ayush.json" is the document of "ayush", not of "ayush.json").
    pub fn locate_document(&self, collection: &str, resource: &str) -> Result<PathBuf> {
        let bare = self.bare_resource_path(collection, resource);
        let probe = self.probe(&bare)?;

        let document = self.resource_path(collection, resource);
        if probe.path == document && probe.is_document() {
            return Ok(document);
        }

        match stat(&document)? {
            Some(found) if found.is_document() => Ok(document),
            _ => Err(StoreError::NotFound(bare)),
        }
    }
}

/// Lexically normalize a path
///
/// Drops `.` segments and redundant separators, and collapses `..` against a
/// preceding normal segment. Leading `..` segments of a relative path are
/// kept. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Append `.{suffix}` without touching any existing extension
/// "v1.2" → "v1.2.json"
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(".");
    os.push(suffix);
    PathBuf::from(os)
}

fn stat(path: &Path) -> Result<Option<Probe>> {
    match fs::metadata(path) {
        Ok(meta) => {
            let kind = if meta.is_dir() {
                ProbeKind::Directory
            } else {
                ProbeKind::Document
            };
            Ok(Some(Probe {
                path: path.to_path_buf(),
                kind,
            }))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
