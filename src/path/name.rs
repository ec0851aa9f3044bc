//! Name validation
//!
//! Collection and resource names are used verbatim as path segments, so they
//! must be non-empty single segments.

use crate::error::{Result, StoreError};

use super::TEMP_SUFFIX;

/// Validate a collection name
pub fn validate_collection(collection: &str) -> Result<()> {
    if collection.is_empty() {
        return Err(StoreError::InvalidArgument(
            "Collection empty! No place to save record.".to_string(),
        ));
    }
    validate_segment("collection", collection)
}

/// Validate a resource name
pub fn validate_resource(resource: &str) -> Result<()> {
    if resource.is_empty() {
        return Err(StoreError::InvalidArgument(
            "Missing resource! Unable to save record (no name).".to_string(),
        ));
    }
    validate_segment("resource", resource)?;

    // Would collide with the temp file of another resource's write
    if resource.ends_with(&format!(".{}", TEMP_SUFFIX)) {
        return Err(StoreError::InvalidArgument(format!(
            "resource name {:?} uses the reserved .{} suffix",
            resource, TEMP_SUFFIX
        )));
    }
    Ok(())
}

fn validate_segment(kind: &str, name: &str) -> Result<()> {
    if name == "." || name == ".." {
        return Err(StoreError::InvalidArgument(format!(
            "{} name {:?} is not a valid path segment",
            kind, name
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidArgument(format!(
            "{} name {:?} must not contain path separators",
            kind, name
        )));
    }
    Ok(())
}
