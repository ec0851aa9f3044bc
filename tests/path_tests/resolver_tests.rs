//! Tests for PathResolver
//!
//! These tests verify:
//! - Path construction for collections, resources, and temp files
//! - Two-step probe: bare path first, then with the document extension

use std::fs;
use std::path::PathBuf;

use filedb::path::{PathResolver, ProbeKind};
use filedb::StoreError;
use tempfile::TempDir;

fn setup_resolver() -> (TempDir, PathResolver) {
    let temp_dir = TempDir::new().unwrap();
    let resolver = PathResolver::new(temp_dir.path());
    (temp_dir, resolver)
}

#[test]
fn test_path_construction() {
    let resolver = PathResolver::new(&PathBuf::from("/srv/db"));

    assert_eq!(resolver.collection_path("users"), PathBuf::from("/srv/db/users"));
    assert_eq!(
        resolver.resource_path("users", "ayush"),
        PathBuf::from("/srv/db/users/ayush.json")
    );
    assert_eq!(
        resolver.temp_path("users", "ayush"),
        PathBuf::from("/srv/db/users/ayush.json.tmp")
    );
}

#[test]
fn test_probe_directory() {
    let (temp, resolver) = setup_resolver();
    fs::create_dir(temp.path().join("users")).unwrap();

    let probe = resolver.probe(&resolver.collection_path("users")).unwrap();

    assert_eq!(probe.kind, ProbeKind::Directory);
    assert_eq!(probe.path, temp.path().join("users"));
}

#[test]
fn test_probe_falls_back_to_extension() {
    let (temp, resolver) = setup_resolver();
    fs::create_dir(temp.path().join("users")).unwrap();
    fs::write(temp.path().join("users").join("ayush.json"), b"{}\n").unwrap();

    let probe = resolver
        .probe(&resolver.bare_resource_path("users", "ayush"))
        .unwrap();

    assert_eq!(probe.kind, ProbeKind::Document);
    assert_eq!(probe.path, temp.path().join("users").join("ayush.json"));
}

#[test]
fn test_probe_prefers_bare_path() {
    let (temp, resolver) = setup_resolver();
    let dir = temp.path().join("users");
    fs::create_dir_all(dir.join("ayush")).unwrap();
    fs::write(dir.join("ayush.json"), b"{}\n").unwrap();

    let probe = resolver
        .probe(&resolver.bare_resource_path("users", "ayush"))
        .unwrap();

    assert!(probe.is_dir());
    assert_eq!(probe.path, dir.join("ayush"));
}

#[test]
fn test_probe_missing_is_not_found() {
    let (_temp, resolver) = setup_resolver();
    let target = resolver.bare_resource_path("users", "nobody");

    match resolver.probe(&target) {
        Err(StoreError::NotFound(path)) => assert_eq!(path, target),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_locate_document_uses_own_file() {
    let (temp, resolver) = setup_resolver();
    let dir = temp.path().join("users");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("ayush.json"), b"{}\n").unwrap();
    fs::write(dir.join("ayush.json.json"), b"{}\n").unwrap();

    assert_eq!(
        resolver.locate_document("users", "ayush").unwrap(),
        dir.join("ayush.json")
    );
    assert_eq!(
        resolver.locate_document("users", "ayush.json").unwrap(),
        dir.join("ayush.json.json")
    );
}

#[test]
fn test_locate_document_rejects_non_documents() {
    let (temp, resolver) = setup_resolver();
    let dir = temp.path().join("users");
    fs::create_dir_all(dir.join("archive")).unwrap();
    fs::write(dir.join("notes"), b"{}").unwrap();
    fs::write(dir.join("ayush.json"), b"{}\n").unwrap();

    for name in ["archive", "notes", "ayush.json", "nobody"] {
        let err = resolver.locate_document("users", name).unwrap_err();
        assert!(err.is_not_found(), "{}", name);
    }
}
