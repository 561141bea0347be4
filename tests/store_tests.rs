//! Store behavior tests against a real database file.
//!
//! The unit tests in `store::sqlite` cover row-level semantics; these
//! cover what survives a process boundary — everything here re-opens
//! the database between operations.

use mfa::errors::MfaError;
use mfa::store::{SecretStore, SqliteStore, UpsertOutcome};
use tempfile::TempDir;

#[test]
fn secrets_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mfa.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.upsert("github", "JBSWY3DPEHPK3PXP").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("github").unwrap(), "JBSWY3DPEHPK3PXP");
}

#[test]
fn replace_after_reopen_keeps_one_row_and_created_at() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mfa.db");

    let created_at = {
        let mut store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.upsert("github", "JBSWY3DPEHPK3PXP").unwrap(),
            UpsertOutcome::Created
        );
        store.list().unwrap()[0].created_at
    };

    let mut store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.upsert("github", "GEZDGNBVGY3TQOJQ").unwrap(),
        UpsertOutcome::Replaced
    );

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].created_at, created_at);
    assert_eq!(store.get("github").unwrap(), "GEZDGNBVGY3TQOJQ");
}

#[test]
fn missing_name_is_reported_as_not_found() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("mfa.db")).unwrap();

    match store.get("absent") {
        Err(MfaError::SecretNotFound(name)) => assert_eq!(name, "absent"),
        other => panic!("expected SecretNotFound, got {other:?}"),
    }
}

#[test]
fn trait_object_access_works() {
    // Commands take `&mut dyn SecretStore`; make sure the trait stays
    // object-safe and usable through a reference.
    let dir = TempDir::new().unwrap();
    let mut concrete = SqliteStore::open(&dir.path().join("mfa.db")).unwrap();
    let store: &mut dyn SecretStore = &mut concrete;

    store.upsert("github", "JBSWY3DPEHPK3PXP").unwrap();
    assert_eq!(store.get("github").unwrap(), "JBSWY3DPEHPK3PXP");
    assert_eq!(store.list().unwrap().len(), 1);
}
