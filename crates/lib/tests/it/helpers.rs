//! Shared setup for the integration tests.
//!
//! Every store is rooted in its own temporary directory; the `TempDir` is
//! returned alongside the store and must be kept alive for the test's duration.

#![allow(dead_code)]

use folio::{DocumentStore, UserStore};
use tempfile::TempDir;

/// Create an empty document store in a fresh temporary directory.
pub async fn setup_documents() -> (TempDir, DocumentStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = DocumentStore::open(dir.path().join("data"))
        .await
        .expect("Failed to open document store");
    (dir, store)
}

/// Create a document store pre-populated with `(name, content)` pairs.
pub async fn setup_documents_with(docs: &[(&str, &str)]) -> (TempDir, DocumentStore) {
    let (dir, store) = setup_documents().await;
    for (name, content) in docs {
        create_document(&store, name, content).await;
    }
    (dir, store)
}

/// Write a document directly, bypassing name validation.
pub async fn create_document(store: &DocumentStore, name: &str, content: &str) {
    tokio::fs::write(store.root().join(name), content)
        .await
        .expect("Failed to write document");
}

/// Create an empty user store in a fresh temporary directory.
pub async fn setup_users() -> (TempDir, UserStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = UserStore::open(dir.path().join("users.yml"))
        .await
        .expect("Failed to open user store");
    (dir, store)
}

/// Create a user store holding the `admin`/`secret` account.
pub async fn setup_users_with_admin() -> (TempDir, UserStore) {
    let (dir, store) = setup_users().await;
    store
        .add("admin", "secret")
        .await
        .expect("Failed to add admin");
    (dir, store)
}
