//! DocumentStore lifecycle tests: list, read, write, create and delete

use folio::{
    DocumentKind, Error,
    document::{DocumentError, NameError, render_markdown},
};

use crate::helpers::*;

// ===== LISTING =====

#[tokio::test]
async fn test_list_is_sorted() {
    let (_dir, store) =
        setup_documents_with(&[("history.txt", ""), ("about.md", ""), ("changes.txt", "")]).await;

    let names = store.list().await.unwrap();

    assert_eq!(names, vec!["about.md", "changes.txt", "history.txt"]);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_list_skips_directories() {
    let (_dir, store) = setup_documents_with(&[("about.md", "")]).await;
    tokio::fs::create_dir(store.root().join("drafts"))
        .await
        .unwrap();

    assert_eq!(store.list().await.unwrap(), vec!["about.md"]);
}

#[tokio::test]
async fn test_list_info_reports_size() {
    let (_dir, store) = setup_documents_with(&[("history.txt", "Ruby 0.95 released")]).await;

    let infos = store.list_info().await.unwrap();

    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].name, "history.txt");
    assert_eq!(infos[0].size, 18);
    assert!(infos[0].modified.is_some());
}

// ===== READING AND WRITING =====

#[tokio::test]
async fn test_read_text_document() {
    let (_dir, store) = setup_documents_with(&[("history.txt", "Ruby 0.95 released")]).await;

    assert_eq!(
        store.read("history.txt").await.unwrap(),
        "Ruby 0.95 released"
    );
    assert_eq!(
        DocumentKind::from_name("history.txt"),
        Some(DocumentKind::Text)
    );
}

#[tokio::test]
async fn test_read_and_render_markdown() {
    let (_dir, store) = setup_documents_with(&[("about.md", "*dynamic*")]).await;

    let content = store.read("about.md").await.unwrap();

    assert!(render_markdown(&content).contains("<em>dynamic</em>"));
}

#[tokio::test]
async fn test_read_missing_document() {
    let (_dir, store) = setup_documents().await;

    let err = store.read("unknown.ext").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "unknown.ext does not exist");
}

#[tokio::test]
async fn test_write_overwrites_and_creates() {
    let (_dir, store) = setup_documents_with(&[("changes.txt", "old")]).await;

    store.write("changes.txt", "new content").await.unwrap();
    store.write("fresh.md", "# fresh").await.unwrap();

    assert_eq!(store.read("changes.txt").await.unwrap(), "new content");
    assert_eq!(store.read("fresh.md").await.unwrap(), "# fresh");
}

// ===== CREATION =====

#[tokio::test]
async fn test_create_document() {
    let (_dir, store) = setup_documents().await;

    let name = store.create("  test.txt ").await.unwrap();

    assert_eq!(name, "test.txt");
    assert!(store.exists("test.txt").await.unwrap());
    assert_eq!(store.read("test.txt").await.unwrap(), "");
}

#[tokio::test]
async fn test_create_validation_messages() {
    let (_dir, store) = setup_documents_with(&[("about.md", "")]).await;

    let cases = [
        ("", NameError::Empty, "A name is required"),
        (
            "my notes.md",
            NameError::IncludesSpaces,
            "File name cannot include spaces",
        ),
        (
            "notes",
            NameError::NoExtension,
            "File name must have an extension",
        ),
        ("about.md", NameError::NotUnique, "File names must be unique"),
        (
            "cms.rb",
            NameError::UnsupportedType,
            "That file type is not supported",
        ),
    ];

    for (name, expected, message) in cases {
        let err = store.create(name).await.unwrap_err();
        match &err {
            Error::Document(doc_err) => assert_eq!(doc_err.name_error(), Some(expected)),
            other => panic!("unexpected error for {name:?}: {other:?}"),
        }
        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), message);
    }

    assert_eq!(store.list().await.unwrap(), vec!["about.md"]);
}

// ===== DELETION =====

#[tokio::test]
async fn test_delete_document() {
    let (_dir, store) = setup_documents_with(&[("test.txt", "")]).await;

    store.delete("test.txt").await.unwrap();

    assert!(!store.exists("test.txt").await.unwrap());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_document() {
    let (_dir, store) = setup_documents().await;

    let err = store.delete("test.txt").await.unwrap_err();

    assert!(matches!(err, Error::Document(DocumentError::NotFound { .. })));
}
