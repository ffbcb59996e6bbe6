//! Document copy tests

use folio::document::NameError;

use crate::helpers::*;

#[tokio::test]
async fn test_copy_duplicates_content() {
    let (_dir, store) = setup_documents_with(&[("about.md", "# About\n\nhello")]).await;

    store.copy("about.md", "about_copy.md").await.unwrap();

    assert_eq!(
        store.read("about_copy.md").await.unwrap(),
        "# About\n\nhello"
    );
    assert_eq!(
        store.read("about.md").await.unwrap(),
        "# About\n\nhello",
        "source should be untouched"
    );
}

#[tokio::test]
async fn test_copy_to_existing_name_is_refused() {
    let (_dir, store) = setup_documents_with(&[("about.md", "a"), ("notes.txt", "b")]).await;

    let err = store.copy("about.md", "notes.txt").await.unwrap_err();

    assert_eq!(err.to_string(), NameError::NotUnique.to_string());
    assert_eq!(store.read("notes.txt").await.unwrap(), "b");
}

#[tokio::test]
async fn test_copy_does_not_trim_target() {
    let (_dir, store) = setup_documents_with(&[("about.md", "a")]).await;

    let err = store.copy("about.md", " about2.md").await.unwrap_err();

    assert_eq!(err.to_string(), "File name cannot include spaces");
}

#[tokio::test]
async fn test_copy_missing_source() {
    let (_dir, store) = setup_documents().await;

    let err = store.copy("ghost.md", "copy.md").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(!store.exists("copy.md").await.unwrap());
}
