//! Signup tests: validation order, persistence, and uniqueness

use folio::{UserStore, user::SignupError};

use crate::helpers::*;

#[tokio::test]
async fn test_signup_adds_user() {
    let (_dir, store) = setup_users().await;

    store.sign_up("grant", "password", "password").await.unwrap();

    assert_eq!(store.usernames().await.unwrap(), vec!["grant"]);
}

#[tokio::test]
async fn test_signup_messages() {
    let (_dir, store) = setup_users_with_admin().await;

    let cases = [
        (("grant", "password", ""), SignupError::EmptyField),
        (("grant", "password", "passw0rd"), SignupError::PasswordMismatch),
        (("grant lee", "password", "password"), SignupError::IncludesSpaces),
        (("admin", "password", "password"), SignupError::NotUnique),
    ];

    for ((username, password, confirmation), expected) in cases {
        let err = store
            .sign_up(username, password, confirmation)
            .await
            .unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), expected.to_string());
    }

    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_users_survive_reopen() {
    let (dir, store) = setup_users_with_admin().await;
    store.sign_up("grant", "password", "password").await.unwrap();

    let reopened = UserStore::open(dir.path().join("users.yml")).await.unwrap();

    assert_eq!(reopened.usernames().await.unwrap(), vec!["admin", "grant"]);
    reopened.authenticate("grant", "password").await.unwrap();
}

#[tokio::test]
async fn test_append_after_hand_edited_file() {
    let (dir, _store) = setup_users().await;
    let path = dir.path().join("users.yml");
    // A hand-written file without a trailing newline.
    std::fs::write(&path, "legacy: '$argon2id$not-a-real-hash'").unwrap();
    let store = UserStore::open(&path).await.unwrap();

    store.add("grant", "password").await.unwrap();

    assert_eq!(store.usernames().await.unwrap(), vec!["grant", "legacy"]);
}
