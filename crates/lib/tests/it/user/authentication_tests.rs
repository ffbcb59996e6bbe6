//! Authentication tests: sign-in against the credentials file

use folio::{Error, user::UserError};

use crate::helpers::*;

#[tokio::test]
async fn test_valid_credentials() {
    let (_dir, store) = setup_users_with_admin().await;

    store.authenticate("admin", "secret").await.unwrap();
}

#[tokio::test]
async fn test_wrong_password() {
    let (_dir, store) = setup_users_with_admin().await;

    let err = store.authenticate("admin", "shhhh").await.unwrap_err();

    assert!(err.is_authentication_error());
    assert!(matches!(err, Error::User(UserError::InvalidCredentials)));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_unknown_user() {
    let (_dir, store) = setup_users_with_admin().await;

    let err = store.authenticate("guest", "secret").await.unwrap_err();

    assert!(matches!(err, Error::User(UserError::InvalidCredentials)));
}

#[tokio::test]
async fn test_empty_store_rejects_everyone() {
    let (_dir, store) = setup_users().await;

    assert!(store.authenticate("", "").await.is_err());
}
