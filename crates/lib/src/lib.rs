//!
//! Folio: a flat-file document manager.
//! This library provides the storage and validation layers behind the Folio web interface.
//!
//! ## Core Concepts
//!
//! * **Documents (`document::DocumentStore`)**: Markdown and plain-text files kept in a single data
//!   directory. A document is identified by its filename; there is no versioning.
//! * **Document names (`document::name`)**: The rules a new filename must pass before it is written,
//!   and the stricter shape a name must have to be served at all.
//! * **Users (`user::UserStore`)**: An append-only YAML mapping of usernames to Argon2 password hashes.
//! * **Signup rules (`user::signup`)**: The checks a new account must pass before it is appended.

pub mod constants;
pub mod document;
pub mod user;

pub use document::{DocumentInfo, DocumentKind, DocumentStore};
pub use user::UserStore;

/// Result type used throughout the Folio library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Folio library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured document errors from the document module
    #[error(transparent)]
    Document(document::DocumentError),

    /// Structured user errors from the user module
    #[error(transparent)]
    User(user::UserError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Document(_) => "document",
            Error::User(_) => "user",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is a user-facing validation failure.
    ///
    /// Validation errors carry a message meant to be shown back to the person
    /// who submitted the form.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_validation_error(),
            Error::User(user_err) => user_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        document::{DocumentError, NameError},
        user::{SignupError, UserError},
    };

    #[test]
    fn test_error_classification() {
        let err: Error = DocumentError::NotFound {
            name: "about.md".to_string(),
        }
        .into();
        assert_eq!(err.module(), "document");
        assert!(err.is_not_found());
        assert!(!err.is_validation_error());

        let err: Error = DocumentError::InvalidName(NameError::Empty).into();
        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), "A name is required");

        let err: Error = UserError::InvalidSignup(SignupError::PasswordMismatch).into();
        assert_eq!(err.module(), "user");
        assert!(err.is_validation_error());
        assert!(!err.is_authentication_error());

        let err: Error = UserError::InvalidCredentials.into();
        assert!(err.is_authentication_error());
        assert_eq!(err.to_string(), "Invalid credentials");

        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io_error());
        assert!(err.is_not_found());
    }
}
