//! Document error types for the Folio library.
//!
//! `NameError` carries the user-facing reason a filename was refused; its
//! `Display` output is shown verbatim in the web interface.

use thiserror::Error;

/// Reasons a proposed document name is rejected.
///
/// Variants are listed in the order the checks run; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("A name is required")]
    Empty,

    #[error("File name cannot include spaces")]
    IncludesSpaces,

    #[error("File name must have an extension")]
    NoExtension,

    #[error("File names must be unique")]
    NotUnique,

    #[error("That file type is not supported")]
    UnsupportedType,

    #[error("File name can only contain letters, numbers, and underscores")]
    InvalidCharacters,
}

/// Errors that can occur during document operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document does not exist in the data directory.
    #[error("{name} does not exist")]
    NotFound {
        /// Name of the missing document
        name: String,
    },

    /// A new document name failed validation.
    #[error(transparent)]
    InvalidName(NameError),

    /// The name cannot address a file in the data directory.
    #[error("Invalid document path: {name}")]
    InvalidPath {
        /// The rejected name
        name: String,
    },
}

impl DocumentError {
    /// Check if this error indicates the document was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound { .. })
    }

    /// Check if this error should be reported back to the form that caused it.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DocumentError::InvalidName(_))
    }

    /// Get the name validation failure, if this is one.
    pub fn name_error(&self) -> Option<NameError> {
        match self {
            DocumentError::InvalidName(err) => Some(*err),
            _ => None,
        }
    }
}

impl From<NameError> for DocumentError {
    fn from(err: NameError) -> Self {
        DocumentError::InvalidName(err)
    }
}

impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}

impl From<NameError> for crate::Error {
    fn from(err: NameError) -> Self {
        crate::Error::Document(DocumentError::InvalidName(err))
    }
}
