//! Document storage for Folio
//!
//! Documents are markdown or plain-text files stored flat in one data
//! directory and identified by filename.

pub mod errors;
pub mod kind;
pub mod name;
pub mod store;

pub use errors::{DocumentError, NameError};
pub use kind::{DocumentKind, render_markdown};
pub use store::{DocumentInfo, DocumentStore};
