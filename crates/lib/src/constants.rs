//! Constants used throughout the Folio library.
//!
//! This module provides central definitions for file names, extensions and
//! other fixed strings shared between the library and the web interface.

/// Extensions a new document may be created with.
pub const ALLOWED_EXTENSIONS: &[&str] = &["md", "txt"];

/// Extension that is rendered as markdown when viewed.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension that is served verbatim as plain text.
pub const TEXT_EXTENSION: &str = "txt";

/// Default directory holding the documents.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default credentials file name.
pub const DEFAULT_USERS_FILE: &str = "users.yml";
