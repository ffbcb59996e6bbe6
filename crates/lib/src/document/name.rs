//! Document name rules.
//!
//! Two separate checks live here. [`validate_new_name`] decides whether a
//! filename may be used for a new document and reports a user-facing reason
//! when it may not. [`is_routable`] decides whether a name can be looked up at
//! all: only `word.word` names are ever joined onto the data directory.

use super::errors::NameError;
use crate::constants::ALLOWED_EXTENSIONS;

/// Return the extension of `name`, without the dot.
///
/// Dotfiles such as `.md` have no extension, and neither does a name ending
/// in a dot.
pub fn extension(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Validate a name for a new document against the names already in use.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_new_name<S: AsRef<str>>(name: &str, existing: &[S]) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains(' ') {
        return Err(NameError::IncludesSpaces);
    }
    let Some(ext) = extension(name) else {
        return Err(NameError::NoExtension);
    };
    if existing.iter().any(|n| n.as_ref() == name) {
        return Err(NameError::NotUnique);
    }
    if !ALLOWED_EXTENSIONS.contains(&ext) {
        return Err(NameError::UnsupportedType);
    }
    if !is_routable(name) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

/// Whether `name` has the `word.word` shape the web routes accept.
///
/// Word characters are ASCII alphanumerics and underscore. Anything else,
/// including path separators and `..`, is refused.
pub fn is_routable(name: &str) -> bool {
    let Some((stem, ext)) = name.split_once('.') else {
        return false;
    };
    let is_word = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word(stem) && is_word(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_extension() {
        assert_eq!(extension("about.md"), Some("md"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
        assert_eq!(extension("README"), None);
        assert_eq!(extension(".md"), None);
        assert_eq!(extension("trailing."), None);
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_new_name("about.md", NONE), Ok(()));
        assert_eq!(validate_new_name("changes.txt", &["about.md"]), Ok(()));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate_new_name("", NONE), Err(NameError::Empty));
        assert_eq!(
            validate_new_name("my notes.md", NONE),
            Err(NameError::IncludesSpaces)
        );
        assert_eq!(validate_new_name("notes", NONE), Err(NameError::NoExtension));
        assert_eq!(
            validate_new_name("about.md", &["about.md"]),
            Err(NameError::NotUnique)
        );
        assert_eq!(
            validate_new_name("script.rb", NONE),
            Err(NameError::UnsupportedType)
        );
        assert_eq!(
            validate_new_name("my-notes.md", NONE),
            Err(NameError::InvalidCharacters)
        );
        assert_eq!(
            validate_new_name("v1.2.md", NONE),
            Err(NameError::InvalidCharacters)
        );
    }

    #[test]
    fn test_check_order() {
        // Spaces are reported before the missing extension.
        assert_eq!(validate_new_name("a b", NONE), Err(NameError::IncludesSpaces));
        // Duplicates are reported before the unsupported type.
        assert_eq!(
            validate_new_name("cms.rb", &["cms.rb"]),
            Err(NameError::NotUnique)
        );
    }

    #[test]
    fn test_routable() {
        assert!(is_routable("about.md"));
        assert!(is_routable("unknown.ext"));
        assert!(is_routable("my_file2.txt"));
        assert!(!is_routable("new"));
        assert!(!is_routable("../users.yml"));
        assert!(!is_routable("a.b.c"));
        assert!(!is_routable(".md"));
        assert!(!is_routable("a-b.md"));
        assert!(!is_routable("about.md/"));
    }
}
