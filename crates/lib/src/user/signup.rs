//! Signup validation.

use super::errors::SignupError;

/// Validate a signup submission against the usernames already registered.
///
/// Checks run in a fixed order and the first failure is returned: empty
/// fields, then the confirmation, then spaces, then uniqueness.
pub fn validate_signup<S: AsRef<str>>(
    username: &str,
    password: &str,
    confirmation: &str,
    existing: &[S],
) -> Result<(), SignupError> {
    if [username, password, confirmation].iter().any(|f| f.is_empty()) {
        return Err(SignupError::EmptyField);
    }
    if password != confirmation {
        return Err(SignupError::PasswordMismatch);
    }
    if [username, password].iter().any(|f| f.contains(' ')) {
        return Err(SignupError::IncludesSpaces);
    }
    if existing.iter().any(|u| u.as_ref() == username) {
        return Err(SignupError::NotUnique);
    }
    Ok(())
}
