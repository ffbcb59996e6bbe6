//! Error types for the user system
use thiserror::Error;

/// Reasons a signup form is rejected.
///
/// Variants are listed in the order the checks run; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("No field can be empty")]
    EmptyField,

    #[error("Passwords did not match")]
    PasswordMismatch,

    #[error("Username/password cannot include spaces")]
    IncludesSpaces,

    #[error("Username must be unique")]
    NotUnique,
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error(transparent)]
    InvalidSignup(SignupError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed")]
    PasswordVerificationFailed,

    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },

    #[error("Credentials file is malformed: {reason}")]
    CredentialsFile { reason: String },
}

impl UserError {
    /// Check if this error should be reported back to the signup form.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UserError::InvalidSignup(_))
    }

    /// Check if this error means the presented credentials were refused.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            UserError::InvalidCredentials
                | UserError::InvalidPassword
                | UserError::PasswordVerificationFailed
        )
    }

    /// Get the signup validation failure, if this is one.
    pub fn signup_error(&self) -> Option<SignupError> {
        match self {
            UserError::InvalidSignup(err) => Some(*err),
            _ => None,
        }
    }
}

impl From<SignupError> for UserError {
    fn from(err: SignupError) -> Self {
        UserError::InvalidSignup(err)
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}

impl From<SignupError> for crate::Error {
    fn from(err: SignupError) -> Self {
        crate::Error::User(UserError::InvalidSignup(err))
    }
}
