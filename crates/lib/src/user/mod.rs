//! User system for Folio
//!
//! Provides password-based accounts backed by an append-only credentials
//! file, plus the validation rules a new account must pass.

pub mod crypto;
pub mod errors;
pub mod signup;
pub mod store;

pub use errors::{SignupError, UserError};
pub use signup::validate_signup;
pub use store::UserStore;
