//! Subcommand implementations.

pub mod docs;
pub mod health;
pub mod info;
pub mod serve;
pub mod user;
