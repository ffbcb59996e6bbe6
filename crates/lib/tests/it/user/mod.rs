//! User module integration tests

mod authentication_tests;
mod signup_tests;
