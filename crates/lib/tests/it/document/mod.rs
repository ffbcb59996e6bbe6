//! Document module integration tests

mod copy_tests;
mod store_tests;
