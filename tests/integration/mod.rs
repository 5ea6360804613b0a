//! Integration tests for the food-share console.

pub mod catalogue_test;
pub mod common;
pub mod executor_test;
pub mod loader_test;
pub mod postgres_test;
