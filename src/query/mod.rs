//! Query execution and table loading.
//!
//! Both components borrow an injected [`DatabaseClient`](crate::db::DatabaseClient)
//! and report results as values rather than errors.

pub mod executor;
pub mod loader;
mod outcome;

pub use executor::QueryExecutor;
pub use loader::{select_all_sql, TableLoader};
pub use outcome::{ErrorDescription, ErrorKind, ExecutionOutcome, LoadOutcome};
