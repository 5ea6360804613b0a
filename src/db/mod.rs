//! Database abstraction layer for the console.
//!
//! Provides a trait-based interface for database operations, allowing
//! different database backends to be used interchangeably. The client is an
//! owned, pool-backed handle that is created once and passed to the table
//! loader and query executor.

mod mock;
mod postgres;
mod sqlite;
mod types;

pub use mock::{FailingDatabaseClient, RecordingDatabaseClient};
pub use postgres::PostgresClient;
pub use sqlite::SqliteClient;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    #[default]
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    /// Returns the backend as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    /// Parses a backend from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite" | "sqlite3" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

/// Creates a database client for the given backend and configuration.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    match config.backend {
        DatabaseBackend::Postgres => {
            let client = PostgresClient::connect(config).await?;
            Ok(Box::new(client))
        }
        DatabaseBackend::Sqlite => {
            let client = SqliteClient::connect(config).await?;
            Ok(Box::new(client))
        }
    }
}

/// Trait defining the interface for database clients.
///
/// Implementations must be safe to share: every call checks a connection out
/// of the pool, runs, and returns it.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL statement expected to return rows and collects all of them.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;

    /// Executes several `;`-separated statements in order on one connection.
    ///
    /// Only the last statement's rows and columns are returned.
    async fn execute_batch(&self, sql: &str) -> Result<QueryResult>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}

/// Splits the steps of a multi-statement stream and keeps the rows of the
/// last statement.
///
/// Drivers report the end of every statement with a `Left` item; rows arrive
/// as `Right` items in between.
pub(crate) fn last_statement_rows<D, R>(steps: Vec<sqlx::Either<D, R>>) -> Vec<R> {
    let mut last = Vec::new();
    let mut current = Vec::new();
    for step in steps {
        match step {
            sqlx::Either::Left(_) => last = std::mem::take(&mut current),
            sqlx::Either::Right(row) => current.push(row),
        }
    }
    if current.is_empty() {
        last
    } else {
        current
    }
}
