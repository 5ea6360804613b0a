//! Stand-in database clients for testing.
//!
//! `RecordingDatabaseClient` remembers every statement it receives (batches
//! separately) and answers with a canned result; `FailingDatabaseClient` behaves like a database whose
//! connection has gone away.

use super::{DatabaseClient, QueryResult};
use crate::error::{ConsoleError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// A client that records statements and returns a fixed result.
#[derive(Debug, Default)]
pub struct RecordingDatabaseClient {
    response: QueryResult,
    received: Mutex<Vec<String>>,
    batches: Mutex<Vec<String>>,
}

impl RecordingDatabaseClient {
    /// Creates a client that answers every statement with an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that answers every statement with `response`.
    pub fn with_response(response: QueryResult) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    /// Returns the statements received so far, in order.
    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .map(|sql| sql.clone())
            .unwrap_or_default()
    }

    /// Returns the multi-statement texts received so far, in order.
    pub fn batches(&self) -> Vec<String> {
        self.batches
            .lock()
            .map(|sql| sql.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DatabaseClient for RecordingDatabaseClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        self.received
            .lock()
            .map_err(|_| ConsoleError::internal("recording lock poisoned"))?
            .push(sql.to_string());
        Ok(self.response.clone())
    }

    async fn execute_batch(&self, sql: &str) -> Result<QueryResult> {
        self.batches
            .lock()
            .map_err(|_| ConsoleError::internal("recording lock poisoned"))?
            .push(sql.to_string());
        Ok(self.response.clone())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A client whose every call fails as if the server were unreachable.
#[derive(Debug, Clone)]
pub struct FailingDatabaseClient {
    message: String,
}

impl FailingDatabaseClient {
    /// Creates a failing client with the default connectivity message.
    pub fn new() -> Self {
        Self::with_message("server closed the connection unexpectedly")
    }

    /// Creates a failing client with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Err(ConsoleError::connection(self.message.clone()))
    }

    async fn execute_batch(&self, _sql: &str) -> Result<QueryResult> {
        Err(ConsoleError::connection(self.message.clone()))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ColumnInfo, Value};

    #[tokio::test]
    async fn test_recording_client_remembers_statements() {
        let client = RecordingDatabaseClient::new();
        client.execute_query("SELECT 1").await.unwrap();
        client.execute_query("SELECT 2").await.unwrap();
        assert_eq!(client.received(), vec!["SELECT 1", "SELECT 2"]);
        assert!(client.batches().is_empty());
    }

    #[tokio::test]
    async fn test_recording_client_keeps_batches_apart() {
        let client = RecordingDatabaseClient::new();
        client.execute_batch("SELECT 1; SELECT 2").await.unwrap();
        assert!(client.received().is_empty());
        assert_eq!(client.batches(), vec!["SELECT 1; SELECT 2"]);
    }

    #[tokio::test]
    async fn test_recording_client_returns_response() {
        let response = QueryResult::with_data(
            vec![ColumnInfo::new("total_food_quantity", "INT8")],
            vec![vec![Value::Int(60)]],
        );
        let client = RecordingDatabaseClient::with_response(response);
        let result = client.execute_query("SELECT 60").await.unwrap();
        assert_eq!(result.rows, vec![vec![Value::Int(60)]]);
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = FailingDatabaseClient::with_message("connection reset");
        let err = client.execute_query("SELECT 1").await.unwrap_err();
        assert_eq!(err.category(), "Connection Error");
        assert!(err.to_string().contains("connection reset"));
    }
}
