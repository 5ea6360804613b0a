//! SQLite database client implementation.
//!
//! Serves local database files and private in-memory databases. The latter
//! back the demo seed and the test fixtures; they live as long as the pool's
//! single connection, so the pool never lets it expire.

use crate::config::ConnectionConfig;
use crate::db::{last_statement_rows, ColumnInfo, DatabaseClient, QueryResult, Row, Value};
use crate::error::{ConsoleError, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column as SqlxColumn, Executor, Row as SqlxRow, TypeInfo, ValueRef};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const IN_MEMORY: &str = ":memory:";

/// SQLite database client.
#[derive(Debug)]
pub struct SqliteClient {
    pool: SqlitePool,
}

impl SqliteClient {
    /// Opens the database named by the connection config.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let path = config.require_database()?;
        if path == IN_MEMORY {
            return Self::connect_in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite://{path}"))
            .map_err(|e| ConsoleError::config(format!("Invalid SQLite path '{path}': {e}")))?
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| ConsoleError::connection(format!("Cannot open SQLite database '{path}': {e}")))?;

        debug!("Opened SQLite database at {}", path);
        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| ConsoleError::internal(format!("Invalid in-memory options: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| ConsoleError::connection(format!("Cannot open in-memory database: {e}")))?;

        Ok(Self { pool })
    }

    /// Runs a multi-statement SQL script (schema and fixture data).
    pub async fn execute_script(&self, script: &str) -> Result<()> {
        sqlx::raw_sql(script)
            .execute(&self.pool)
            .await
            .map_err(|e| ConsoleError::query(format!("Seed script failed: {e}")))?;
        info!("Applied seed script ({} bytes)", script.len());
        Ok(())
    }

    /// Resolves column metadata for a statement that returned no rows.
    async fn describe_columns(&self, sql: &str) -> Vec<ColumnInfo> {
        match (&self.pool).describe(sql).await {
            Ok(describe) => describe
                .columns()
                .iter()
                .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                .collect(),
            Err(e) => {
                debug!("Could not describe empty result: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DatabaseClient for SqliteClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();

        let result = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ConsoleError::query(format_query_error(e)))?;

        let execution_time = start.elapsed();

        let columns: Vec<ColumnInfo> = match result.first() {
            Some(first_row) => first_row
                .columns()
                .iter()
                .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                .collect(),
            None => self.describe_columns(sql).await,
        };

        let rows: Vec<Row> = result.iter().map(convert_row).collect();

        Ok(QueryResult::with_data(columns, rows).with_execution_time(execution_time))
    }

    async fn execute_batch(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();

        let steps: Vec<_> = sqlx::raw_sql(sql)
            .fetch_many(&self.pool)
            .try_collect()
            .await
            .map_err(|e| ConsoleError::query(format_query_error(e)))?;

        let execution_time = start.elapsed();
        let rows = last_statement_rows(steps);

        // A final statement without rows has no column metadata to report.
        let columns: Vec<ColumnInfo> = rows
            .first()
            .map(|first_row| {
                first_row
                    .columns()
                    .iter()
                    .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                    .collect()
            })
            .unwrap_or_default();

        let rows: Vec<Row> = rows.iter().map(convert_row).collect();

        Ok(QueryResult::with_data(columns, rows).with_execution_time(execution_time))
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    (0..row.columns().len())
        .map(|i| convert_value(row, i))
        .collect()
}

/// Converts a single value using its runtime storage class.
///
/// Declared column types are unreliable for expressions (`SUM`, `ROUND`, ...),
/// so the value itself decides.
fn convert_value(row: &SqliteRow, index: usize) -> Value {
    let Ok(raw) = row.try_get_raw(index) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    let storage = raw.type_info().name().to_uppercase();

    match storage.as_str() {
        "INTEGER" | "INT8" | "BIGINT" => row
            .try_get::<i64, _>(index)
            .map(Value::Int)
            .unwrap_or(Value::Null),
        "BOOLEAN" => row
            .try_get::<bool, _>(index)
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(index)
            .map(Value::Float)
            .unwrap_or(Value::Null),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(Value::Bytes)
            .unwrap_or(Value::Null),
        _ => row
            .try_get::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

/// Formats a SQLite error without the driver prefix.
fn format_query_error(error: sqlx::Error) -> String {
    match error.as_database_error() {
        Some(db_error) => format!("ERROR: {}", db_error.message()),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> SqliteClient {
        let client = SqliteClient::connect_in_memory().await.unwrap();
        client
            .execute_script(
                r#"
                CREATE TABLE food_listings_data ("Food_ID" INTEGER, "Quantity" INTEGER, "Food_Type" TEXT);
                INSERT INTO food_listings_data VALUES (1, 10, 'Vegan'), (2, 20, NULL), (3, 30, 'Vegan');
                "#,
            )
            .await
            .unwrap();
        client
    }

    #[tokio::test]
    async fn test_in_memory_state_survives_between_calls() {
        let client = seeded().await;
        let first = client
            .execute_query("SELECT COUNT(*) AS n FROM food_listings_data")
            .await
            .unwrap();
        let second = client
            .execute_query("SELECT COUNT(*) AS n FROM food_listings_data")
            .await
            .unwrap();
        assert_eq!(first.rows, vec![vec![Value::Int(3)]]);
        assert!(first.same_data(&second));
    }

    #[tokio::test]
    async fn test_values_use_runtime_storage_class() {
        let client = seeded().await;
        let result = client
            .execute_query(
                r#"SELECT SUM("Quantity") AS total, AVG("Quantity") AS mean, "Food_Type"
                   FROM food_listings_data WHERE "Food_ID" = 2"#,
            )
            .await
            .unwrap();

        assert_eq!(result.column_names(), vec!["total", "mean", "Food_Type"]);
        assert_eq!(result.rows[0][0], Value::Int(20));
        assert_eq!(result.rows[0][1], Value::Float(20.0));
        assert_eq!(result.rows[0][2], Value::Null);
    }

    #[tokio::test]
    async fn test_empty_result_keeps_columns() {
        let client = seeded().await;
        let result = client
            .execute_query(r#"SELECT "Food_ID", "Quantity" FROM food_listings_data WHERE 1 = 0"#)
            .await
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.column_names(), vec!["Food_ID", "Quantity"]);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_error() {
        let client = seeded().await;
        let err = client
            .execute_query("SELECT * FROM nonexistent_table_xyz")
            .await
            .unwrap_err();
        assert_eq!(err.category(), "Query Error");
        assert!(err.to_string().contains("nonexistent_table_xyz"));
    }

    #[tokio::test]
    async fn test_connect_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConnectionConfig::from_connection_string(&format!(
            "sqlite://{}",
            dir.path().join("absent.db").display()
        ))
        .unwrap();
        let err = SqliteClient::connect(&config).await.unwrap_err();
        assert_eq!(err.category(), "Connection Error");
    }

    #[tokio::test]
    async fn test_bad_seed_script_is_reported() {
        let client = SqliteClient::connect_in_memory().await.unwrap();
        let err = client.execute_script("CREATE TABLE (").await.unwrap_err();
        assert!(err.to_string().contains("Seed script failed"));
    }
}
