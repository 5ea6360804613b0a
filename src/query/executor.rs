//! Free-text SQL execution.
//!
//! The executor sends whatever SQL it is given (a catalogue entry, an edited
//! entry, or a custom statement) and folds every outcome into an
//! [`ExecutionOutcome`]. Statements are inspected for logging only; writes are
//! reported but not blocked.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::outcome::{ErrorDescription, ExecutionOutcome};
use crate::db::DatabaseClient;
use crate::sql::{inspect, normalize_statement, sql_preview, StatementAccess};

const PREVIEW_CHARS: usize = 120;

/// Runs user-supplied SQL against an injected database client.
pub struct QueryExecutor<'a> {
    db: &'a dyn DatabaseClient,
    max_rows: Option<usize>,
}

impl<'a> QueryExecutor<'a> {
    /// Creates an executor that returns whole results.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db, max_rows: None }
    }

    /// Keeps at most `max_rows` rows of each result, when set.
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Executes arbitrary SQL text.
    ///
    /// Trailing terminators are stripped first; text that is empty afterwards
    /// fails without reaching the database. Text holding several statements
    /// runs as one batch and yields the last statement's result. Any database
    /// error becomes `Failure` carrying the driver's message.
    pub async fn execute_raw_sql(&self, sql: &str) -> ExecutionOutcome {
        let statement = normalize_statement(sql);
        if statement.is_empty() {
            debug!("Ignoring empty SQL text");
            return ExecutionOutcome::Failure(ErrorDescription::query("No SQL to execute"));
        }

        let preview = sql_preview(statement, PREVIEW_CHARS);
        let statement_count = match inspect(statement) {
            Ok(inspection) => {
                if inspection.access == StatementAccess::Writes {
                    warn!(sql = %preview, "Executing statement that may modify data");
                } else {
                    debug!(sql = %preview, tables = ?inspection.tables, "Executing read-only statement");
                }
                inspection.statement_count
            }
            Err(e) => {
                debug!(sql = %preview, "Parser could not inspect statement, sending as-is: {}", e);
                1
            }
        };

        let start = Instant::now();
        let result = if statement_count > 1 {
            debug!(statements = statement_count, "Running as a batch, keeping the last result");
            self.db.execute_batch(statement).await
        } else {
            self.db.execute_query(statement).await
        };
        match result {
            Ok(result) => {
                info!(
                    rows = result.row_count,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Query succeeded"
                );
                ExecutionOutcome::Success(result.capped(self.max_rows))
            }
            Err(e) => {
                warn!(sql = %preview, "Query failed: {}", e);
                ExecutionOutcome::Failure(ErrorDescription::from_query_error(&e))
            }
        }
    }
}
