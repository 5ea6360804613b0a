//! Whole-table loading for the browsing view.

use tracing::{debug, warn};

use super::outcome::{ErrorDescription, LoadOutcome};
use crate::catalogue::{TableSpec, KNOWN_TABLES};
use crate::db::DatabaseClient;
use crate::sql::quote_identifier;

/// Fetches entire tables through an injected database client.
pub struct TableLoader<'a> {
    db: &'a dyn DatabaseClient,
    max_rows: Option<usize>,
}

impl<'a> TableLoader<'a> {
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db, max_rows: None }
    }

    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Loads every row of `table`.
    ///
    /// Never fails: a missing or unreadable table yields an empty result and a
    /// failure naming the table.
    pub async fn load(&self, table: &str) -> LoadOutcome {
        let sql = select_all_sql(table);
        debug!("Loading table {}", table);

        match self.db.execute_query(&sql).await {
            Ok(result) => LoadOutcome::loaded(table, result.capped(self.max_rows)),
            Err(e) => {
                warn!("Failed to load {}: {}", table, e);
                LoadOutcome::failed(table, ErrorDescription::load(table, e.message()))
            }
        }
    }

    /// Loads the known tables in browsing order.
    pub async fn load_all(&self) -> Vec<(TableSpec, LoadOutcome)> {
        let mut loaded = Vec::with_capacity(KNOWN_TABLES.len());
        for spec in KNOWN_TABLES {
            loaded.push((*spec, self.load(spec.table_name).await));
        }
        loaded
    }
}

/// The statement used to fetch a whole table.
pub fn select_all_sql(table: &str) -> String {
    format!("SELECT * FROM {}", quote_identifier(table))
}
