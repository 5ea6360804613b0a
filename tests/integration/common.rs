//! Shared fixtures.

use foodshare_console::db::SqliteClient;

/// Demo schema and data shipped with the console.
pub const SEED_SQL: &str = include_str!("../../fixtures/foodshare_seed.sql");

/// An in-memory database with the demo schema and data.
pub async fn seeded_client() -> SqliteClient {
    client_with(SEED_SQL).await
}

/// An in-memory database initialised with `script`.
pub async fn client_with(script: &str) -> SqliteClient {
    let client = SqliteClient::connect_in_memory()
        .await
        .expect("in-memory database");
    if !script.trim().is_empty() {
        client.execute_script(script).await.expect("fixture script");
    }
    client
}
