//! Whole-table loading against SQLite.

use foodshare_console::catalogue::KNOWN_TABLES;
use foodshare_console::db::Value;
use foodshare_console::query::{ErrorKind, TableLoader};

use super::common::{client_with, seeded_client};

#[tokio::test]
async fn test_load_providers() {
    let client = seeded_client().await;

    let outcome = TableLoader::new(&client).load("providers_data").await;

    assert!(outcome.is_success());
    assert_eq!(outcome.table, "providers_data");
    assert_eq!(
        outcome.result.column_names(),
        vec!["Provider_ID", "Name", "Type", "Address", "City", "Contact"]
    );
    assert_eq!(outcome.result.row_count, 5);
    assert_eq!(outcome.result.rows[0][0], Value::Int(1));
}

#[tokio::test]
async fn test_load_all_in_browsing_order() {
    let client = seeded_client().await;

    let loads = TableLoader::new(&client).load_all().await;

    let names: Vec<&str> = loads.iter().map(|(spec, _)| spec.table_name).collect();
    assert_eq!(
        names,
        vec!["providers_data", "receivers_data", "food_listings_data", "claims_data"]
    );
    let counts: Vec<usize> = loads.iter().map(|(_, o)| o.result.row_count).collect();
    assert_eq!(counts, vec![5, 5, 8, 8]);
    assert!(loads.iter().all(|(_, o)| o.is_success()));
}

#[tokio::test]
async fn test_missing_table_yields_empty_result_and_failure() {
    let client = seeded_client().await;

    let outcome = TableLoader::new(&client).load("nonexistent_table").await;

    assert!(!outcome.is_success());
    assert!(outcome.result.is_empty());
    assert!(outcome.result.columns.is_empty());
    let failure = outcome.failure.unwrap();
    assert_eq!(failure.kind, ErrorKind::Load);
    assert!(failure.message.starts_with("Failed to load nonexistent_table: "));
}

#[tokio::test]
async fn test_load_all_on_empty_database_reports_each_table() {
    let client = client_with("").await;

    let loads = TableLoader::new(&client).load_all().await;

    assert_eq!(loads.len(), KNOWN_TABLES.len());
    for (spec, outcome) in &loads {
        let failure = outcome.failure.as_ref().expect("table should be missing");
        assert!(failure.message.contains(spec.table_name), "{}", failure.message);
    }
}

#[tokio::test]
async fn test_empty_table_keeps_columns() {
    let client = client_with(r#"CREATE TABLE claims_data ("Claim_ID" INTEGER, "Status" TEXT);"#).await;

    let outcome = TableLoader::new(&client).load("claims_data").await;

    assert!(outcome.is_success());
    assert!(outcome.result.is_empty());
    assert_eq!(outcome.result.column_names(), vec!["Claim_ID", "Status"]);
}
