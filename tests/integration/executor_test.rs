//! Free-form SQL execution against SQLite.

use foodshare_console::catalogue::QueryCatalogue;
use foodshare_console::db::Value;
use foodshare_console::query::{ErrorKind, QueryExecutor};

use super::common::{client_with, seeded_client};

const LISTINGS_FIXTURE: &str = r#"
    CREATE TABLE food_listings_data ("Food_ID" INTEGER, "Quantity" INTEGER, "Food_Type" TEXT);
    INSERT INTO food_listings_data VALUES (1, 10, 'Vegan'), (2, 20, 'Vegetarian'), (3, 30, 'Vegan');
"#;

#[tokio::test]
async fn test_total_quantity_question_sums_fixture() {
    let client = client_with(LISTINGS_FIXTURE).await;
    let sql = QueryCatalogue::builtin()
        .get_sql("What is the total quantity of food available from all providers?");

    let outcome = QueryExecutor::new(&client).execute_raw_sql(sql).await;

    let result = outcome.result().expect("query should succeed");
    assert_eq!(result.column_names(), vec!["total_food_quantity"]);
    assert_eq!(result.rows, vec![vec![Value::Int(60)]]);
}

#[tokio::test]
async fn test_syntax_error_becomes_failure() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql("SELEC * FROM x")
        .await;

    assert!(!outcome.is_success());
    let error = outcome.error().unwrap();
    assert_eq!(error.kind, ErrorKind::Query);
    assert!(!error.message.is_empty());
    assert!(error.to_string().starts_with("Query Error: "));
}

#[tokio::test]
async fn test_missing_table_becomes_failure() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql("SELECT * FROM donations_data")
        .await;

    let error = outcome.error().expect("query should fail");
    assert!(error.message.contains("donations_data"), "{}", error.message);
}

#[tokio::test]
async fn test_repeated_execution_returns_same_data() {
    let client = seeded_client().await;
    let executor = QueryExecutor::new(&client);
    let sql = r#"SELECT "Food_Type", COUNT(*) AS n FROM food_listings_data GROUP BY "Food_Type" ORDER BY "Food_Type""#;

    let first = executor.execute_raw_sql(sql).await;
    let second = executor.execute_raw_sql(sql).await;

    assert!(first.result().unwrap().same_data(second.result().unwrap()));
}

#[tokio::test]
async fn test_trailing_terminators_are_accepted() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql("SELECT COUNT(*) AS n FROM claims_data;\n;  ")
        .await;

    assert_eq!(outcome.result().unwrap().rows, vec![vec![Value::Int(8)]]);
}

#[tokio::test]
async fn test_empty_result_keeps_columns() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql(r#"SELECT "Name", "City" FROM providers_data WHERE "City" = 'Atlantis'"#)
        .await;

    let result = outcome.result().unwrap();
    assert!(result.is_empty());
    assert_eq!(result.row_count, 0);
    assert_eq!(result.column_names(), vec!["Name", "City"]);
}

#[tokio::test]
async fn test_write_statements_are_executed() {
    let client = seeded_client().await;
    let executor = QueryExecutor::new(&client);

    let delete = executor
        .execute_raw_sql(r#"DELETE FROM claims_data WHERE "Status" = 'Cancelled'"#)
        .await;
    assert!(delete.is_success(), "{:?}", delete.error());

    let count = executor
        .execute_raw_sql("SELECT COUNT(*) AS n FROM claims_data")
        .await;
    assert_eq!(count.result().unwrap().rows, vec![vec![Value::Int(6)]]);
}

#[tokio::test]
async fn test_row_cap_truncates_results() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .with_max_rows(Some(3))
        .execute_raw_sql("SELECT * FROM food_listings_data")
        .await;

    let result = outcome.result().unwrap();
    assert_eq!(result.row_count, 3);
    assert_eq!(result.total_rows, Some(8));
    assert!(result.was_truncated);
}

#[tokio::test]
async fn test_multiple_statements_return_last_result() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql("SELECT 1 AS a; SELECT 'x' AS b, 2 AS c;")
        .await;

    let result = outcome.result().expect("batch should succeed");
    assert_eq!(result.column_names(), vec!["b", "c"]);
    assert_eq!(result.rows, vec![vec![Value::from("x"), Value::Int(2)]]);
    assert!(result.rows.iter().all(|row| row.len() == result.columns.len()));
}

#[tokio::test]
async fn test_batch_runs_statements_in_order() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql(
            r#"DELETE FROM claims_data WHERE "Status" = 'Pending';
               SELECT "Status", COUNT(*) AS n FROM claims_data GROUP BY "Status" ORDER BY "Status";"#,
        )
        .await;

    let result = outcome.result().expect("batch should succeed");
    assert_eq!(
        result.rows,
        vec![
            vec![Value::from("Cancelled"), Value::Int(2)],
            vec![Value::from("Completed"), Value::Int(4)],
        ]
    );
}

#[tokio::test]
async fn test_failing_statement_in_batch_is_reported() {
    let client = seeded_client().await;

    let outcome = QueryExecutor::new(&client)
        .execute_raw_sql("SELECT 1 AS a; SELECT * FROM donations_data")
        .await;

    let error = outcome.error().expect("batch should fail");
    assert_eq!(error.kind, ErrorKind::Query);
    assert!(error.message.contains("donations_data"), "{}", error.message);
}
