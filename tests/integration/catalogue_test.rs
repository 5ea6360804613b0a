//! Catalogue queries run end-to-end against the demo data.

use foodshare_console::catalogue::QueryCatalogue;
use foodshare_console::db::Value;
use foodshare_console::query::{ExecutionOutcome, QueryExecutor};
use std::collections::BTreeSet;

use super::common::seeded_client;

async fn run_question(question: &str) -> foodshare_console::db::QueryResult {
    let client = seeded_client().await;
    let sql = QueryCatalogue::builtin().get_sql(question);
    assert!(!sql.is_empty(), "unknown question: {question}");
    match QueryExecutor::new(&client).execute_raw_sql(sql).await {
        ExecutionOutcome::Success(result) => result,
        ExecutionOutcome::Failure(error) => panic!("{question} failed: {error}"),
    }
}

#[tokio::test]
async fn test_every_catalogue_entry_runs() {
    let client = seeded_client().await;
    let executor = QueryExecutor::new(&client);

    for (i, entry) in QueryCatalogue::builtin().entries().iter().enumerate() {
        let outcome = executor.execute_raw_sql(entry.sql).await;
        assert!(
            outcome.is_success(),
            "entry {} ({}) failed: {:?}",
            i + 1,
            entry.question,
            outcome.error()
        );
        let result = outcome.result().unwrap();
        assert!(!result.columns.is_empty(), "entry {} has no columns", i + 1);
    }
}

#[tokio::test]
async fn test_total_quantity_on_demo_data() {
    let result =
        run_question("What is the total quantity of food available from all providers?").await;

    assert_eq!(result.column_names(), vec!["total_food_quantity"]);
    assert_eq!(result.rows, vec![vec![Value::Int(201)]]);
}

#[tokio::test]
async fn test_contact_query_filters_east_sheena() {
    let result =
        run_question("What is the contact information of food providers in a specific city?").await;

    assert_eq!(result.column_names(), vec!["Name", "Type", "City", "Contact"]);
    let names: BTreeSet<String> = result
        .rows
        .iter()
        .map(|row| row[0].to_display_string())
        .collect();
    assert_eq!(
        names,
        BTreeSet::from([
            "Clark, Prince and Williams".to_string(),
            "Nielsen, Johnson and Fuller".to_string(),
        ])
    );
    assert!(result
        .rows
        .iter()
        .all(|row| row[2] == Value::from("East Sheena")));
}

#[tokio::test]
async fn test_claim_status_percentages() {
    let result =
        run_question("What percentage of food claims are completed vs. pending vs. canceled?").await;

    assert_eq!(result.row_count, 3);
    assert_eq!(result.rows[0][0], Value::from("Completed"));
    assert_eq!(result.rows[0][1], Value::Int(4));
    assert_eq!(result.rows[0][2].as_f64(), Some(50.0));

    let total: f64 = result.rows.iter().filter_map(|row| row[2].as_f64()).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_unclaimed_listings() {
    let result = run_question("Total listings still available (unclaimed)").await;

    assert_eq!(result.rows, vec![vec![Value::Int(2)]]);
}

#[tokio::test]
async fn test_city_with_most_listings() {
    let result = run_question("Which city has the highest number of food listings?").await;

    assert_eq!(
        result.rows,
        vec![vec![Value::from("East Sheena"), Value::Int(3)]]
    );
}

#[tokio::test]
async fn test_duplicated_entries_return_the_same_rows() {
    let first = run_question("Provider with most active listings").await;
    let second = run_question("Receiver with claims from most different providers").await;

    assert!(first.same_data(&second));
    assert!(first.column_names()[0].eq_ignore_ascii_case("receiver_name"));
    assert_eq!(first.rows[0][1], Value::Int(2));
}

#[tokio::test]
async fn test_label_with_leading_space_runs() {
    let result = run_question(" City with Highest Number of Unique Receivers").await;

    assert_eq!(result.row_count, 1);
    assert_eq!(result.rows[0][1], Value::Int(1));
}
