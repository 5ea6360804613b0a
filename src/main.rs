//! Food Waste Management console.

use std::io::Read;
use std::path::Path;

use foodshare_console::catalogue::{find_table, known_table_names, QueryCatalogue};
use foodshare_console::cli::{Cli, Command, OutputFormat};
use foodshare_console::config::{Config, ConnectionConfig};
use foodshare_console::db::{self, DatabaseBackend, DatabaseClient, SqliteClient};
use foodshare_console::error::{ConsoleError, Result};
use foodshare_console::logging;
use foodshare_console::output;
use foodshare_console::query::{QueryExecutor, TableLoader};
use foodshare_console::tui;
use tracing::{error, info, warn};

/// Exit status for a batch command whose query or load failed.
const EXIT_BATCH_FAILURE: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let dotenv = dotenvy::dotenv();

    if cli.command.is_some() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Could not read .env file: {}", e);
        }
    }

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_BATCH_FAILURE),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            eprintln!("{}: {}", e.category(), e.message());
            std::process::exit(1);
        }
    }
}

/// Runs the requested command. `Ok(false)` means a batch query or load failed.
async fn run(cli: Cli) -> Result<bool> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let catalogue = QueryCatalogue::builtin();

    if let Some(command) = cli.command.as_ref().filter(|c| !c.needs_database()) {
        print_catalogue(command, &catalogue, cli.output)?;
        return Ok(true);
    }

    let connection = cli
        .resolve_connection(&config, std::env::var("DATABASE_URL").ok())?
        .ok_or_else(|| {
            ConsoleError::config(
                "No database connection configured. Pass a connection string, \
                 set DATABASE_URL, or use --seed with a SQL script.",
            )
        })?;
    info!("Connection: {}", connection.display_string());

    let client = open_client(&connection, cli.seed.as_deref()).await?;
    let max_rows = config.console.max_rows;

    let succeeded = match cli.command {
        None => {
            tui::run(client.as_ref(), &connection, &config.console).await?;
            true
        }
        Some(Command::Run { number }) => {
            let entry = catalogue.by_number(number).ok_or_else(|| no_such_question(number))?;
            info!("Running question {}: {}", number, entry.question.trim());
            let outcome = QueryExecutor::new(client.as_ref())
                .with_max_rows(max_rows)
                .execute_raw_sql(entry.sql)
                .await;
            println!("{}", output::render_outcome(&outcome, cli.output)?);
            outcome.is_success()
        }
        Some(Command::Sql { text }) => {
            let sql = if text == "-" { read_stdin()? } else { text };
            let outcome = QueryExecutor::new(client.as_ref())
                .with_max_rows(max_rows)
                .execute_raw_sql(&sql)
                .await;
            println!("{}", output::render_outcome(&outcome, cli.output)?);
            outcome.is_success()
        }
        Some(Command::Tables { name }) => {
            let loader = TableLoader::new(client.as_ref()).with_max_rows(max_rows);
            let loads = match name {
                Some(name) => {
                    let spec = find_table(&name).ok_or_else(|| {
                        ConsoleError::config(format!(
                            "Unknown table '{}'. Known tables: {}",
                            name,
                            known_table_names().join(", ")
                        ))
                    })?;
                    vec![(*spec, loader.load(spec.table_name).await)]
                }
                None => loader.load_all().await,
            };
            println!("{}", output::render_loads(&loads, cli.output)?);
            loads.iter().all(|(_, outcome)| outcome.is_success())
        }
        Some(Command::Questions) | Some(Command::Show { .. }) => true,
    };

    if let Err(e) = client.close().await {
        warn!("Error closing database connection: {}", e);
    }
    Ok(succeeded)
}

/// Answers commands that only read the catalogue.
fn print_catalogue(
    command: &Command,
    catalogue: &QueryCatalogue,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Questions => println!("{}", output::render_questions(catalogue, format)?),
        Command::Show { number } => {
            let entry = catalogue.by_number(*number).ok_or_else(|| no_such_question(*number))?;
            println!("{}", entry.sql);
        }
        Command::Run { .. } | Command::Sql { .. } | Command::Tables { .. } => {}
    }
    Ok(())
}

/// Connects and, for SQLite, applies the seed script.
async fn open_client(
    connection: &ConnectionConfig,
    seed: Option<&Path>,
) -> Result<Box<dyn DatabaseClient>> {
    let Some(seed) = seed else {
        return db::connect(connection).await;
    };

    if connection.backend != DatabaseBackend::Sqlite {
        return Err(ConsoleError::config(
            "--seed can only be used with a SQLite database",
        ));
    }

    let script = std::fs::read_to_string(seed).map_err(|e| {
        ConsoleError::config(format!("Failed to read seed file {}: {e}", seed.display()))
    })?;
    let client = SqliteClient::connect(connection).await?;
    client.execute_script(&script).await?;
    Ok(Box::new(client))
}

fn read_stdin() -> Result<String> {
    let mut sql = String::new();
    std::io::stdin()
        .read_to_string(&mut sql)
        .map_err(|e| ConsoleError::internal(format!("Failed to read SQL from stdin: {e}")))?;
    Ok(sql)
}

fn no_such_question(number: usize) -> ConsoleError {
    ConsoleError::config(format!(
        "No question {number}. Run `foodshare questions` to list them."
    ))
}
