//! Terminal user interface.
//!
//! Provides the main TUI loop using ratatui and crossterm. Database work
//! requested by the app state is awaited in place, one request at a time, and
//! the outcome is rendered on the next frame.

pub mod app;
mod editor;
mod events;
mod ui;
pub mod widgets;

pub use app::{Action, App, Focus, View};
pub use editor::SqlEditor;
pub use events::{Event, EventHandler};

use crate::config::{ConnectionConfig, ConsoleConfig};
use crate::db::DatabaseClient;
use crate::error::{ConsoleError, Result};
use crate::query::{QueryExecutor, TableLoader};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self {
            terminal,
            event_handler: EventHandler::with_tick_rate(tick_rate),
        })
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| ConsoleError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            ConsoleError::internal(format!("Failed to enter alternate screen: {e}"))
        })?;

        Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| ConsoleError::internal(format!("Failed to create terminal: {e}")))
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| ConsoleError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
            ConsoleError::internal(format!("Failed to leave alternate screen: {e}"))
        })?;

        self.terminal
            .show_cursor()
            .map_err(|e| ConsoleError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| ConsoleError::internal(format!("Failed to draw: {e}")))?;
        Ok(())
    }

    /// Runs the event loop until the user quits.
    pub async fn run(
        &mut self,
        db: &dyn DatabaseClient,
        connection: &ConnectionConfig,
        max_rows: Option<usize>,
    ) -> Result<()> {
        let _panic_guard = PanicHookGuard::install();

        let executor = QueryExecutor::new(db).with_max_rows(max_rows);
        let loader = TableLoader::new(db).with_max_rows(max_rows);
        let mut app = App::new(Some(connection));

        self.event_loop(&mut app, &executor, &loader).await
    }

    async fn event_loop(
        &mut self,
        app: &mut App,
        executor: &QueryExecutor<'_>,
        loader: &TableLoader<'_>,
    ) -> Result<()> {
        while app.running {
            self.draw(app)?;

            let Some(action) = app.handle_event(self.event_handler.next()?) else {
                continue;
            };

            app.is_busy = true;
            self.draw(app)?;

            match action {
                Action::LoadTables => {
                    debug!("Loading tables");
                    let tables = loader.load_all().await;
                    app.apply_tables(tables);
                }
                Action::Execute(sql) => {
                    let outcome = executor.execute_raw_sql(&sql).await;
                    app.apply_execution(outcome);
                }
            }
        }
        Ok(())
    }
}

type PanicHook = Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Restores the terminal before the previous panic hook runs, and puts that
/// hook back when dropped.
struct PanicHookGuard {
    previous: Option<Arc<PanicHook>>,
}

impl PanicHookGuard {
    fn install() -> Self {
        let previous = Arc::new(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            chained(panic_info);
        }));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // Dropping the installed hook releases its handle on `previous`.
        let _ = panic::take_hook();
        if let Some(previous) = self.previous.take().and_then(|p| Arc::try_unwrap(p).ok()) {
            panic::set_hook(previous);
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the interactive console against an open database client.
pub async fn run(
    db: &dyn DatabaseClient,
    connection: &ConnectionConfig,
    console: &ConsoleConfig,
) -> Result<()> {
    info!("Starting interactive console");
    let mut tui = Tui::new(Duration::from_millis(console.tick_rate_ms))?;
    tui.run(db, connection, console.max_rows).await
}
