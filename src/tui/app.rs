//! Application state for the TUI.
//!
//! Holds everything the renderer reads and turns key presses into state
//! changes or [`Action`]s. Actions that need the database are carried out by
//! the runner in `tui/mod.rs`, which feeds the outcomes back here.

use crate::catalogue::{QueryCatalogue, Selection, TableSpec};
use crate::config::ConnectionConfig;
use crate::db::QueryResult;
use crate::query::{ExecutionOutcome, LoadOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::editor::SqlEditor;
use super::events::Event;

/// Pages listed in the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Introduction,
    LoadTables,
    SqlQueries,
    About,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Introduction,
        View::LoadTables,
        View::SqlQueries,
        View::About,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::LoadTables => "Load Tables",
            Self::SqlQueries => "SQL Queries",
            Self::About => "About",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Navigation,
    Picker,
    Editor,
    Results,
}

impl Focus {
    /// Panels reachable with Tab on the given view, in order.
    fn cycle(view: View) -> &'static [Focus] {
        match view {
            View::SqlQueries => &[Focus::Navigation, Focus::Picker, Focus::Editor, Focus::Results],
            View::LoadTables => &[Focus::Navigation, Focus::Results],
            View::Introduction | View::About => &[Focus::Navigation],
        }
    }

    /// Next panel on the given view.
    pub fn next(self, view: View) -> Self {
        let order = Self::cycle(view);
        let at = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(at + 1) % order.len()]
    }
}

/// Work the runner must perform against the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load the four known tables.
    LoadTables,
    /// Execute the given SQL text.
    Execute(String),
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    pub view: View,
    pub focus: Focus,
    pub catalogue: QueryCatalogue,
    /// Highlighted position in the picker (questions, then the custom option).
    pub picker_index: usize,
    pub editor: SqlEditor,
    /// Outcome of the last execution.
    pub outcome: Option<ExecutionOutcome>,
    /// Loaded tables, in browsing order. Empty until first loaded.
    pub tables: Vec<(TableSpec, LoadOutcome)>,
    /// Which loaded table is on screen.
    pub table_index: usize,
    /// First visible row of the results panel.
    pub results_scroll: usize,
    /// Database connection info for display.
    pub connection_info: Option<String>,
    /// Set while the runner is waiting on the database.
    pub is_busy: bool,
}

impl App {
    /// Creates a new App instance.
    pub fn new(connection: Option<&ConnectionConfig>) -> Self {
        Self {
            running: true,
            view: View::default(),
            focus: Focus::default(),
            catalogue: QueryCatalogue::builtin(),
            picker_index: 0,
            editor: SqlEditor::new(),
            outcome: None,
            tables: Vec::new(),
            table_index: 0,
            results_scroll: 0,
            connection_info: connection.map(|c| c.display_string()),
            is_busy: false,
        }
        .with_seeded_editor()
    }

    fn with_seeded_editor(mut self) -> Self {
        self.select_picker(0);
        self
    }

    /// Current picker selection.
    pub fn selection(&self) -> Selection {
        self.catalogue.selection_at(self.picker_index)
    }

    /// Moves the picker and replaces the editor text with the selection's SQL.
    pub fn select_picker(&mut self, position: usize) {
        let last = self.catalogue.selection_labels().len().saturating_sub(1);
        self.picker_index = position.min(last);
        let seed = self.catalogue.seed_sql(self.selection());
        self.editor.set_text(seed);
    }

    /// Switches page. Opening Load Tables the first time requests a load.
    pub fn open_view(&mut self, view: View) -> Option<Action> {
        self.view = view;
        self.results_scroll = 0;
        if !Focus::cycle(view).contains(&self.focus) {
            self.focus = Focus::Navigation;
        }
        if view == View::LoadTables && self.tables.is_empty() {
            return Some(Action::LoadTables);
        }
        None
    }

    /// Records an execution outcome.
    pub fn apply_execution(&mut self, outcome: ExecutionOutcome) {
        self.outcome = Some(outcome);
        self.results_scroll = 0;
        self.is_busy = false;
    }

    /// Records freshly loaded tables.
    pub fn apply_tables(&mut self, tables: Vec<(TableSpec, LoadOutcome)>) {
        self.tables = tables;
        self.table_index = self.table_index.min(self.tables.len().saturating_sub(1));
        self.results_scroll = 0;
        self.is_busy = false;
    }

    /// The result currently shown in the results panel, if any.
    pub fn visible_result(&self) -> Option<&QueryResult> {
        match self.view {
            View::SqlQueries => self.outcome.as_ref().and_then(ExecutionOutcome::result),
            View::LoadTables => self
                .tables
                .get(self.table_index)
                .map(|(_, outcome)| &outcome.result),
            View::Introduction | View::About => None,
        }
    }

    /// One-line status for the bottom bar.
    pub fn status_line(&self) -> String {
        if self.is_busy {
            return "Running...".to_string();
        }
        let hints = match (self.view, self.focus) {
            (View::SqlQueries, Focus::Editor) => "F5/Ctrl+E execute · Tab next panel",
            (View::SqlQueries, Focus::Picker) => "↑↓ choose question · Tab next panel",
            (View::LoadTables, _) => "←→ switch table · r reload · ↑↓ scroll",
            (_, Focus::Results) => "↑↓ scroll · Tab next panel",
            _ => "↑↓ choose page · Enter open · Tab next panel",
        };
        format!("{hints} · Ctrl+Q quit")
    }

    /// Handles an event, returning database work for the runner.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) | Event::Tick => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.running = false;
                return None;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next(self.view);
                return None;
            }
            KeyCode::F(5) => return self.execute_request(),
            KeyCode::Char('e') if ctrl && self.view == View::SqlQueries => {
                return self.execute_request();
            }
            _ => {}
        }

        match self.focus {
            Focus::Navigation => self.handle_navigation_key(key),
            Focus::Picker => {
                self.handle_picker_key(key);
                None
            }
            Focus::Editor => {
                self.handle_editor_key(key, ctrl);
                None
            }
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn execute_request(&mut self) -> Option<Action> {
        if self.view != View::SqlQueries || self.is_busy {
            return None;
        }
        self.is_busy = true;
        Some(Action::Execute(self.editor.text()))
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Option<Action> {
        let at = self.view.index();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.open_view(View::ALL[(at + View::ALL.len() - 1) % View::ALL.len()])
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.open_view(View::ALL[(at + 1) % View::ALL.len()])
            }
            KeyCode::Enter | KeyCode::Right => {
                self.focus = self.focus.next(self.view);
                None
            }
            KeyCode::Char('r') if self.view == View::LoadTables => Some(Action::LoadTables),
            _ => None,
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let count = self.catalogue.selection_labels().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_picker((self.picker_index + count - 1) % count)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_picker((self.picker_index + 1) % count)
            }
            KeyCode::Home => self.select_picker(0),
            KeyCode::End => self.select_picker(count - 1),
            KeyCode::Enter => self.focus = Focus::Editor,
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('w') if ctrl => self.editor.delete_word_backward(),
            KeyCode::Char(c) if !ctrl => self.editor.insert(c),
            KeyCode::Enter => self.editor.newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::Esc => self.focus = Focus::Navigation,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<Action> {
        let rows = self.visible_result().map(|r| r.rows.len()).unwrap_or(0);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.results_scroll = self.results_scroll.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.results_scroll = (self.results_scroll + 1).min(rows.saturating_sub(1))
            }
            KeyCode::PageUp => self.results_scroll = self.results_scroll.saturating_sub(10),
            KeyCode::PageDown => {
                self.results_scroll = (self.results_scroll + 10).min(rows.saturating_sub(1))
            }
            KeyCode::Home => self.results_scroll = 0,
            KeyCode::Left if self.view == View::LoadTables => {
                self.table_index = self.table_index.saturating_sub(1);
                self.results_scroll = 0;
            }
            KeyCode::Right if self.view == View::LoadTables => {
                if self.table_index + 1 < self.tables.len() {
                    self.table_index += 1;
                    self.results_scroll = 0;
                }
            }
            KeyCode::Char('r') if self.view == View::LoadTables => return Some(Action::LoadTables),
            KeyCode::Esc => self.focus = Focus::Navigation,
            _ => {}
        }
        None
    }
}
