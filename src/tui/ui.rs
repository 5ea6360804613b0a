//! UI rendering for the TUI.
//!
//! Defines the layout and renders all UI components.

use super::app::{App, Focus, View};
use super::widgets::{
    editor::EditorPanel, header::Header, pages::TextPage, picker::QuestionPicker,
    sidebar::Sidebar, table::ResultTable,
};
use crate::query::ExecutionOutcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 22;

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Sidebar + page
            Constraint::Length(1), // Status
        ])
        .split(frame.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(main_layout[1]);

    frame.render_widget(
        Header::new(app.connection_info.as_deref(), app.is_busy),
        main_layout[0],
    );
    frame.render_widget(
        Sidebar::new(app.view, app.focus == Focus::Navigation),
        content[0],
    );

    match app.view {
        View::Introduction => frame.render_widget(TextPage::introduction(), content[1]),
        View::About => frame.render_widget(TextPage::about(), content[1]),
        View::LoadTables => render_tables(frame, content[1], app),
        View::SqlQueries => render_queries(frame, content[1], app),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            app.status_line(),
            Style::default().fg(Color::DarkGray),
        )),
        main_layout[2],
    );
}

fn results_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Renders the table-browsing page: a tab line and the selected table.
fn render_tables(frame: &mut Frame, area: Rect, app: &App) {
    let block = results_block(" View All Tables ".to_string(), app.focus == Focus::Results);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.tables.is_empty() {
        let text = if app.is_busy { "Loading tables..." } else { "Press r to load tables" };
        frame.render_widget(Paragraph::new(text), inner);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let mut tabs = Vec::new();
    for (i, (spec, outcome)) in app.tables.iter().enumerate() {
        let mut style = if outcome.is_success() {
            Style::default()
        } else {
            Style::default().fg(Color::Red)
        };
        if i == app.table_index {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        tabs.push(Span::styled(format!(" {} ", spec.display_name), style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), layout[0]);

    let Some((spec, outcome)) = app.tables.get(app.table_index) else {
        return;
    };
    match &outcome.failure {
        Some(failure) => frame.render_widget(
            Paragraph::new(Span::styled(failure.to_string(), Style::default().fg(Color::Red)))
                .wrap(Wrap { trim: false }),
            layout[1],
        ),
        None => {
            let table_area = layout[1];
            let title = Line::from(Span::styled(
                format!("{} Table", spec.display_name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(title), Rect { height: 1, ..table_area });
            frame.render_widget(
                ResultTable::new(&outcome.result).scroll(app.results_scroll),
                Rect {
                    y: table_area.y + 1,
                    height: table_area.height.saturating_sub(1),
                    ..table_area
                },
            );
        }
    }
}

/// Renders the catalogue page: picker, editor, outcome and results.
fn render_queries(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),  // Picker
            Constraint::Length(10), // Editor
            Constraint::Min(3),     // Outcome + results
        ])
        .split(area);

    let labels = app.catalogue.selection_labels();
    frame.render_widget(
        QuestionPicker::new(&labels, app.picker_index, app.focus == Focus::Picker),
        layout[0],
    );

    let editor = EditorPanel::new(&app.editor, app.focus == Focus::Editor);
    let cursor = editor.cursor_position(layout[1]);
    frame.render_widget(editor, layout[1]);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }

    let block = results_block(" Results ".to_string(), app.focus == Focus::Results);
    let inner = block.inner(layout[2]);
    frame.render_widget(block, layout[2]);

    let (message, style) = match &app.outcome {
        None if app.is_busy => ("Running...".to_string(), Style::default().fg(Color::Yellow)),
        None => (
            "Press F5 or Ctrl+E to execute the query".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(ExecutionOutcome::Success(_)) => (
            "✓ Query executed successfully".to_string(),
            Style::default().fg(Color::Green),
        ),
        Some(ExecutionOutcome::Failure(error)) => {
            (format!("✗ {error}"), Style::default().fg(Color::Red))
        }
    };

    let message_height = match &app.outcome {
        Some(ExecutionOutcome::Failure(_)) => inner.height,
        _ => 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message, style)).wrap(Wrap { trim: false }),
        Rect {
            height: message_height.min(inner.height),
            ..inner
        },
    );

    if let Some(ExecutionOutcome::Success(result)) = &app.outcome {
        frame.render_widget(
            ResultTable::new(result).scroll(app.results_scroll),
            Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            },
        );
    }
}
