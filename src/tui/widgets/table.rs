//! Result table widget for the TUI.
//!
//! Renders query results as bordered tables with column headers, auto-sized
//! columns, right-aligned numbers, and styled NULL values. The header stays in
//! place while rows scroll.

use crate::db::{QueryResult, Value};
use crate::output::{border, column_widths, fit_widths, footer, pad_cell, truncate_cell};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

fn frame_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Widget for rendering a query result as a table.
pub struct ResultTable<'a> {
    result: &'a QueryResult,
    scroll: usize,
}

impl<'a> ResultTable<'a> {
    pub fn new(result: &'a QueryResult) -> Self {
        Self { result, scroll: 0 }
    }

    /// Skips the first `scroll` rows.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Renders the table into at most `height` lines.
    ///
    /// The footer is always the last line; rows are dropped from the bottom
    /// to make room for it.
    pub fn render_to_lines(&self, available_width: usize, height: usize) -> Vec<Line<'a>> {
        if self.result.columns.is_empty() {
            return vec![Line::from(Span::styled("(empty result)", frame_style()))];
        }

        let widths = fit_widths(&column_widths(self.result), available_width);

        // top border, header, separator, bottom border, footer
        let row_budget = height.saturating_sub(5);
        let start = self.scroll.min(self.result.rows.len());

        let mut lines = Vec::with_capacity(row_budget + 5);
        lines.push(Line::from(Span::styled(border(&widths, '┌', '┬', '┐'), frame_style())));
        lines.push(self.header_row(&widths));
        lines.push(Line::from(Span::styled(border(&widths, '├', '┼', '┤'), frame_style())));
        for row in self.result.rows.iter().skip(start).take(row_budget) {
            lines.push(Self::data_row(row, &widths));
        }
        lines.push(Line::from(Span::styled(border(&widths, '└', '┴', '┘'), frame_style())));

        let mut summary = footer(self.result);
        if start > 0 {
            summary.push_str(&format!("  (from row {})", start + 1));
        }
        lines.push(Line::from(Span::styled(summary, frame_style())));
        lines
    }

    fn header_row(&self, widths: &[usize]) -> Line<'a> {
        let mut spans = vec![Span::styled("│", frame_style())];
        for (col, &width) in self.result.columns.iter().zip(widths) {
            spans.push(Span::styled(
                pad_cell(&truncate_cell(&col.name, width), width, false),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│", frame_style()));
        }
        Line::from(spans)
    }

    fn data_row(row: &[Value], widths: &[usize]) -> Line<'a> {
        let mut spans = vec![Span::styled("│", frame_style())];
        for (value, &width) in row.iter().zip(widths) {
            let text = truncate_cell(&value.to_display_string(), width);
            let style = if value.is_null() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            spans.push(Span::styled(pad_cell(&text, width, value.is_numeric()), style));
            spans.push(Span::styled("│", frame_style()));
        }
        Line::from(spans)
    }
}

impl Widget for ResultTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.render_to_lines(area.width as usize, area.height as usize);
        for (i, line) in lines.iter().enumerate().take(area.height as usize) {
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
