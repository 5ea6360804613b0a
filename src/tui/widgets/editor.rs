//! SQL editor panel.

use crate::tui::editor::SqlEditor;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered view of the editor text, scrolled to keep the cursor visible.
pub struct EditorPanel<'a> {
    editor: &'a SqlEditor,
    focused: bool,
}

impl<'a> EditorPanel<'a> {
    pub fn new(editor: &'a SqlEditor, focused: bool) -> Self {
        Self { editor, focused }
    }

    /// First visible (line, column) for an inner area of the given size.
    fn offset(&self, inner: Rect) -> (usize, usize) {
        let (row, col) = self.editor.cursor();
        let height = (inner.height as usize).max(1);
        let width = (inner.width as usize).max(1);
        (
            (row + 1).saturating_sub(height),
            (col + 1).saturating_sub(width),
        )
    }

    /// Screen position of the cursor, if the panel is focused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let (row, col) = self.editor.cursor();
        let (top, left) = self.offset(inner);
        Some(Position::new(
            inner.x + (col - left) as u16,
            inner.y + (row - top) as u16,
        ))
    }
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Edit or enter your SQL query ");

        let (top, left) = self.offset(block.inner(area));
        let lines: Vec<Line> = self
            .editor
            .lines()
            .iter()
            .map(|l| Line::raw(l.as_str()))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .scroll((top as u16, left as u16))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_position_inside_border() {
        let mut editor = SqlEditor::new();
        editor.set_text("SELECT 1");
        editor.move_end();
        let area = Rect::new(10, 5, 40, 6);

        let panel = EditorPanel::new(&editor, true);
        assert_eq!(panel.cursor_position(area), Some(Position::new(19, 6)));
        assert_eq!(EditorPanel::new(&editor, false).cursor_position(area), None);
    }

    #[test]
    fn test_scrolls_to_cursor_line() {
        let mut editor = SqlEditor::new();
        editor.set_text(&(0..10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n"));
        for _ in 0..9 {
            editor.move_down();
        }
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        EditorPanel::new(&editor, true).render(area, &mut buf);

        let last_inner_row: String = (1..29).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(last_inner_row.starts_with("line 9"));
        assert_eq!(
            EditorPanel::new(&editor, true).cursor_position(area),
            Some(Position::new(1, 3))
        );
    }
}
