//! Navigation sidebar.

use crate::tui::app::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Lists the pages and marks the open one.
pub struct Sidebar {
    current: View,
    focused: bool,
}

impl Sidebar {
    pub fn new(current: View, focused: bool) -> Self {
        Self { current, focused }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Navigation ");

        let lines: Vec<Line> = View::ALL
            .iter()
            .map(|view| {
                if *view == self.current {
                    Line::from(Span::styled(
                        format!("▸ {}", view.title()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(format!("  {}", view.title())))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
