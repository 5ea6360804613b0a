//! Question picker for the SQL Queries page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Numbered list of catalogue questions followed by the custom option.
pub struct QuestionPicker<'a> {
    labels: &'a [&'a str],
    selected: usize,
    focused: bool,
}

impl<'a> QuestionPicker<'a> {
    pub fn new(labels: &'a [&'a str], selected: usize, focused: bool) -> Self {
        Self {
            labels,
            selected,
            focused,
        }
    }
}

impl Widget for QuestionPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let number_width = self.labels.len().to_string().len();
        let items: Vec<ListItem> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                ListItem::new(format!("{:>w$}. {}", i + 1, label.trim(), w = number_width))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Choose a predefined query "),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_row_is_scrolled_into_view() {
        let labels: Vec<String> = (1..=30).map(|i| format!("Question {i}")).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);

        QuestionPicker::new(&labels, 29, true).render(area, &mut buf);

        let rendered: String = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("30. Question 30"));
    }
}
