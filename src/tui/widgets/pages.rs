//! Static text pages: Introduction and About.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const INTRODUCTION: &[&str] = &[
    "Why food waste management?",
    "",
    "Food waste is a global issue with local solutions. This console connects",
    "providers (restaurants, grocery stores) with receivers (NGOs, shelters) to",
    "reduce waste and redistribute surplus food.",
    "",
    "It supports:",
    "  • Viewing the providers, receivers, listings and claims tables",
    "  • Running a catalogue of analytical SQL queries",
    "  • Editing those queries or writing your own",
    "",
    "Use ↑↓ in the navigation panel to switch pages and Tab to move between panels.",
];

const ABOUT: &[&str] = &[
    "Food Waste Management console",
    "",
    "A terminal front end for a food donation database: providers list surplus",
    "food, receivers claim it, and the catalogue answers questions about both.",
    "",
    "Backends: PostgreSQL, or SQLite for local files and demo data.",
    "",
    "Logs are written to the state directory; set RUST_LOG=debug for more detail.",
];

/// A bordered, word-wrapped page of static text.
pub struct TextPage {
    title: &'static str,
    body: &'static [&'static str],
}

impl TextPage {
    pub fn introduction() -> Self {
        Self {
            title: " Food Waste Management System ",
            body: INTRODUCTION,
        }
    }

    pub fn about() -> Self {
        Self {
            title: " About ",
            body: ABOUT,
        }
    }
}

impl Widget for TextPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::with_capacity(self.body.len());
        for (i, text) in self.body.iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(Span::styled(
                    *text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::raw(*text));
            }
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(self.title),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
