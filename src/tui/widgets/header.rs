//! Header widget for the TUI.
//!
//! Displays the application name, version, and database connection info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Header bar widget.
pub struct Header<'a> {
    connection_info: Option<&'a str>,
    is_busy: bool,
}

impl<'a> Header<'a> {
    pub fn new(connection_info: Option<&'a str>, is_busy: bool) -> Self {
        Self {
            connection_info,
            is_busy,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);

        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(style);
        }

        let left_text = format!(" Food Waste Management v{}", env!("CARGO_PKG_VERSION"));
        buf.set_span(area.x, area.y, &Span::styled(left_text, style), area.width);

        if self.is_busy {
            let busy = "running query";
            let x = area.x + area.width.saturating_sub(busy.len() as u16) / 2;
            buf.set_string(x, area.y, busy, style.fg(Color::Yellow));
        }

        if let Some(info) = self.connection_info {
            let right_text = format!(" [db: {}] ", info);
            let right_width = right_text.chars().count() as u16;
            if right_width < area.width {
                let right_x = area.right().saturating_sub(right_width);
                buf.set_string(right_x, area.y, &right_text, style);
            }
        }
    }
}
