//! Status Bar View Component
//!
//! Connection indicator, buffer counts and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use sessionfeed_runtime::Screen;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    screen: &'a Screen,
}

impl<'a> StatusBarView<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.screen.status.level);

        let block = Block::default().borders(Borders::ALL).title("sessionfeed");
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                self.screen.status.label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(format!(
                "Events: {}/{} ",
                self.screen.total, self.screen.capacity
            )),
            Span::raw("| "),
            Span::raw(format!("Showing: {}", self.screen.cards.len())),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[j/k]", key),
            Span::raw("select "),
            Span::styled("[o]", key),
            Span::raw("utput "),
            Span::styled("[d]", key),
            Span::raw("etails"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
