//! Filter Bar View Component
//!
//! One checkbox per event type, with the key that toggles it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use sessionfeed_engine::FilterState;
use sessionfeed_types::EventKind;

use super::kind_to_color;

pub struct FilterBarView<'a> {
    filter: &'a FilterState,
}

impl<'a> FilterBarView<'a> {
    pub fn new(filter: &'a FilterState) -> Self {
        Self { filter }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Filter");
        let inner = block.inner(area);
        block.render(area, buf);

        let key = Style::default().fg(Color::Yellow);
        let mut spans = Vec::new();
        for (index, kind) in EventKind::ALL.into_iter().enumerate() {
            let enabled = self.filter.contains(kind);
            let (mark, style) = if enabled {
                ("[x] ", Style::default().fg(kind_to_color(kind)))
            } else {
                ("[ ] ", Style::default().add_modifier(Modifier::DIM))
            };

            spans.push(Span::styled(format!("{}:", index + 1), key));
            spans.push(Span::styled(mark, style));
            spans.push(Span::styled(kind.as_str(), style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[a]", key));
        spans.push(Span::raw("ll "));
        spans.push(Span::styled("[n]", key));
        spans.push(Span::raw("one"));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_enabled_types() {
        let filter = FilterState::from_kinds([EventKind::Error]);
        let area = Rect::new(0, 0, 140, 3);
        let mut buf = Buffer::empty(area);
        FilterBarView::new(&filter).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("4:[x] error"));
        assert!(text.contains("1:[ ] status"));
    }
}
