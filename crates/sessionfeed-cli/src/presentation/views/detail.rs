//! Detail View Component
//!
//! Everything known about the selected card: artifact link, output block
//! and (on demand) the raw event JSON.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use sessionfeed_engine::EventCard;

use super::kind_to_color;

pub struct DetailView<'a> {
    card: &'a EventCard,
    output_open: bool,
    show_raw: bool,
}

impl<'a> DetailView<'a> {
    pub fn new(card: &'a EventCard, output_open: bool, show_raw: bool) -> Self {
        Self {
            card,
            output_open,
            show_raw,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let card = self.card;
        let dim = Style::default().add_modifier(Modifier::DIM);
        let label = Style::default().fg(Color::Yellow);
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", card.icon, card.type_label),
                Style::default()
                    .fg(kind_to_color(card.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{}", card.seq), dim),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Source: ", label),
            Span::raw(card.source.as_str()),
        ]));

        if let Some(ts) = &card.timestamp {
            let mut spans = vec![Span::styled("Time:   ", label), Span::raw(ts.display.as_str())];
            if let Some(relative) = &ts.relative {
                spans.push(Span::styled(format!(" ({})", relative), dim));
            }
            lines.push(Line::from(spans));
            if let Some(iso) = &ts.iso {
                lines.push(Line::from(Span::styled(format!("        {}", iso), dim)));
            }
        }

        if let Some(summary) = &card.summary {
            lines.push(Line::default());
            lines.push(Line::from(summary.as_str()));
        }

        if let Some(progress) = &card.progress {
            lines.push(Line::from(vec![
                Span::styled("Progress: ", label),
                Span::raw(progress.label.as_str()),
            ]));
        }

        if let Some(artifact) = &card.artifact {
            lines.push(Line::default());
            let mut spans = vec![
                Span::styled("Artifact: ", label),
                Span::styled(
                    artifact.label.as_str(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ];
            if artifact.is_image {
                spans.push(Span::styled(" [image]", Style::default().fg(Color::Magenta)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(artifact.uri.as_str(), dim)));
            if let Some(detail) = &artifact.detail {
                lines.push(Line::from(Span::styled(detail.as_str(), dim)));
            }
        }

        if let Some(output) = &card.output {
            lines.push(Line::default());
            let marker = if self.output_open { "▾" } else { "▸" };
            let mut header = vec![Span::styled(format!("{} Output", marker), label)];
            if let Some(stream) = &output.stream {
                header.push(Span::styled(format!(" {}", stream), dim));
            }
            lines.push(Line::from(header));
            if self.output_open {
                lines.extend(output.text.lines().map(Line::from));
            }
        }

        lines.push(Line::default());
        let marker = if self.show_raw { "▾" } else { "▸" };
        lines.push(Line::from(Span::styled(format!("{} Details", marker), label)));
        if self.show_raw {
            lines.extend(card.raw_json.lines().map(|line| Line::from(Span::styled(line, dim))));
        }

        lines
    }
}

impl<'a> Widget for DetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Detail").borders(Borders::ALL);
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Placeholder shown in place of the list when no card is visible
pub struct EmptyStateView<'a> {
    message: &'a str,
}

impl<'a> EmptyStateView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for EmptyStateView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Events").borders(Borders::ALL);
        Paragraph::new(Span::styled(
            self.message,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sessionfeed_engine::{ArtifactView, OutputBlock};
    use sessionfeed_types::EventKind;

    fn card() -> EventCard {
        EventCard {
            seq: 4,
            kind: EventKind::Output,
            type_name: "output".to_string(),
            type_label: "Output".to_string(),
            icon: "O",
            timestamp: None,
            source: "Builder".to_string(),
            summary: Some("compiling".to_string()),
            progress: None,
            artifact: None,
            output: Some(OutputBlock {
                text: "compiling\nfinished".to_string(),
                stream: Some("STDOUT".to_string()),
                open_by_default: true,
            }),
            raw_json: "{\n  \"type\": \"output\"\n}".to_string(),
        }
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_open_output_lists_text_lines() {
        let card = card();
        let lines = text_of(&DetailView::new(&card, true, false).lines());
        assert!(lines.contains(&"▾ Output STDOUT".to_string()));
        assert!(lines.contains(&"finished".to_string()));
        assert!(lines.contains(&"▸ Details".to_string()));
    }

    #[test]
    fn test_collapsed_output_and_raw_json() {
        let card = card();
        let lines = text_of(&DetailView::new(&card, false, true).lines());
        assert!(lines.contains(&"▸ Output STDOUT".to_string()));
        assert!(!lines.contains(&"finished".to_string()));
        assert!(lines.contains(&"  \"type\": \"output\"".to_string()));
    }

    #[test]
    fn test_image_artifact_marker() {
        let mut card = card();
        card.kind = EventKind::Artifact;
        card.output = None;
        card.artifact = Some(ArtifactView {
            uri: "/files/shot.png".to_string(),
            label: "shot.png".to_string(),
            is_image: true,
            detail: Some("image - 2.0 KB".to_string()),
        });

        let lines = text_of(&DetailView::new(&card, false, false).lines());
        assert!(lines.contains(&"Artifact: shot.png [image]".to_string()));
        assert!(lines.contains(&"/files/shot.png".to_string()));
        assert!(lines.contains(&"image - 2.0 KB".to_string()));
    }
}
