//! Line-oriented container for `watch --mode console`.
//!
//! Prints the status when it changes and each newly visible card once.

use owo_colors::OwoColorize;
use sessionfeed_engine::{EmptyState, EventCard};
use sessionfeed_runtime::{Container, Screen, StatusIndicator, StatusLevel};
use std::io::Write;

pub struct ConsoleContainer {
    color: bool,
    last_status: Option<&'static str>,
    last_seq: Option<u64>,
    last_empty: Option<EmptyState>,
}

impl ConsoleContainer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            last_status: None,
            last_seq: None,
            last_empty: None,
        }
    }

    /// Lines a screen adds to the output, advancing what has been printed
    pub fn lines_for(&mut self, screen: &Screen) -> Vec<String> {
        let mut lines = Vec::new();

        if self.last_status != Some(screen.status.label) {
            self.last_status = Some(screen.status.label);
            lines.push(format_status_line(&screen.status, self.color));
        }

        if screen.empty_state != self.last_empty {
            self.last_empty = screen.empty_state;
            if let Some(empty) = screen.empty_state {
                lines.push(format_hint_line(empty.message(), self.color));
            }
        }

        for card in &screen.cards {
            if self.last_seq.is_some_and(|seq| card.seq <= seq) {
                continue;
            }
            lines.push(format_card_line(card, self.color));
            if let Some(output) = &card.output {
                lines.extend(output.text.lines().map(|line| format!("    {}", line)));
            }
        }
        if let Some(newest) = screen.cards.last() {
            self.last_seq = Some(self.last_seq.map_or(newest.seq, |s| s.max(newest.seq)));
        }

        lines
    }
}

impl Container for ConsoleContainer {
    fn render(&mut self, screen: &Screen) {
        let lines = self.lines_for(screen);
        if lines.is_empty() {
            return;
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            // A closed pipe ends output; the controller keeps running until quit
            if writeln!(out, "{}", line).is_err() {
                return;
            }
        }
        let _ = out.flush();
    }
}

pub fn format_status_line(status: &StatusIndicator, color: bool) -> String {
    let label = format!("● {}", status.label);
    if !color {
        return label;
    }
    match status.level {
        StatusLevel::Info => label.cyan().to_string(),
        StatusLevel::Success => label.green().to_string(),
        StatusLevel::Warning => label.yellow().to_string(),
        StatusLevel::Error => label.red().bold().to_string(),
    }
}

fn format_hint_line(message: &str, color: bool) -> String {
    if color {
        message.dimmed().to_string()
    } else {
        message.to_string()
    }
}

pub fn format_card_line(card: &EventCard, color: bool) -> String {
    let badge = format!("[{}] {}", card.icon, card.type_label);
    let badge = if color {
        match card.kind {
            sessionfeed_types::EventKind::Error => badge.red().bold().to_string(),
            sessionfeed_types::EventKind::Status => badge.cyan().to_string(),
            sessionfeed_types::EventKind::Progress => badge.blue().to_string(),
            sessionfeed_types::EventKind::Output => badge.white().to_string(),
            sessionfeed_types::EventKind::Artifact => badge.magenta().to_string(),
            sessionfeed_types::EventKind::Unknown => badge.dimmed().to_string(),
        }
    } else {
        badge
    };

    let mut line = format!("#{} {}", card.seq, badge);

    if let Some(ts) = &card.timestamp {
        line.push_str(&format!(" {}", ts.display));
    }
    if !card.source.is_empty() {
        let source = if color {
            card.source.dimmed().to_string()
        } else {
            card.source.clone()
        };
        line.push_str(&format!(" {}", source));
    }
    if let Some(summary) = &card.summary {
        line.push_str(&format!(" {}", summary));
    }
    if let Some(progress) = &card.progress {
        line.push_str(&format!(" ({})", progress.label));
    }
    if let Some(artifact) = &card.artifact {
        line.push_str(&format!(" -> {}", artifact.label));
        if artifact.label != artifact.uri {
            line.push_str(&format!(" <{}>", artifact.uri));
        }
    }

    line
}
