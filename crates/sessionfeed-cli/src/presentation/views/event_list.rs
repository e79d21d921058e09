//! Event List View Component
//!
//! Scrollable list of visible cards plus the selection state behind it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use sessionfeed_engine::EventCard;

use super::kind_to_color;

const GAUGE_WIDTH: usize = 20;

pub struct EventListView<'a> {
    cards: &'a [EventCard],
    total: usize,
}

impl<'a> EventListView<'a> {
    pub fn new(cards: &'a [EventCard], total: usize) -> Self {
        Self { cards, total }
    }

    pub fn build_list(self) -> List<'a> {
        let title = format!("Events ({}/{})", self.cards.len(), self.total);
        let block = Block::default().title(title).borders(Borders::ALL);

        let items: Vec<ListItem<'a>> = self.cards.iter().map(card_item).collect();

        List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}

fn card_item(card: &EventCard) -> ListItem<'_> {
    let color = kind_to_color(card.kind);
    let time = card
        .timestamp
        .as_ref()
        .map(|ts| ts.relative.as_deref().unwrap_or(&ts.display))
        .unwrap_or("");

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", card.icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", card.type_label), Style::default().fg(color)),
        Span::styled(
            format!("{} ", card.source),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Span::styled(time, Style::default().add_modifier(Modifier::DIM)),
    ])];

    if let Some(summary) = &card.summary {
        lines.push(Line::from(format!("  {}", summary)));
    }

    if let Some(progress) = &card.progress {
        let filled = ((progress.percent / 100.0) * GAUGE_WIDTH as f64).round() as usize;
        let filled = filled.min(GAUGE_WIDTH);
        lines.push(Line::from(vec![
            Span::raw("  ["),
            Span::styled("#".repeat(filled), Style::default().fg(color)),
            Span::raw("-".repeat(GAUGE_WIDTH - filled)),
            Span::raw(format!("] {}", progress.label)),
        ]));
    }

    ListItem::new(lines)
}

/// Selection over the visible cards.
///
/// While following, the newest card stays selected as cards arrive; moving
/// the selection up stops following and reaching the end resumes it.
pub struct EventListComponent {
    state: ListState,
    follow: bool,
}

impl Default for EventListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            follow: true,
        }
    }

    /// Returns `true` when the key was consumed
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(data_len),
            KeyCode::Char('k') | KeyCode::Up => self.previous(data_len),
            KeyCode::PageDown => self.page_down(data_len),
            KeyCode::PageUp => self.page_up(data_len),
            KeyCode::Home => self.select(Some(0), data_len),
            KeyCode::End => self.select(data_len.checked_sub(1), data_len),
            _ => return false,
        }
        true
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Clamp the selection to the current data before rendering
    pub fn sync(&mut self, data_len: usize) {
        if data_len == 0 {
            self.state.select(None);
        } else if self.follow {
            self.state.select(Some(data_len - 1));
        } else if let Some(selected) = self.state.selected()
            && selected >= data_len
        {
            self.state.select(Some(data_len - 1));
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, cards: &[EventCard], total: usize) {
        self.sync(cards.len());
        let list = EventListView::new(cards, total).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn select(&mut self, index: Option<usize>, data_len: usize) {
        self.state.select(index);
        self.follow = match index {
            Some(i) => i + 1 >= data_len,
            None => true,
        };
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(data_len - 1),
            None => 0,
        };
        self.select(Some(next), data_len);
    }

    fn previous(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => data_len - 1,
        };
        self.select(Some(prev), data_len);
    }

    fn page_down(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 10).min(data_len - 1),
            None => 0,
        };
        self.select(Some(next), data_len);
    }

    fn page_up(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(10));
        self.select(Some(prev), data_len);
    }
}
