//! TUI Renderer for the watch command
//!
//! ## Design:
//! - `TuiContainer` is the controller's `Container`: it forwards each Screen
//!   to the renderer thread over a std channel
//! - `TuiRenderer` owns UI state only (selection, expanded blocks) and turns
//!   key presses into `ViewerInput`s for the controller
//! - The terminal is restored on every exit path of `run`

use std::collections::HashMap;
use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders, Paragraph},
};
use sessionfeed_runtime::{Container, Screen, ViewerInput};
use sessionfeed_types::EventKind;
use tokio::sync::mpsc::UnboundedSender;

use crate::presentation::views::{
    DetailView, EmptyStateView, EventListComponent, FilterBarView, StatusBarView,
};

/// Relative timestamps ("2 min ago") are recomputed this often
const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Events sent from the controller to the renderer
pub enum TuiEvent {
    Update(Box<Screen>),
}

pub struct TuiContainer {
    tx: Sender<TuiEvent>,
}

impl TuiContainer {
    pub fn new(tx: Sender<TuiEvent>) -> Self {
        Self { tx }
    }
}

impl Container for TuiContainer {
    fn render(&mut self, screen: &Screen) {
        // Ignore errors if the renderer has quit
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen.clone())));
    }
}

/// Raw mode and the alternate screen, restored on drop whatever the exit path
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// What a key press means to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Input(ViewerInput),
    ToggleOutput,
    ToggleDetails,
    Navigate,
}

/// Map a key press to an action. Navigation keys are left to the list.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(KeyAction::Input(ViewerInput::Toggle(EventKind::ALL[index])))
        }
        KeyCode::Char('a') => Some(KeyAction::Input(ViewerInput::ShowAll)),
        KeyCode::Char('n') => Some(KeyAction::Input(ViewerInput::ShowNone)),
        KeyCode::Char('o') => Some(KeyAction::ToggleOutput),
        KeyCode::Char('d') => Some(KeyAction::ToggleDetails),
        KeyCode::Char('j' | 'k')
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Home
        | KeyCode::End => Some(KeyAction::Navigate),
        _ => None,
    }
}

pub struct TuiRenderer {
    inputs: UnboundedSender<ViewerInput>,
    current_screen: Option<Screen>,
    list: EventListComponent,
    /// Output blocks the user expanded or collapsed, by card seq
    output_overrides: HashMap<u64, bool>,
    show_raw: bool,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(inputs: UnboundedSender<ViewerInput>) -> Self {
        Self {
            inputs,
            current_screen: None,
            list: EventListComponent::new(),
            output_overrides: HashMap::new(),
            show_raw: false,
            should_quit: false,
        }
    }

    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        let result = self.run_terminal(&rx);
        // Tell the controller we are gone, including when the terminal failed
        let _ = self.inputs.send(ViewerInput::Quit);
        result
    }

    fn run_terminal(&mut self, rx: &Receiver<TuiEvent>) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.event_loop(&mut terminal, rx)
    }

    /// Take a new screen, forgetting output toggles of cards it no longer has
    fn receive(&mut self, screen: Screen) {
        self.output_overrides
            .retain(|seq, _| screen.cards.iter().any(|card| card.seq == *seq));
        self.current_screen = Some(screen);
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: &Receiver<TuiEvent>,
    ) -> Result<()> {
        let mut last_refresh = Instant::now();

        loop {
            loop {
                match rx.try_recv() {
                    Ok(TuiEvent::Update(screen)) => self.receive(*screen),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return Ok(()),
                }
            }

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if self.should_quit {
                return Ok(());
            }

            if last_refresh.elapsed() >= REFRESH_INTERVAL {
                last_refresh = Instant::now();
                let _ = self.inputs.send(ViewerInput::Refresh);
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(action) = key_action(key) else {
            return;
        };
        let card_count = self.current_screen.as_ref().map_or(0, |s| s.cards.len());

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Input(input) => {
                if self.inputs.send(input).is_err() {
                    self.should_quit = true;
                }
            }
            KeyAction::ToggleOutput => {
                if let Some(card) = self.selected_card() {
                    let seq = card.seq;
                    let open = self.output_open(seq);
                    self.output_overrides.insert(seq, !open);
                }
            }
            KeyAction::ToggleDetails => self.show_raw = !self.show_raw,
            KeyAction::Navigate => {
                self.list.handle_input(key, card_count);
            }
        }
    }

    fn selected_card(&self) -> Option<&sessionfeed_engine::EventCard> {
        let screen = self.current_screen.as_ref()?;
        screen.cards.get(self.list.selected()?)
    }

    fn output_open(&self, seq: u64) -> bool {
        if let Some(open) = self.output_overrides.get(&seq) {
            return *open;
        }
        self.current_screen
            .as_ref()
            .and_then(|screen| screen.cards.iter().find(|card| card.seq == seq))
            .and_then(|card| card.output.as_ref())
            .is_some_and(|output| output.open_by_default)
    }

    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let Some(screen) = self.current_screen.take() else {
            let loading = Paragraph::new("Connecting…")
                .block(Block::default().title("sessionfeed").borders(Borders::ALL));
            f.render_widget(loading, size);
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(3), // Status bar
            Constraint::Length(3), // Filter bar
            Constraint::Min(5),    // List + detail
        ])
        .split(size);

        f.render_widget(StatusBarView::new(&screen), chunks[0]);
        f.render_widget(FilterBarView::new(&screen.filter), chunks[1]);

        let content = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        match screen.empty_state {
            Some(empty) => {
                self.list.sync(0);
                f.render_widget(EmptyStateView::new(empty.message()), content[0]);
            }
            None => self.list.render(f, content[0], &screen.cards, screen.total),
        }

        let selected = self.list.selected().and_then(|i| screen.cards.get(i));
        match selected {
            Some(card) => {
                let open = self
                    .output_overrides
                    .get(&card.seq)
                    .copied()
                    .unwrap_or_else(|| card.output.as_ref().is_some_and(|o| o.open_by_default));
                f.render_widget(DetailView::new(card, open, self.show_raw), content[1]);
            }
            None => {
                let block = Block::default().title("Detail").borders(Borders::ALL);
                f.render_widget(block, content[1]);
            }
        }

        self.current_screen = Some(screen);
    }
}
