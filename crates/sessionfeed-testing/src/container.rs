use sessionfeed_runtime::{Container, Screen};

/// Container that records every screen it is asked to render.
#[derive(Debug, Default)]
pub struct RecordingContainer {
    pub screens: Vec<Screen>,
}

impl RecordingContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent screen.
    ///
    /// # Panics
    /// If nothing was rendered yet.
    pub fn last(&self) -> &Screen {
        self.screens.last().expect("no screen rendered yet")
    }

    /// Status labels in render order, with consecutive repeats collapsed
    pub fn status_history(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Vec::new();
        for screen in &self.screens {
            if labels.last() != Some(&screen.status.label) {
                labels.push(screen.status.label);
            }
        }
        labels
    }

    pub fn render_count(&self) -> usize {
        self.screens.len()
    }
}

impl Container for RecordingContainer {
    fn render(&mut self, screen: &Screen) {
        self.screens.push(screen.clone());
    }
}
