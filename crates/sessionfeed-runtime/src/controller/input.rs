use sessionfeed_types::EventKind;

/// User intent delivered to a running viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerInput {
    Toggle(EventKind),
    ShowAll,
    ShowNone,
    /// Re-render without any state change (clock tick, terminal resize)
    Refresh,
    Quit,
}
