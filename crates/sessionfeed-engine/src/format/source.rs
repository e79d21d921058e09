use sessionfeed_types::EventSource;

use super::text::capitalize;

/// Who emitted the event: explicit label, else capitalised kind, else "System"
pub fn source_label(source: Option<&EventSource>) -> String {
    let Some(source) = source else {
        return "System".to_string();
    };
    if let Some(label) = &source.label {
        return label.clone();
    }
    match &source.kind {
        Some(kind) => capitalize(kind),
        None => "System".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_fallbacks() {
        let labelled = EventSource {
            kind: Some("worker".to_string()),
            label: Some("Build worker #2".to_string()),
        };
        let kind_only = EventSource {
            kind: Some("agent".to_string()),
            label: None,
        };

        assert_eq!(source_label(Some(&labelled)), "Build worker #2");
        assert_eq!(source_label(Some(&kind_only)), "Agent");
        assert_eq!(source_label(Some(&EventSource::default())), "System");
        assert_eq!(source_label(None), "System");
    }
}
