use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Display forms of an event timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampLabel {
    /// Local wall-clock time, or the raw string when it cannot be parsed
    pub display: String,
    /// Normalised UTC form, only for parsable timestamps
    pub iso: Option<String>,
    /// "5 min ago" relative to the viewer clock
    pub relative: Option<String>,
}

/// Format an RFC 3339 timestamp; unparsable values are shown verbatim.
pub fn format_timestamp(ts: Option<&str>, now: DateTime<Utc>) -> Option<TimestampLabel> {
    let ts = ts.filter(|ts| !ts.is_empty())?;

    let Ok(parsed) = DateTime::parse_from_rfc3339(ts) else {
        return Some(TimestampLabel {
            display: ts.to_string(),
            iso: None,
            relative: None,
        });
    };
    let utc = parsed.with_timezone(&Utc);

    Some(TimestampLabel {
        display: utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        iso: Some(utc.to_rfc3339_opts(SecondsFormat::Millis, true)),
        relative: Some(format_relative_time(utc, now)),
    })
}

/// "just now", "2 min ago", "yesterday", ...
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(at);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
