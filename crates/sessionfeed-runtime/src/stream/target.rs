use reqwest::Url;
use serde::{Deserialize, Serialize};
use sessionfeed_types::Cursor;
use std::time::Duration;

/// Which cursor a reconnect resumes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumePolicy {
    /// Resume after the last event decoded on this connection, falling back
    /// to the initial cursor before any event has arrived
    #[default]
    Latest,
    /// Always re-request from the initial cursor
    Initial,
}

impl ResumePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumePolicy::Latest => "latest",
            ResumePolicy::Initial => "initial",
        }
    }
}

/// Everything needed to (re)open the event stream
#[derive(Debug, Clone, PartialEq)]
pub struct StreamRequest {
    pub events_url: Url,
    pub capacity: usize,
    pub initial_cursor: Option<Cursor>,
    pub resume: ResumePolicy,
    pub retry: Duration,
}

impl StreamRequest {
    pub fn new(events_url: Url) -> Self {
        Self {
            events_url,
            capacity: sessionfeed_engine::DEFAULT_CAPACITY,
            initial_cursor: None,
            resume: ResumePolicy::default(),
            retry: Duration::from_millis(crate::config::DEFAULT_RETRY_MS),
        }
    }

    /// Cursor to request given the latest decoded event id
    pub fn resume_cursor<'a>(&'a self, latest: Option<&'a Cursor>) -> Option<&'a Cursor> {
        match self.resume {
            ResumePolicy::Latest => latest.or(self.initial_cursor.as_ref()),
            ResumePolicy::Initial => self.initial_cursor.as_ref(),
        }
    }

    /// GET target: the configured URL with `follow`, `limit` and `after` set
    pub fn target(&self, cursor: Option<&Cursor>) -> Url {
        let mut url = self.events_url.clone();

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !matches!(key.as_ref(), "follow" | "limit" | "after"))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(retained);
            pairs.append_pair("follow", "true");
            pairs.append_pair("limit", &self.capacity.to_string());
            if let Some(cursor) = cursor {
                pairs.append_pair("after", cursor.as_str());
            }
        }

        url
    }
}
