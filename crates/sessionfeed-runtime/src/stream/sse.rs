/// One dispatched server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    /// Event name, `message` when the server sent none
    pub event: String,
    pub data: String,
    /// Last event id seen on this stream so far
    pub id: Option<String>,
    /// Reconnection delay requested by the server since the previous frame
    pub retry: Option<u64>,
}

/// Incremental `text/event-stream` parser.
///
/// Feed arbitrary byte chunks; complete frames come out as soon as their
/// terminating blank line arrives. A trailing partial frame is discarded
/// when the stream ends.
#[derive(Debug, Default)]
pub struct SseDecoder {
    line: Vec<u8>,
    skip_lf: bool,
    started: bool,
    event: String,
    data: String,
    last_event_id: Option<String>,
    retry: Option<u64>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        let mut frames = Vec::new();

        for &byte in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\n' => self.finish_line(&mut frames),
                b'\r' => {
                    self.finish_line(&mut frames);
                    self.skip_lf = true;
                }
                _ => self.line.push(byte),
            }
        }

        frames
    }

    fn finish_line(&mut self, frames: &mut Vec<SseFrame>) {
        // CR and LF never occur inside a multi-byte UTF-8 sequence, so each
        // completed line holds whole characters.
        let bytes = std::mem::take(&mut self.line);
        let mut line = String::from_utf8_lossy(&bytes).into_owned();

        if !self.started {
            self.started = true;
            if let Some(stripped) = line.strip_prefix('\u{feff}') {
                line = stripped.to_string();
            }
        }

        if line.is_empty() {
            if let Some(frame) = self.dispatch() {
                frames.push(frame);
            }
            return;
        }

        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };

        match field {
            "event" => self.event = value.to_string(),
            "data" => {
                self.data.push_str(value);
                self.data.push('\n');
            }
            "id" => {
                if !value.contains('\0') {
                    self.last_event_id = (!value.is_empty()).then(|| value.to_string());
                }
            }
            "retry" => {
                if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                    self.retry = value.parse().ok();
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let event = std::mem::take(&mut self.event);
        if self.data.is_empty() {
            return None;
        }

        let mut data = std::mem::take(&mut self.data);
        data.pop();

        Some(SseFrame {
            event: if event.is_empty() {
                "message".to_string()
            } else {
                event
            },
            data,
            id: self.last_event_id.clone(),
            retry: self.retry.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Vec<SseFrame> {
        SseDecoder::new().feed(input.as_bytes())
    }

    #[test]
    fn test_single_named_frame() {
        let frames = decode("event: session_event\ndata: {\"type\":\"status\"}\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].event, "session_event");
        assert_eq!(frames[0].data, "{\"type\":\"status\"}");
        assert_eq!(frames[0].id, None);
    }

    #[test]
    fn test_default_event_name_is_message() {
        let frames = decode("data: hello\n\n");
        assert_eq!(frames[0].event, "message");
    }

    #[test]
    fn test_multiline_data_joined_with_newline() {
        let frames = decode("data: first\ndata: second\ndata\n\n");
        assert_eq!(frames[0].data, "first\nsecond\n");
    }

    #[test]
    fn test_comments_and_unknown_fields_ignored() {
        let frames = decode(": keep-alive\nfoo: bar\ndata: x\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "x");
    }

    #[test]
    fn test_empty_data_not_dispatched() {
        assert!(decode("event: session_event\n\n").is_empty());
        assert!(decode(": ping\n\n").is_empty());
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let frames = decode("event: a\r\ndata: 1\r\n\r\nevent: b\rdata: 2\r\r");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].event, "a");
        assert_eq!(frames[0].data, "1");
        assert_eq!(frames[1].event, "b");
        assert_eq!(frames[1].data, "2");
    }

    #[test]
    fn test_crlf_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: 1\r").is_empty());
        assert!(decoder.feed(b"\n").is_empty());
        let frames = decoder.feed(b"\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "1");
    }

    #[test]
    fn test_only_one_leading_space_stripped() {
        let frames = decode("data:  padded\n\ndata:tight\n\n");
        assert_eq!(frames[0].data, " padded");
        assert_eq!(frames[1].data, "tight");
    }

    #[test]
    fn test_id_persists_across_frames() {
        let frames = decode("id: 7\ndata: a\n\ndata: b\n\nid\ndata: c\n\n");
        assert_eq!(frames[0].id.as_deref(), Some("7"));
        assert_eq!(frames[1].id.as_deref(), Some("7"));
        assert_eq!(frames[2].id, None);
    }

    #[test]
    fn test_id_with_nul_ignored() {
        let frames = decode("id: 1\n\nid: bad\0id\ndata: x\n\n");
        assert_eq!(frames[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_retry_attached_to_next_frame() {
        let frames = decode("retry: 1500\n\nretry: soon\ndata: x\n\ndata: y\n\n");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].retry, Some(1500));
        assert_eq!(frames[1].retry, None);
    }

    #[test]
    fn test_utf8_split_across_chunks() {
        let bytes = "data: héllo\n\n".as_bytes();
        let split = bytes.iter().position(|&b| b == 0xc3).unwrap() + 1;

        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(&bytes[..split]).is_empty());
        let frames = decoder.feed(&bytes[split..]);
        assert_eq!(frames[0].data, "héllo");
    }

    #[test]
    fn test_partial_frame_waits_for_blank_line() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"event: session_event\ndata: {\"a\"").is_empty());
        assert!(decoder.feed(b":1}\n").is_empty());
        let frames = decoder.feed(b"\n");
        assert_eq!(frames[0].data, "{\"a\":1}");
    }

    #[test]
    fn test_leading_bom_stripped() {
        let frames = decode("\u{feff}data: x\n\n");
        assert_eq!(frames[0].data, "x");
    }
}
