use std::collections::VecDeque;

use sessionfeed_types::SessionEvent;

/// Default number of events retained by a viewer
pub const DEFAULT_CAPACITY: usize = 200;

/// An event together with its local arrival index.
///
/// `seq` is assigned by the buffer, strictly increasing, and never reused;
/// renderers use it to track an entry across re-renders and evictions.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferedEvent {
    pub seq: u64,
    pub event: SessionEvent,
}

/// Capacity-bounded, insertion-ordered event log with FIFO eviction.
///
/// Entries are never reordered, mutated or deduplicated.
#[derive(Debug, Clone)]
pub struct EventBuffer {
    entries: VecDeque<BufferedEvent>,
    capacity: usize,
    next_seq: u64,
}

impl EventBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            next_seq: 0,
        }
    }

    /// Append at the tail, evicting from the head until the capacity holds.
    /// Returns the sequence number given to the new entry.
    pub fn append(&mut self, event: SessionEvent) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push_back(BufferedEvent { seq, event });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        seq
    }

    /// Events in arrival order
    pub fn all(&self) -> Vec<&SessionEvent> {
        self.entries.iter().map(|entry| &entry.event).collect()
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &BufferedEvent> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(id: &str) -> SessionEvent {
        SessionEvent::from_value(json!({"id": id, "type": "output", "payload": {"text": id}}))
            .unwrap()
    }

    fn ids(buffer: &EventBuffer) -> Vec<String> {
        buffer
            .all()
            .iter()
            .map(|e| e.id.as_ref().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_capacity_two_keeps_latest_two() {
        let mut buffer = EventBuffer::new(2);
        buffer.append(event("A"));
        buffer.append(event("B"));
        buffer.append(event("C"));

        assert_eq!(ids(&buffer), vec!["B", "C"]);
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut buffer = EventBuffer::new(5);
        for i in 0..23 {
            buffer.append(event(&i.to_string()));
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(ids(&buffer), vec!["18", "19", "20", "21", "22"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut buffer = EventBuffer::new(3);
        buffer.append(event("A"));
        buffer.append(event("A"));

        assert_eq!(ids(&buffer), vec!["A", "A"]);
    }

    #[test]
    fn test_seq_survives_eviction() {
        let mut buffer = EventBuffer::new(1);
        assert_eq!(buffer.append(event("A")), 0);
        assert_eq!(buffer.append(event("B")), 1);

        let seqs: Vec<u64> = buffer.entries().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1]);
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut buffer = EventBuffer::new(0);
        buffer.append(event("A"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(EventBuffer::default().capacity(), 200);
    }
}
