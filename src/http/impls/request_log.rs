use std::collections::VecDeque;
use parking_lot::Mutex;
use crate::http::structs::request_log::RequestLog;

impl RequestLog {
    pub fn new(capacity: usize) -> RequestLog {
        RequestLog {
            lines: Mutex::new(VecDeque::with_capacity(capacity.min(4096))),
            capacity,
        }
    }

    pub fn record(&self, line: String) {
        let mut lines = self.lines.lock();
        while lines.len() >= self.capacity.max(1) {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// The last `count` lines, oldest first.
    pub fn recent(&self, count: usize) -> Vec<String> {
        let lines = self.lines.lock();
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}
