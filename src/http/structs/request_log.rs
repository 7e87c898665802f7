use std::collections::VecDeque;
use parking_lot::Mutex;

/// Most recent `"<ip> - <METHOD> <uri> <status>"` lines, oldest first.
#[derive(Debug)]
pub struct RequestLog {
    pub lines: Mutex<VecDeque<String>>,
    pub capacity: usize,
}
