//! Bounded command history

use std::collections::VecDeque;

/// Raw command lines in execution order, FIFO-evicted once the cap is
/// reached
#[derive(Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    max_size: usize,
}

impl CommandHistory {
    pub fn new(max_size: usize) -> Self {
        CommandHistory {
            entries: VecDeque::new(),
            max_size,
        }
    }

    pub fn push(&mut self, command: &str) {
        while self.entries.len() >= self.max_size.max(1) {
            self.entries.pop_front();
        }
        self.entries.push_back(command.to_string());
    }

    /// Change the cap, evicting oldest entries if the new cap is smaller
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        while self.entries.len() > self.max_size.max(1) {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The most recent `n` entries, oldest first
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
