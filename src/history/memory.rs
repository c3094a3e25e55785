//! In-memory history with back/forward navigation.
//!
//! # Responsibilities
//! - Keep a stack of visited tokens and a cursor into it
//! - Turn pushes and user navigation into change events
//! - Accept user navigation from other tasks through a `HistoryHandle`
//!
//! # Design Decisions
//! - Visiting the current token is a no-op (no change event)
//! - Pushing after going back discards the forward entries
//! - Changes are delivered in arrival order, whether pushed or queued by a handle
//! - Closing the handle (or dropping every handle) ends `next_change`

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::history::location::token_from_location;
use crate::history::provider::{HistoryError, HistoryProvider};

#[derive(Debug)]
enum Command {
    Visit(String),
    Back,
    Forward,
    Close,
}

/// Drives a `MemoryHistory` the way a user drives a browser.
#[derive(Debug, Clone)]
pub struct HistoryHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl HistoryHandle {
    /// Go to a location (URL, `#fragment` or bare token).
    pub fn visit(&self, location: &str) -> Result<(), HistoryError> {
        self.send(Command::Visit(token_from_location(location)))
    }

    pub fn back(&self) -> Result<(), HistoryError> {
        self.send(Command::Back)
    }

    pub fn forward(&self) -> Result<(), HistoryError> {
        self.send(Command::Forward)
    }

    /// Stop the provider once already-queued navigation has been delivered.
    pub fn close(&self) -> Result<(), HistoryError> {
        self.send(Command::Close)
    }

    fn send(&self, command: Command) -> Result<(), HistoryError> {
        self.tx.send(command).map_err(|_| HistoryError::Closed)
    }
}

#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    pending: VecDeque<String>,
    commands: mpsc::UnboundedReceiver<Command>,
    closed: bool,
}

impl MemoryHistory {
    /// Create a history positioned at `initial`, plus a handle to drive it.
    pub fn new(initial: impl Into<String>) -> (Self, HistoryHandle) {
        let (tx, commands) = mpsc::unbounded_channel();
        let history = Self {
            entries: vec![initial.into()],
            index: 0,
            pending: VecDeque::new(),
            commands,
            closed: false,
        };
        (history, HistoryHandle { tx })
    }

    pub fn current_token(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Returns true if the current token changed.
    fn push(&mut self, token: String) -> bool {
        if token == self.current_token() {
            tracing::trace!(token = %token, "Token unchanged, no history entry");
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(token);
        self.index = self.entries.len() - 1;
        true
    }

    fn apply(&mut self, command: Command) -> Option<String> {
        let moved = match command {
            Command::Visit(token) => self.push(token),
            Command::Back if self.can_go_back() => {
                self.index -= 1;
                true
            }
            Command::Forward if self.can_go_forward() => {
                self.index += 1;
                true
            }
            Command::Back | Command::Forward => false,
            Command::Close => {
                self.closed = true;
                false
            }
        };
        moved.then(|| self.current_token().to_string())
    }

    /// Apply navigation already queued by handles, keeping arrival order.
    fn drain_commands(&mut self) {
        while !self.closed {
            match self.commands.try_recv() {
                Ok(command) => {
                    if let Some(token) = self.apply(command) {
                        self.pending.push_back(token);
                    }
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => self.closed = true,
            }
        }
    }
}

#[async_trait(?Send)]
impl HistoryProvider for MemoryHistory {
    async fn init(&mut self) -> Result<Option<String>, HistoryError> {
        tokio::task::yield_now().await;
        Ok(Some(self.current_token().to_string()))
    }

    async fn next_change(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.closed {
                return None;
            }
            match self.commands.recv().await {
                Some(command) => {
                    if let Some(token) = self.apply(command) {
                        return Some(token);
                    }
                }
                None => self.closed = true,
            }
        }
    }

    fn add(&mut self, token: &str) -> Result<(), HistoryError> {
        self.drain_commands();
        if self.closed {
            return Err(HistoryError::Closed);
        }
        if self.push(token.to_string()) {
            self.pending.push_back(token.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_reports_initial_token() {
        let (mut history, _handle) = MemoryHistory::new("pages/1/");
        assert_eq!(history.init().await.unwrap(), Some("pages/1/".to_string()));
    }

    #[tokio::test]
    async fn test_add_emits_one_change() {
        let (mut history, handle) = MemoryHistory::new("");
        history.add("a").unwrap();
        history.add("a").unwrap();
        handle.close().unwrap();

        assert_eq!(history.next_change().await, Some("a".to_string()));
        assert_eq!(history.next_change().await, None);
        assert_eq!(history.entries(), ["", "a"]);
    }

    #[tokio::test]
    async fn test_back_and_forward() {
        let (mut history, handle) = MemoryHistory::new("");
        handle.visit("#a").unwrap();
        handle.visit("https://app/#b").unwrap();
        handle.back().unwrap();
        handle.back().unwrap();
        handle.back().unwrap();
        handle.forward().unwrap();
        handle.close().unwrap();

        let mut changes = Vec::new();
        while let Some(token) = history.next_change().await {
            changes.push(token);
        }
        assert_eq!(changes, ["a", "b", "a", "", "a"]);
        assert!(history.can_go_forward());
    }

    #[tokio::test]
    async fn test_push_truncates_forward_entries() {
        let (mut history, handle) = MemoryHistory::new("");
        history.add("a").unwrap();
        history.add("b").unwrap();
        handle.back().unwrap();
        handle.visit("c").unwrap();
        handle.close().unwrap();

        while history.next_change().await.is_some() {}
        assert_eq!(history.entries(), ["", "a", "c"]);
        assert!(!history.can_go_forward());
    }

    #[tokio::test]
    async fn test_queued_visit_precedes_later_add() {
        let (mut history, handle) = MemoryHistory::new("");
        handle.visit("a").unwrap();
        handle.back().unwrap();
        history.add("b").unwrap();
        handle.close().unwrap();

        let mut changes = Vec::new();
        while let Some(token) = history.next_change().await {
            changes.push(token);
        }
        assert_eq!(changes, ["a", "", "b"]);
        assert_eq!(history.entries(), ["", "b"]);
        assert_eq!(history.current_token(), "b");
    }

    #[tokio::test]
    async fn test_add_after_close_is_rejected() {
        let (mut history, handle) = MemoryHistory::new("");
        handle.visit("a").unwrap();
        handle.close().unwrap();

        assert!(matches!(history.add("b"), Err(HistoryError::Closed)));
        assert_eq!(history.next_change().await, Some("a".to_string()));
        assert_eq!(history.next_change().await, None);
    }

    #[tokio::test]
    async fn test_dropped_handle_closes() {
        let (mut history, handle) = MemoryHistory::new("");
        drop(handle);
        assert_eq!(history.next_change().await, None);
        assert!(matches!(history.add("x"), Err(HistoryError::Closed)));
    }
}
