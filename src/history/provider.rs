//! The contract a history backend fulfils for the router.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The provider stopped delivering changes.
    #[error("history provider is closed")]
    Closed,

    #[error("history provider rejected token {token:?}: {reason}")]
    Rejected { token: String, reason: String },
}

/// A source of location tokens.
///
/// Providers are driven from a single event loop, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait HistoryProvider {
    /// Prepare the provider and return the current token once ready.
    async fn init(&mut self) -> Result<Option<String>, HistoryError>;

    /// Wait for the next location change. `None` once the provider is closed.
    async fn next_change(&mut self) -> Option<String>;

    /// Push a new token. A change is delivered later through `next_change`.
    fn add(&mut self, token: &str) -> Result<(), HistoryError>;
}
