//! Router error taxonomy.

use thiserror::Error;

use crate::history::HistoryError;
use crate::routing::dispatcher::HandlerError;

/// Errors raised while registering routes, starting the router or dispatching.
///
/// A token that matches no route is not an error; it is dispatched to the
/// `routeNotFound` action.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The pattern was neither a path string nor a regular expression.
    #[error("pattern must be a path string or a regular expression, got {kind}")]
    InvalidPatternKind { kind: &'static str },

    /// A regular expression supplied as source text failed to compile.
    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("router can only be started once")]
    AlreadyStarted,

    /// A change was delivered before the history provider signalled readiness.
    #[error("router has not been started")]
    NotStarted,

    /// The resolved action has no closure registered in the action table.
    #[error("handler has no action named `{0}`")]
    MissingHandlerMethod(String),

    /// An action closure returned an error.
    #[error("action `{action}` failed: {source}")]
    Handler {
        action: String,
        #[source]
        source: HandlerError,
    },

    #[error("history provider error: {0}")]
    History(#[from] HistoryError),
}
