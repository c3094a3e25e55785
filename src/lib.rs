//! Hash-fragment router for single-page applications.
//!
//! Maps location fragment tokens (the part after `#`) to registered
//! patterns and dispatches to named actions, passing captured path
//! segments as arguments.

pub mod config;
pub mod history;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use history::{HistoryError, HistoryHandle, HistoryProvider, MemoryHistory};
pub use routing::{HandlerError, RouteInfo, Router, RouterError, NOT_FOUND_ACTION};
