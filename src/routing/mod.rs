//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     pattern ("/pages/:id/", regex, config value)
//!     → matcher.rs (escape literals, compile params, anchor)
//!     → registry.rs (append Route in order)
//!
//! Dispatch (on every token change):
//!     token
//!     → registry.rs (first full match wins, collect captures)
//!     → route.rs (build RouteInfo)
//!     → dispatcher.rs (invoke action closure, or routeNotFound)
//! ```
//!
//! # Design Decisions
//! - Routes are append-only, never reordered or removed
//! - First match wins (registration order)
//! - No match is a normal outcome, routed to `routeNotFound`
//! - Actions are closures looked up by name at dispatch time

pub mod dispatcher;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod route;
pub mod router;

pub use dispatcher::{ActionTable, HandlerError, NOT_FOUND_ACTION};
pub use error::RouterError;
pub use matcher::{compile_pattern, IntoPattern};
pub use registry::RouteRegistry;
pub use route::{Resolved, Route, RouteInfo};
pub use router::Router;
