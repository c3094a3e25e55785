//! History provider boundary.
//!
//! # Data Flow
//! ```text
//! Router::start
//!     → provider.init() (async ready signal, current token)
//!     → initial dispatch
//!
//! User navigation (back/forward/typed location)
//!     → provider.next_change() yields token
//!     → Router dispatches
//!
//! Router::navigate(token)
//!     → provider.add(token)
//!     → provider emits a change (only if the token differs)
//!     → same dispatch path as user navigation
//! ```
//!
//! # Design Decisions
//! - Provider is injected into the router, never a global
//! - Programmatic navigation is never dispatched synchronously
//! - Same-token navigation produces no change event

pub mod location;
pub mod memory;
pub mod provider;

pub use location::token_from_location;
pub use memory::{HistoryHandle, MemoryHistory};
pub use provider::{HistoryError, HistoryProvider};
