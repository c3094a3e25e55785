//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router and history produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and gauges via the `metrics` facade)
//!
//! Consumers:
//!     → stderr (fmt subscriber, installed by the binary)
//!     → any `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers/recorders is the host's job
//! - Metric updates without a recorder are no-ops

pub mod logging;
pub mod metrics;
