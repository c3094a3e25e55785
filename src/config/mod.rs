//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → Router::add_routes registers routes in file order
//! ```
//!
//! # Design Decisions
//! - All sections have defaults so an empty file is a valid config
//! - Patterns stay raw TOML values until registration, so kind errors
//!   surface as router errors
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::HistoryConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
