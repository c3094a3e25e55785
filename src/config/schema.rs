//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from route table files.

use serde::{Deserialize, Serialize};

/// Root configuration for a router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// History provider settings.
    pub history: HistoryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, matched in file order.
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    /// Distinct route actions, in first-appearance order.
    pub fn actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = Vec::new();
        for route in &self.routes {
            if !actions.contains(&route.action.as_str()) {
                actions.push(&route.action);
            }
        }
        actions
    }
}

/// History provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Token the history starts at (the landing location).
    pub initial_token: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A single route: a pattern and the action it dispatches to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern string, or a `{ regex = "..." }` table.
    pub pattern: toml::Value,

    /// Action name invoked on a match.
    pub action: String,
}
