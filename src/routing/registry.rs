//! Ordered route storage and token resolution.
//!
//! # Responsibilities
//! - Append compiled routes in registration order
//! - Resolve a token to the first route that matches it
//!
//! # Design Decisions
//! - No deduplication or conflict detection
//! - Explicit `None` for no match; the caller decides what not-found means

use crate::observability::metrics;
use crate::routing::error::RouterError;
use crate::routing::matcher::IntoPattern;
use crate::routing::route::{Resolved, Route};

#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the pattern and append a route for `action`.
    pub fn add<P: IntoPattern>(
        &mut self,
        pattern: P,
        action: impl Into<String>,
    ) -> Result<(), RouterError> {
        let route = Route::new(pattern.into_matcher()?, action);
        tracing::debug!(
            pattern = %route.matcher().as_str(),
            action = %route.action(),
            "Route registered"
        );
        self.routes.push(route);
        metrics::record_routes_registered(self.routes.len());
        Ok(())
    }

    /// Find the first route matching the whole token.
    pub fn resolve(&self, token: &str) -> Option<Resolved<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .captures(token)
                .map(|args| Resolved { route, args })
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        registry.add("", "dashboard").unwrap();
        registry.add("/pages/", "showAllPages").unwrap();
        registry.add("/pages/:id/", "showPage").unwrap();
        registry
    }

    #[test]
    fn test_resolve_root() {
        let registry = registry();
        let resolved = registry.resolve("").unwrap();
        assert_eq!(resolved.route.action(), "dashboard");
        assert!(resolved.args.is_empty());
    }

    #[test]
    fn test_resolve_with_captures() {
        let registry = registry();
        let resolved = registry.resolve("/pages/42/").unwrap();
        assert_eq!(resolved.route.action(), "showPage");
        assert_eq!(resolved.args, vec!["42".to_string()]);
    }

    #[test]
    fn test_resolve_no_match() {
        let registry = registry();
        assert!(registry.resolve("/pages").is_none());
        assert!(registry.resolve("/other/").is_none());
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = RouteRegistry::new();
        registry.add("/pages/:id/", "byId").unwrap();
        registry.add("/pages/new/", "create").unwrap();
        registry.add("/pages/*rest", "catchAll").unwrap();

        assert_eq!(registry.resolve("/pages/new/").unwrap().route.action(), "byId");
        assert_eq!(registry.resolve("/pages/a/b").unwrap().route.action(), "catchAll");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut registry = RouteRegistry::new();
        registry.add("a", "first").unwrap();
        registry.add("a", "second").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("a").unwrap().route.action(), "first");
    }

    #[test]
    fn test_invalid_pattern_is_not_registered() {
        let mut registry = RouteRegistry::new();
        let err = registry
            .add(&toml::Value::Boolean(true), "broken")
            .unwrap_err();
        assert!(matches!(err, RouterError::InvalidPatternKind { kind: "boolean" }));
        assert!(registry.is_empty());
    }
}
