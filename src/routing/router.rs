//! The hash router.
//!
//! # Responsibilities
//! - Own the route registry, the action table and the injected history provider
//! - Start once: wait for provider readiness, dispatch the current token
//! - Dispatch every subsequent change, in order, to completion
//! - Forward programmatic navigation to the provider
//!
//! # Design Decisions
//! - The handler target is borrowed per dispatch, never owned
//! - Dispatch only happens after the provider signalled readiness
//! - `navigate` goes through the provider's change path, not a direct dispatch

use crate::config::RouteConfig;
use crate::history::HistoryProvider;
use crate::observability::metrics;
use crate::routing::dispatcher::{ActionTable, HandlerError, NOT_FOUND_ACTION};
use crate::routing::error::RouterError;
use crate::routing::matcher::IntoPattern;
use crate::routing::registry::RouteRegistry;
use crate::routing::route::{Resolved, RouteInfo};

/// Routes location tokens from a history provider `P` to actions on a handler `S`.
#[derive(Debug)]
pub struct Router<S, P> {
    registry: RouteRegistry,
    actions: ActionTable<S>,
    history: P,
    started: bool,
    ready: bool,
}

impl<S, P: HistoryProvider> Router<S, P> {
    pub fn new(history: P) -> Self {
        Self {
            registry: RouteRegistry::new(),
            actions: ActionTable::new(),
            history,
            started: false,
            ready: false,
        }
    }

    /// Register a route. Allowed before and after `start`.
    pub fn add<T: IntoPattern>(
        &mut self,
        pattern: T,
        action: impl Into<String>,
    ) -> Result<(), RouterError> {
        self.registry.add(pattern, action)
    }

    /// Register every route of a loaded route table, in order.
    pub fn add_routes<'a>(
        &mut self,
        routes: impl IntoIterator<Item = &'a RouteConfig>,
    ) -> Result<(), RouterError> {
        for route in routes {
            self.registry.add(&route.pattern, route.action.as_str())?;
        }
        Ok(())
    }

    /// Bind a closure to an action name.
    pub fn on<F>(&mut self, action: impl Into<String>, f: F)
    where
        F: FnMut(&mut S, &RouteInfo, &[String]) -> Result<(), HandlerError> + 'static,
    {
        self.actions.on(action, f);
    }

    /// Bind the `routeNotFound` action.
    pub fn on_not_found<F>(&mut self, f: F)
    where
        F: FnMut(&mut S, &RouteInfo) -> Result<(), HandlerError> + 'static,
    {
        self.actions.on_not_found(f);
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    pub fn history(&self) -> &P {
        &self.history
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Look up the route a token would dispatch to, without dispatching.
    pub fn resolve(&self, token: &str) -> Option<Resolved<'_>> {
        self.registry.resolve(token)
    }

    /// Initialize the history provider and dispatch the current token.
    ///
    /// May only be called once per router.
    pub async fn start(&mut self, target: &mut S) -> Result<(), RouterError> {
        if self.started {
            return Err(RouterError::AlreadyStarted);
        }
        self.started = true;
        tracing::info!(routes = self.registry.len(), "Starting router");
        if !self.actions.contains(NOT_FOUND_ACTION) {
            tracing::warn!("No `{}` action bound; unmatched tokens will fail", NOT_FOUND_ACTION);
        }

        let token = self.history.init().await?.unwrap_or_default();
        self.ready = true;
        tracing::info!(token = %token, "History ready");

        self.trigger(target, &token)
    }

    /// Dispatch change events until the provider closes.
    pub async fn run(&mut self, target: &mut S) -> Result<(), RouterError> {
        if !self.ready {
            return Err(RouterError::NotStarted);
        }
        while let Some(token) = self.history.next_change().await {
            self.trigger(target, &token)?;
        }
        tracing::info!("History closed");
        Ok(())
    }

    /// Dispatch a single change notification delivered by the host.
    pub fn handle_change(&mut self, target: &mut S, token: Option<&str>) -> Result<(), RouterError> {
        if !self.ready {
            return Err(RouterError::NotStarted);
        }
        self.trigger(target, token.unwrap_or_default())
    }

    /// Ask the provider to move to `token`.
    ///
    /// The resulting dispatch happens when the provider delivers the change.
    pub fn navigate(&mut self, token: &str) -> Result<(), RouterError> {
        tracing::debug!(token = %token, "Navigate");
        metrics::record_navigation();
        self.history.add(token)?;
        Ok(())
    }

    fn trigger(&mut self, target: &mut S, token: &str) -> Result<(), RouterError> {
        match self.registry.resolve(token) {
            Some(Resolved { route, args }) => {
                let info = RouteInfo::new(token, route.action());
                tracing::debug!(token = %token, action = %info.action, args = ?args, "Dispatching");
                metrics::record_dispatch(&info.action);
                self.actions.dispatch(target, &info, &args)
            }
            None => {
                let info = RouteInfo::new(token, NOT_FOUND_ACTION);
                tracing::info!(token = %token, "No route matched");
                metrics::record_not_found();
                self.actions.dispatch(target, &info, &[])
            }
        }
    }
}
