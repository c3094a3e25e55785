//! Action table and dispatch.
//!
//! # Responsibilities
//! - Map action names to closures over the handler target
//! - Invoke the closure for a dispatch with `RouteInfo` and captured args
//! - Surface unknown action names as `MissingHandlerMethod`
//!
//! # Design Decisions
//! - The target is borrowed per call; the table never owns it
//! - Lookup happens at dispatch time, so actions can be (re)registered late
//! - Closure errors are returned as-is, never swallowed

use std::collections::HashMap;
use std::fmt;

use crate::routing::error::RouterError;
use crate::routing::route::RouteInfo;

/// Action invoked when no route matches the token.
pub const NOT_FOUND_ACTION: &str = "routeNotFound";

/// Error type returned by action closures.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

type Action<S> = Box<dyn FnMut(&mut S, &RouteInfo, &[String]) -> Result<(), HandlerError>>;

/// Named actions over a handler target of type `S`.
pub struct ActionTable<S> {
    actions: HashMap<String, Action<S>>,
}

impl<S> Default for ActionTable<S> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<S> fmt::Debug for ActionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.actions.keys().collect();
        names.sort();
        f.debug_struct("ActionTable").field("actions", &names).finish()
    }
}

impl<S> ActionTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action`, replacing any closure previously bound to the name.
    pub fn on<F>(&mut self, action: impl Into<String>, f: F)
    where
        F: FnMut(&mut S, &RouteInfo, &[String]) -> Result<(), HandlerError> + 'static,
    {
        self.actions.insert(action.into(), Box::new(f));
    }

    /// Register the `routeNotFound` action.
    pub fn on_not_found<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut S, &RouteInfo) -> Result<(), HandlerError> + 'static,
    {
        self.on(NOT_FOUND_ACTION, move |target, info, _| f(target, info));
    }

    pub fn contains(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    /// Invoke the action named by `info.action` on `target`.
    pub fn dispatch(
        &mut self,
        target: &mut S,
        info: &RouteInfo,
        args: &[String],
    ) -> Result<(), RouterError> {
        let action = self
            .actions
            .get_mut(info.action.as_str())
            .ok_or_else(|| RouterError::MissingHandlerMethod(info.action.clone()))?;

        action(target, info, args).map_err(|source| RouterError::Handler {
            action: info.action.clone(),
            source,
        })
    }
}
