//! Route and dispatch value types.

use regex::Regex;
use serde::Serialize;

/// One registration: a compiled matcher and the action it dispatches to.
#[derive(Debug, Clone)]
pub struct Route {
    matcher: Regex,
    action: String,
}

impl Route {
    pub fn new(matcher: Regex, action: impl Into<String>) -> Self {
        Self {
            matcher,
            action: action.into(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// Match the token, returning positional captures on success.
    ///
    /// Groups that did not participate in the match yield empty strings.
    pub fn captures(&self, token: &str) -> Option<Vec<String>> {
        let caps = self.matcher.captures(token)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }
}

/// A successful lookup: the winning route and its captured arguments.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub route: &'a Route,
    pub args: Vec<String>,
}

/// Passed to every action invocation. Built fresh per dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// The raw token, e.g. `pages/5/`.
    pub token: String,
    /// Display form with the fragment marker, e.g. `#pages/5/`.
    pub url: String,
    /// Action being invoked for this dispatch.
    pub action: String,
}

impl RouteInfo {
    pub fn new(token: impl Into<String>, action: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            url: format!("#{}", token),
            token,
            action: action.into(),
        }
    }
}
