//! Shared fixtures for router integration tests.

#![allow(dead_code)]

use hash_router::{HistoryHandle, MemoryHistory, RouteInfo, Router};

/// A dispatch as seen by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub action: String,
    pub url: String,
    pub args: Vec<String>,
}

/// Application handler that records every action invocation.
#[derive(Debug, Default)]
pub struct App {
    pub visits: Vec<Visit>,
}

impl App {
    fn record(&mut self, info: &RouteInfo, args: &[String]) {
        self.visits.push(Visit {
            action: info.action.clone(),
            url: info.url.clone(),
            args: args.to_vec(),
        });
    }

    /// Action names in dispatch order.
    pub fn actions(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.action.as_str()).collect()
    }
}

/// Router with the dashboard / pages routes and their actions bound.
pub fn pages_router(initial: &str) -> (Router<App, MemoryHistory>, HistoryHandle) {
    let (history, handle) = MemoryHistory::new(initial);
    let mut router = Router::new(history);

    router.add("", "dashboard").unwrap();
    router.add("/pages/", "showAllPages").unwrap();
    router.add("/pages/:id/", "showPage").unwrap();

    for action in ["dashboard", "showAllPages", "showPage"] {
        router.on(action, |app: &mut App, info, args| {
            app.record(info, args);
            Ok(())
        });
    }
    router.on_not_found(|app: &mut App, info| {
        app.record(info, &[]);
        Ok(())
    });

    (router, handle)
}
