//! Router metrics.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatches by action
//! - `router_not_found_total` (counter): tokens matching no route
//! - `router_navigations_total` (counter): programmatic navigation requests
//! - `router_routes_registered` (gauge): routes in the registry

use ::metrics::{counter, describe_counter, describe_gauge, gauge};

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!("router_dispatch_total", "Dispatches by action");
    describe_counter!("router_not_found_total", "Tokens that matched no route");
    describe_counter!("router_navigations_total", "Programmatic navigation requests");
    describe_gauge!("router_routes_registered", "Routes in the registry");
}

pub fn record_dispatch(action: &str) {
    counter!("router_dispatch_total", "action" => action.to_string()).increment(1);
}

pub fn record_not_found() {
    counter!("router_not_found_total").increment(1);
}

pub fn record_navigation() {
    counter!("router_navigations_total").increment(1);
}

pub fn record_routes_registered(count: usize) {
    gauge!("router_routes_registered").set(count as f64);
}
