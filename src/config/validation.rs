//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route pattern compiles
//! - Reject empty and reserved action names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{IntoPattern, NOT_FOUND_ACTION};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("route {index}: action must not be empty")]
    EmptyAction { index: usize },

    #[error("route {index}: action `routeNotFound` is reserved for unmatched tokens")]
    ReservedAction { index: usize },

    #[error("route {index}: {reason}")]
    InvalidPattern { index: usize, reason: String },

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,
}

/// Check a loaded configuration, collecting every problem.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.action.trim().is_empty() {
            errors.push(ValidationError::EmptyAction { index });
        } else if route.action == NOT_FOUND_ACTION {
            errors.push(ValidationError::ReservedAction { index });
        }

        if let Err(e) = (&route.pattern).into_matcher() {
            errors.push(ValidationError::InvalidPattern {
                index,
                reason: e.to_string(),
            });
        }
    }

    if config.observability.log_level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
