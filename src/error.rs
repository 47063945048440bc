//! Error handling for the navigator
//!
//! Two families of errors exist:
//!
//! - [`ConfigError`] - a route configuration could not be built. Messages
//!   name the offending field in backticks (`path`, `willActivate`, ...).
//! - [`NavigatorError`] - a navigation failed, or the router refused a
//!   request. Navigation failures travel inside `NAVIGATION_ERROR` events,
//!   so the type is `Clone`.
//!
//! [`NavigationOutcome`] is what a caller awaiting a navigation gets back.

use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while validating a route configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field is absent
    #[error("route config is missing `{field}`")]
    MissingField { field: &'static str },

    /// A field holds a value of the wrong type
    #[error("route config field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// A hook, loader or data producer reference is not registered
    #[error("route config field `{field}` references unknown {kind} '{name}'")]
    UnknownReference {
        field: &'static str,
        kind: &'static str,
        name: String,
    },

    /// The path pattern is malformed
    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Router configuration is out of range
    #[error("invalid router config: {message}")]
    Router { message: String },
}

// ============================================================================
// Navigation Errors
// ============================================================================

/// Errors that can end a navigation or reject a navigation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// No route matches the pathname, even after loading dynamic children
    #[error("no route matches '{pathname}'")]
    NoMatch { pathname: String },

    /// A guard or lifecycle hook rejected the navigation with a reason
    #[error("{hook} rejected navigation to '{path}': {reason}")]
    GuardRejected {
        hook: String,
        path: String,
        reason: String,
    },

    /// A lazy children loader failed
    #[error("failed to load children of '{path}': {reason}")]
    DynamicLoad { path: String, reason: String },

    /// A data resolver failed
    #[error("failed to resolve data for '{path}': {reason}")]
    Resolve { path: String, reason: String },

    /// Redirects kept chaining past the allowed depth
    #[error("too many redirects while navigating to '{pathname}' (depth {depth})")]
    RedirectLimit { pathname: String, depth: usize },

    /// The navigation queue is full
    #[error("navigation queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// The router was stopped, or its worker went away
    #[error("router is stopped")]
    Stopped,

    /// `start` was called twice
    #[error("router is already started")]
    AlreadyStarted,

    /// `start` was called outside a Tokio runtime
    #[error("router must be started inside a Tokio runtime")]
    NoRuntime,

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl NavigatorError {
    /// Check if this is a not-found error
    pub fn is_no_match(&self) -> bool {
        matches!(self, NavigatorError::NoMatch { .. })
    }
}

// ============================================================================
// Navigation Outcome
// ============================================================================

/// How a single navigation settled
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// The navigation (or the redirect chain it started) was committed
    Activated { location: String },
    /// A guard returned `false`, or the navigation was cancelled
    Cancelled,
    /// The navigation ended with an error
    Failed(NavigatorError),
}

impl NavigationOutcome {
    /// Check if the navigation was committed
    pub fn is_activated(&self) -> bool {
        matches!(self, NavigationOutcome::Activated { .. })
    }

    /// Check if the navigation was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NavigationOutcome::Cancelled)
    }

    /// Check if the navigation failed
    pub fn is_failed(&self) -> bool {
        matches!(self, NavigationOutcome::Failed(_))
    }

    /// Committed location, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Activated { location } => Some(location),
            _ => None,
        }
    }

    /// Failure, if any
    pub fn error(&self) -> Option<&NavigatorError> {
        match self {
            NavigationOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
