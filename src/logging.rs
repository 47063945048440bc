//! Logging abstraction layer
//!
//! The scheduler and router log through these macros so the backend can be
//! picked at compile time. Every record is emitted under the
//! `little_navigator` target, which makes it easy to filter navigation noise
//! (`RUST_LOG=little_navigator=debug`).
//!
//! # Features
//!
//! - `log` (default) - Uses the standard `log` crate
//! - `tracing` - Uses the `tracing` crate for structured logging
//!
//! Choose one feature at compile time. They are mutually exclusive.
//!
//! # Usage
//!
//! ```ignore
//! use little_navigator::{debug_log, trace_log};
//!
//! trace_log!("Matching {}", pathname);
//! debug_log!("[nav #{}] committed {}", sequence, location);
//! ```

/// Log target shared by all navigator records.
pub const LOG_TARGET: &str = "little_navigator";

/// Trace-level logging
///
/// Hook outcomes and matcher decisions.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "little_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Debug-level logging
///
/// One record per scheduler transition.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "little_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Info-level logging
///
/// Router lifecycle (start, stop) and commits.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(target: "little_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Warn-level logging
///
/// Navigations that end in an error.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(target: "little_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Error-level logging
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(target: "little_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::error!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}
