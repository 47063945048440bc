//! Navigation requests
//!
//! A [`Navigation`] describes one requested transition. It is created by the
//! router (or by a hook asking for a redirect) and threaded through every
//! event the scheduler emits for it.

use crate::params::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Location
// ============================================================================

/// A pathname plus its query parameters
///
/// # Example
///
/// ```
/// use little_navigator::Location;
///
/// let location = Location::parse("/shows?q=batman");
/// assert_eq!(location.pathname, "/shows");
/// assert_eq!(location.query.get("q"), Some(&"batman".to_string()));
/// assert_eq!(location.to_string(), "/shows?q=batman");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path part, always starting with `/`
    pub pathname: String,
    /// Parsed query string
    pub query: QueryParams,
}

impl Location {
    /// Parse a URL of the form `/path?query#hash`
    ///
    /// The hash fragment is dropped and an empty or relative path is anchored
    /// at `/`.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        let pathname = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            pathname,
            query: QueryParams::from_query_string(query),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}?{}", self.pathname, self.query.to_query_string())
        }
    }
}

impl From<&str> for Location {
    fn from(url: &str) -> Self {
        Self::parse(url)
    }
}

impl From<String> for Location {
    fn from(url: String) -> Self {
        Self::parse(&url)
    }
}

// ============================================================================
// NavigationType
// ============================================================================

/// Kind of navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationType {
    /// New history entry
    Push,
    /// Replace the current history entry
    Replace,
    /// History moved on its own (back/forward, external URL change)
    Pop,
    /// Issued by a hook in place of another navigation
    Redirect,
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavigationType::Push => "PUSH",
            NavigationType::Replace => "REPLACE",
            NavigationType::Pop => "POP",
            NavigationType::Redirect => "REDIRECT",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SequenceCounter
// ============================================================================

/// Monotonic source of navigation sequence numbers
///
/// Owned by a [`RouterStore`](crate::RouterStore); clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    next: Arc<AtomicU64>,
}

impl SequenceCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence number
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The number the next call to [`next_value`](Self::next_value) will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// One requested transition
///
/// Everything is immutable except the `cancelled` flag, which clones share.
///
/// # Example
///
/// ```
/// use little_navigator::{Navigation, NavigationType, SequenceCounter};
///
/// let counter = SequenceCounter::new();
/// let navigation = Navigation::new(NavigationType::Push, "/admin", None, &counter);
/// let redirect = navigation.redirect_to("/login");
///
/// assert_eq!(redirect.kind(), NavigationType::Redirect);
/// assert_eq!(redirect.to().pathname, "/login");
/// assert!(redirect.sequence() > navigation.sequence());
/// ```
#[derive(Clone)]
pub struct Navigation {
    kind: NavigationType,
    sequence: u64,
    to: Location,
    from: Option<Location>,
    redirected_from: Option<Box<Navigation>>,
    cancelled: Arc<AtomicBool>,
    counter: SequenceCounter,
}

impl Navigation {
    /// Create a navigation, taking its sequence number from `counter`
    pub fn new(
        kind: NavigationType,
        to: impl Into<Location>,
        from: Option<Location>,
        counter: &SequenceCounter,
    ) -> Self {
        Self {
            kind,
            sequence: counter.next_value(),
            to: to.into(),
            from,
            redirected_from: None,
            cancelled: Arc::new(AtomicBool::new(false)),
            counter: counter.clone(),
        }
    }

    /// Kind of navigation
    pub fn kind(&self) -> NavigationType {
        self.kind
    }

    /// Sequence number, unique per store
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Target location
    pub fn to(&self) -> &Location {
        &self.to
    }

    /// Location the navigation starts from, if any
    pub fn from(&self) -> Option<&Location> {
        self.from.as_ref()
    }

    /// Set the origin once the navigation is about to run
    pub(crate) fn set_from(&mut self, from: Option<Location>) {
        self.from = from;
    }

    /// The navigation this one redirected, if it is a redirect
    pub fn redirected_from(&self) -> Option<&Navigation> {
        self.redirected_from.as_deref()
    }

    /// Number of redirects that led to this navigation
    pub fn redirect_depth(&self) -> usize {
        std::iter::successors(self.redirected_from(), |nav| nav.redirected_from()).count()
    }

    /// Kind of the navigation at the start of the redirect chain
    pub fn origin_kind(&self) -> NavigationType {
        std::iter::successors(Some(self), |nav| nav.redirected_from())
            .last()
            .map_or(self.kind, |origin| origin.kind)
    }

    /// Build a redirect navigation to `path`
    ///
    /// The redirect starts from the same location as this navigation and
    /// gets a fresh sequence number from the same counter. Hooks hand it back
    /// as [`Outcome::Redirect`](crate::Outcome::Redirect).
    pub fn redirect_to(&self, path: impl Into<Location>) -> Navigation {
        Navigation {
            kind: NavigationType::Redirect,
            sequence: self.counter.next_value(),
            to: path.into(),
            from: self.from.clone(),
            redirected_from: Some(Box::new(self.clone())),
            cancelled: Arc::new(AtomicBool::new(false)),
            counter: self.counter.clone(),
        }
    }

    /// Mark this navigation as cancelled
    ///
    /// Work already in flight is not interrupted; the scheduler discards its
    /// result at the next checkpoint.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the navigation was cancelled or superseded
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl PartialEq for Navigation {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence && Arc::ptr_eq(&self.counter.next, &other.counter.next)
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("kind", &self.kind)
            .field("sequence", &self.sequence)
            .field("to", &self.to)
            .field("from", &self.from)
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}
