//! Route matching
//!
//! Patterns are split into literal and `:param` segments. A pattern is
//! matched against the front of the remaining pathname; what it leaves over
//! is handed to the children, tried in declared order. The first child that
//! matches wins and there is no backtracking across siblings.
//!
//! Matching stops early at a node whose lazy children have not been loaded
//! yet and reports a [`PartialMatch`]; the scheduler loads the children and
//! matches again from the root.

use crate::activated::ActivatedRoute;
use crate::navigation::Location;
use crate::params::{decode_uri_component, RouteParams};
use crate::route::MatchMode;
use crate::tree::RouteNode;
use std::sync::Arc;

// ============================================================================
// Patterns
// ============================================================================

/// A parsed route path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
    mode: MatchMode,
}

/// A single segment in a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match exactly
    Static(String),
    /// Named parameter capturing one non-empty segment
    Param { name: String },
}

impl Segment {
    /// Parse a segment from string
    ///
    /// - `"users"` -> `Static("users")`
    /// - `":id"` -> `Param { name: "id" }`
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix(':') {
            Some(name) => Segment::Param {
                name: name.to_string(),
            },
            None => Segment::Static(s.to_string()),
        }
    }
}

/// Result of matching one pattern against the front of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Number of path segments consumed
    pub consumed: usize,
    /// Bound parameters, percent-decoded
    pub params: RouteParams,
}

impl RoutePattern {
    /// Create a pattern from a path string
    ///
    /// Empty segments are ignored, so `"/a/b"`, `"a/b"` and `"a/b/"` are the
    /// same pattern, and `""` consumes nothing.
    pub fn from_path(path: &str, mode: MatchMode) -> Self {
        let segments = split_path(path).map(Segment::parse).collect();
        Self { segments, mode }
    }

    /// Pattern segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match mode
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Check if the pattern consumes no segments (index and layout routes)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Match the pattern against the front of `path`
    ///
    /// In [`MatchMode::Full`] the pattern has to consume all of `path`.
    pub fn match_prefix(&self, path: &[&str]) -> Option<PatternMatch> {
        if path.len() < self.segments.len() {
            return None;
        }
        if self.mode == MatchMode::Full && path.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                Segment::Param { name } => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode_uri_component(actual));
                }
            }
        }

        Some(PatternMatch {
            consumed: self.segments.len(),
            params,
        })
    }

    /// Match the pattern against a whole path
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let segments: Vec<&str> = split_path(path).collect();
        self.match_prefix(&segments)
            .filter(|m| m.consumed == segments.len())
            .map(|m| m.params)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

// ============================================================================
// Tree matching
// ============================================================================

/// Matched chain that stopped at a node with unloaded children
#[derive(Debug, Clone)]
pub struct PartialMatch {
    /// Routes matched so far, root first, ending with `node`
    pub matched: Vec<ActivatedRoute>,
    /// The node whose children must be loaded
    pub node: Arc<RouteNode>,
    /// Unmatched rest of the pathname, without a leading `/`
    pub remaining: String,
}

/// Result of matching a location against a route tree
#[derive(Debug, Clone)]
pub enum MatchResult {
    /// Every segment consumed; the chain is root first
    Full(Vec<ActivatedRoute>),
    /// Children of some node on the way still have to be loaded
    Partial(PartialMatch),
    /// Nothing matches
    None,
}

impl MatchResult {
    /// Check if this is a full match
    pub fn is_full(&self) -> bool {
        matches!(self, MatchResult::Full(_))
    }

    /// Check if this is a partial match
    pub fn is_partial(&self) -> bool {
        matches!(self, MatchResult::Partial(_))
    }

    /// Check if nothing matched
    pub fn is_none(&self) -> bool {
        matches!(self, MatchResult::None)
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::Full(_) => "full",
            MatchResult::Partial(_) => "partial",
            MatchResult::None => "none",
        }
    }
}

/// Match `location` against the tree under `root`
///
/// The root's own pattern is matched first, then children are descended
/// into until the pathname is consumed. With an empty remainder, a child
/// whose pattern consumes nothing is still entered, so index routes and
/// layout routes are part of the chain.
///
/// # Example
///
/// ```
/// use little_navigator::{match_route, Location, MatchResult, RouteConfig, RouteNode};
///
/// let root = RouteNode::root(
///     RouteConfig::new("").child(RouteConfig::new("users/:id")),
///     Default::default(),
/// );
///
/// match match_route(&root, &Location::parse("/users/7")) {
///     MatchResult::Full(chain) => {
///         assert_eq!(chain.len(), 2);
///         assert_eq!(chain[1].params().get("id"), Some(&"7".to_string()));
///         assert_eq!(chain[1].value(), "/users/7");
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn match_route(root: &Arc<RouteNode>, location: &Location) -> MatchResult {
    let segments: Vec<&str> = split_path(&location.pathname).collect();

    let Some(first) = root.pattern().match_prefix(&segments) else {
        return MatchResult::None;
    };

    let mut chain: Vec<ActivatedRoute> = Vec::new();
    let mut node = Arc::clone(root);
    let mut step = first;
    let mut remaining: &[&str] = &segments;
    let mut parent_url = String::new();

    loop {
        let segment = segment_url(&remaining[..step.consumed]);
        remaining = &remaining[step.consumed..];

        let route = ActivatedRoute::new(
            Arc::clone(&node),
            parent_url.clone(),
            segment.clone(),
            step.params,
            location.query.clone(),
        );
        parent_url.push_str(&segment);
        chain.push(route);

        if node.needs_children() {
            return MatchResult::Partial(PartialMatch {
                matched: chain,
                node,
                remaining: remaining.join("/"),
            });
        }

        let next = node.children().iter().find_map(|child| {
            child
                .pattern()
                .match_prefix(remaining)
                .map(|m| (Arc::clone(child), m))
        });

        match next {
            Some((child, m)) => {
                node = child;
                step = m;
            }
            None if remaining.is_empty() => return MatchResult::Full(chain),
            None => return MatchResult::None,
        }
    }
}

fn segment_url(consumed: &[&str]) -> String {
    if consumed.is_empty() {
        String::new()
    } else {
        format!("/{}", consumed.join("/"))
    }
}
