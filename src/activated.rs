//! Activated routes
//!
//! An [`ActivatedRoute`] is a [`RouteNode`] bound to the part of a pathname
//! it matched during one navigation. Chains of activated routes are what the
//! scheduler runs hooks against and what the store commits.

use crate::context::RouteContext;
use crate::params::{QueryParams, RouteParams};
use crate::route::RouteConfig;
use crate::tree::RouteNode;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A route node instantiated for a concrete match
///
/// # Example
///
/// ```
/// use little_navigator::{ActivatedRoute, QueryParams, RouteConfig, RouteNode, RouteParams};
///
/// let node = RouteNode::root(RouteConfig::new("/a/:a/b/:b"), Default::default());
/// let params = RouteParams::from_iter([("a", "1"), ("b", "2")]);
/// let query = QueryParams::from_query_string("q=hey");
///
/// let route = ActivatedRoute::new(node, "/root", "/a/1/b/2", params, query);
/// assert_eq!(route.value(), "/root/a/1/b/2?q=hey");
/// ```
#[derive(Clone)]
pub struct ActivatedRoute {
    node: Arc<RouteNode>,
    parent_url: String,
    segment: String,
    value: String,
    params: RouteParams,
    query: QueryParams,
    data: Option<Value>,
}

impl ActivatedRoute {
    /// Bind `node` to a matched segment
    ///
    /// Route data starts empty; `data`/`getData` and `willResolve` are
    /// evaluated in the resolve phase, for activating routes only.
    pub fn new(
        node: Arc<RouteNode>,
        parent_url: impl Into<String>,
        segment: impl Into<String>,
        params: RouteParams,
        query: QueryParams,
    ) -> Self {
        let parent_url = parent_url.into();
        let segment = segment.into();

        let mut value = format!("{}{}", parent_url, segment);
        if !query.is_empty() {
            value.push('?');
            value.push_str(&query.to_query_string());
        }

        Self {
            node,
            parent_url,
            segment,
            value,
            params,
            query,
            data: None,
        }
    }

    /// The route node this route was activated from
    pub fn node(&self) -> &Arc<RouteNode> {
        &self.node
    }

    /// Route configuration
    pub fn config(&self) -> &RouteConfig {
        self.node.config()
    }

    /// URL accumulated from the ancestors
    pub fn parent_url(&self) -> &str {
        &self.parent_url
    }

    /// Matched part of the pathname, `""` for routes that consume nothing
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Full URL of this route, query included
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Path parameters bound by this route
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Query parameters of the navigation
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Route data
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Replace the route data
    pub fn set_data(&mut self, data: Value) {
        self.data = Some(data);
    }

    /// Evaluate the node's static data or `getData` producer
    pub(crate) fn produce_data(&mut self) {
        self.data = self
            .node
            .config()
            .data
            .as_ref()
            .map(|data| data.produce(self.node.context()));
    }

    /// Take over the data `other` resolved when it was activated
    pub(crate) fn inherit_data(&mut self, other: &ActivatedRoute) {
        self.data = other.data.clone();
    }

    /// Composed context of the route node
    pub fn context(&self) -> &RouteContext {
        self.node.context()
    }

    /// Outlet the route renders into
    pub fn outlet(&self) -> Option<&str> {
        self.node.config().outlet.as_deref()
    }

    /// Check if both routes come from the same node and matched the same segment
    pub fn same_route(&self, other: &ActivatedRoute) -> bool {
        Arc::ptr_eq(&self.node, &other.node) && self.segment == other.segment
    }
}

impl fmt::Debug for ActivatedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivatedRoute")
            .field("path", &self.node.path())
            .field("value", &self.value)
            .field("params", &self.params)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_and_params() {
        let node = RouteNode::root(RouteConfig::new("/a/:a/b/:b"), RouteContext::new());
        let params: RouteParams = [("a", "1"), ("b", "2")].into_iter().collect();
        let query: QueryParams = [("q", "hey")].into_iter().collect();

        let route = ActivatedRoute::new(node, "/root", "/a/1/b/2", params, query);

        assert_eq!(route.segment(), "/a/1/b/2");
        assert_eq!(route.parent_url(), "/root");
        assert_eq!(route.value(), "/root/a/1/b/2?q=hey");
        assert_eq!(route.params().get("a"), Some(&"1".to_string()));
        assert_eq!(route.params().get("b"), Some(&"2".to_string()));
        assert_eq!(route.query().get("q"), Some(&"hey".to_string()));
    }

    #[test]
    fn test_value_without_query() {
        let node = RouteNode::root(RouteConfig::new("x"), RouteContext::new());
        let route = ActivatedRoute::new(
            node,
            "/root",
            "/x",
            RouteParams::new(),
            QueryParams::new(),
        );
        assert_eq!(route.value(), "/root/x");
    }

    #[test]
    fn test_data_from_context() {
        let node = RouteNode::root(
            RouteConfig::new("")
                .context("user", "ada")
                .get_data(|cx| json!({ "name": cx.get("user") })),
            RouteContext::new(),
        );
        let mut route = ActivatedRoute::new(node, "", "", RouteParams::new(), QueryParams::new());
        assert_eq!(route.data(), None);

        route.produce_data();
        assert_eq!(route.data(), Some(&json!({ "name": "ada" })));
        assert_eq!(route.context().get("user"), Some(&json!("ada")));
    }

    #[test]
    fn test_same_route() {
        let node = RouteNode::root(RouteConfig::new(":id"), RouteContext::new());
        let one = ActivatedRoute::new(
            Arc::clone(&node),
            "",
            "/1",
            RouteParams::new(),
            QueryParams::new(),
        );
        let again = ActivatedRoute::new(
            Arc::clone(&node),
            "",
            "/1",
            RouteParams::new(),
            QueryParams::new(),
        );
        let two = ActivatedRoute::new(node, "", "/2", RouteParams::new(), QueryParams::new());

        assert!(one.same_route(&again));
        assert!(!one.same_route(&two));
    }
}
