//! Runtime route tree
//!
//! [`RouteNode`] wraps a [`RouteConfig`] for matching: it holds the parsed
//! path pattern, the context composed from its ancestors, and its children.
//! Static children are built with the node; lazily loaded children are
//! attached once by the scheduler and reused by every later match.

use crate::context::RouteContext;
use crate::lifecycle::{ChildrenLoader, RedirectHook};
use crate::matcher::RoutePattern;
use crate::route::{MatchMode, RouteChildren, RouteConfig};
use crate::trace_log;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A node of the runtime route tree
pub struct RouteNode {
    config: RouteConfig,
    pattern: RoutePattern,
    context: RouteContext,
    loader: Option<ChildrenLoader>,
    children: OnceLock<Vec<Arc<RouteNode>>>,
}

impl RouteNode {
    /// Build a tree rooted at `config`, with `context` as the inherited context
    ///
    /// # Example
    ///
    /// ```
    /// use little_navigator::{RouteConfig, RouteContext, RouteNode};
    ///
    /// let root = RouteNode::root(
    ///     RouteConfig::new("").children(vec![
    ///         RouteConfig::new("a/b/c").child(RouteConfig::new("d")),
    ///         RouteConfig::new("e"),
    ///     ]),
    ///     RouteContext::new(),
    /// );
    ///
    /// let paths: Vec<_> = root.children().iter().map(|n| n.path().to_string()).collect();
    /// assert_eq!(paths, ["a/b/c", "e"]);
    /// ```
    pub fn root(config: RouteConfig, context: RouteContext) -> Arc<RouteNode> {
        Self::build(config, &context)
    }

    fn build(mut config: RouteConfig, parent_context: &RouteContext) -> Arc<RouteNode> {
        if let Some(target) = &config.redirect_to {
            config.will_activate = Some(Arc::new(RedirectHook::new(target.clone())));
        }

        let context = parent_context.merged(&config.context);
        let pattern = RoutePattern::from_path(&config.path, config.match_mode);

        let (loader, children) = match &config.children {
            RouteChildren::None => (None, OnceLock::from(Vec::new())),
            RouteChildren::Static(children) => {
                let built: Vec<_> = children
                    .iter()
                    .map(|child| Self::build(child.clone(), &context))
                    .collect();
                (None, OnceLock::from(built))
            }
            RouteChildren::Lazy(loader) => (Some(Arc::clone(loader)), OnceLock::new()),
        };

        Arc::new(RouteNode {
            config,
            pattern,
            context,
            loader,
            children,
        })
    }

    /// The route configuration, with `redirectTo` already applied
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Path pattern as declared
    pub fn path(&self) -> &str {
        &self.config.path
    }

    /// Parsed path pattern
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Match mode of the pattern
    pub fn match_mode(&self) -> MatchMode {
        self.config.match_mode
    }

    /// Parent context merged with this node's contribution
    pub fn context(&self) -> &RouteContext {
        &self.context
    }

    /// Resolved children; empty while lazy children are still unloaded
    pub fn children(&self) -> &[Arc<RouteNode>] {
        self.children.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loader for lazy children, if the route declares one
    pub fn loader(&self) -> Option<&ChildrenLoader> {
        self.loader.as_ref()
    }

    /// Check if children still have to be loaded before matching below this node
    pub fn needs_children(&self) -> bool {
        self.children.get().is_none()
    }

    /// Build and cache children from loaded configs
    ///
    /// The first call wins; later calls keep the cached subtree and drop
    /// `configs`.
    pub fn attach_children(&self, configs: Vec<RouteConfig>) -> &[Arc<RouteNode>] {
        let children = self.children.get_or_init(|| {
            trace_log!(
                "attaching {} loaded children to '{}'",
                configs.len(),
                self.path()
            );
            configs
                .into_iter()
                .map(|child| Self::build(child, &self.context))
                .collect()
        });
        children.as_slice()
    }
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("path", &self.config.path)
            .field("context", &self.context)
            .field("lazy", &self.loader.is_some())
            .field("children", &self.children.get().map(Vec::len))
            .finish_non_exhaustive()
    }
}
