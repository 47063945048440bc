//! Route definition and configuration
//!
//! A [`RouteConfig`] is the static description of one route: its path
//! pattern, its children (declared up front or loaded on demand), its
//! lifecycle hooks and its data. Configs are plain values; the runtime tree
//! is built from them by [`RouteNode`](crate::RouteNode).

use crate::context::RouteContext;
use crate::error::ConfigError;
use crate::lifecycle::{
    loader_fn, resolver_fn, BoxedHook, ChildrenLoader, HookFuture, HookKind, Resolver, RouteHook,
};
use crate::navigation::Navigation;
use crate::ActivatedRoute;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

// ============================================================================
// Route Validation
// ============================================================================

/// Validate a route path pattern
///
/// # Validation Rules
///
/// - Path can be empty (for index and layout routes)
/// - No consecutive slashes ('//')
/// - Parameter names must be non-empty, alphanumeric or `_`
/// - No duplicate parameter names within one pattern
pub fn validate_route_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.contains("//") {
        return Err(invalid("route path cannot contain consecutive slashes".into()));
    }

    let mut param_names = std::collections::HashSet::new();
    for segment in path.split('/') {
        if let Some(param) = segment.strip_prefix(':') {
            if param.is_empty() {
                return Err(invalid("route parameter name cannot be empty".into()));
            }

            if !param.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(invalid(format!(
                    "route parameter '{}' must contain only alphanumeric characters and underscores",
                    param
                )));
            }

            if !param_names.insert(param) {
                return Err(invalid(format!("duplicate route parameter '{}'", param)));
            }
        }
    }

    Ok(())
}

// ============================================================================
// Supporting types
// ============================================================================

/// How much of the remaining pathname a pattern has to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The pattern may match a prefix; children match the rest
    #[default]
    Partial,
    /// The pattern must consume the whole remainder
    Full,
}

/// Producer of route data from the route's context
pub type DataFn = Arc<dyn Fn(&RouteContext) -> Value + Send + Sync>;

/// Route data: a value, or a function of the route context
#[derive(Clone)]
pub enum RouteData {
    Static(Value),
    Derived(DataFn),
}

impl RouteData {
    /// Produce the data for a route with the given context
    pub fn produce(&self, context: &RouteContext) -> Value {
        match self {
            RouteData::Static(value) => value.clone(),
            RouteData::Derived(f) => f(context),
        }
    }
}

impl fmt::Debug for RouteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteData::Static(value) => f.debug_tuple("Static").field(value).finish(),
            RouteData::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Children of a route
#[derive(Clone, Default)]
pub enum RouteChildren {
    /// Leaf route
    #[default]
    None,
    /// Children declared up front, in match order
    Static(Vec<RouteConfig>),
    /// Children produced on first match, then cached
    Lazy(ChildrenLoader),
}

impl fmt::Debug for RouteChildren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteChildren::None => f.write_str("None"),
            RouteChildren::Static(children) => f.debug_tuple("Static").field(children).finish(),
            RouteChildren::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

// ============================================================================
// RouteConfig
// ============================================================================

/// Route configuration
///
/// # Example
///
/// ```
/// use little_navigator::{hook_fn, MatchMode, Outcome, RouteConfig};
///
/// let routes = vec![
///     RouteConfig::new("").match_mode(MatchMode::Full),
///     RouteConfig::new("redirect").redirect_to("/shows"),
///     RouteConfig::new("shows")
///         .child(RouteConfig::new(":id").outlet("modal").animate(true)),
///     RouteConfig::new("admin").can_activate(hook_fn(|route, navigation| {
///         let signed_in = route.context().get_as::<bool>("signedIn").unwrap_or(false);
///         let outcome = if signed_in {
///             Outcome::Proceed
///         } else {
///             Outcome::Redirect(navigation.redirect_to("/login"))
///         };
///         async move { outcome }
///     })),
/// ];
/// assert_eq!(routes[2].path, "shows");
/// ```
#[derive(Clone)]
pub struct RouteConfig {
    /// Path pattern, e.g. `"users/:id"` or `"a/b/c"`
    pub path: String,
    /// Prefix or full matching
    pub match_mode: MatchMode,
    /// Static or lazily loaded children
    pub children: RouteChildren,
    /// Guard run before entering the route
    pub can_activate: Option<BoxedHook>,
    /// Guard run before leaving the route
    pub can_deactivate: Option<BoxedHook>,
    /// Hook run just before the route is committed
    pub will_activate: Option<BoxedHook>,
    /// Hook run just before the route is left
    pub will_deactivate: Option<BoxedHook>,
    /// Route data
    pub data: Option<RouteData>,
    /// Async preparation run in the resolve phase
    pub will_resolve: Option<Resolver>,
    /// Redirect target; overrides `will_activate`
    pub redirect_to: Option<String>,
    /// Named rendering slot
    pub outlet: Option<String>,
    /// Presentation hint: animate enter/exit
    pub animate: bool,
    /// Context merged over the parent's for this subtree
    pub context: RouteContext,
    /// Route metadata
    pub meta: HashMap<String, String>,
}

impl RouteConfig {
    /// Create a route config with path validation
    ///
    /// # Panics
    ///
    /// Panics if the path is invalid. Use `try_new` for non-panicking validation.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if let Err(e) = validate_route_path(&path) {
            panic!("{}", e);
        }
        Self::unchecked(path)
    }

    /// Create a route config, returning the validation error instead of panicking
    pub fn try_new(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        validate_route_path(&path)?;
        Ok(Self::unchecked(path))
    }

    fn unchecked(path: String) -> Self {
        Self {
            path,
            match_mode: MatchMode::Partial,
            children: RouteChildren::None,
            can_activate: None,
            can_deactivate: None,
            will_activate: None,
            will_deactivate: None,
            data: None,
            will_resolve: None,
            redirect_to: None,
            outlet: None,
            animate: false,
            context: RouteContext::new(),
            meta: HashMap::new(),
        }
    }

    /// Path pattern
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Set the match mode
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set static children, replacing any loader
    pub fn children(mut self, children: Vec<RouteConfig>) -> Self {
        self.children = RouteChildren::Static(children);
        self
    }

    /// Append a static child
    pub fn child(mut self, child: RouteConfig) -> Self {
        match &mut self.children {
            RouteChildren::Static(children) => children.push(child),
            _ => self.children = RouteChildren::Static(vec![child]),
        }
        self
    }

    /// Load children on first match, replacing any static children
    ///
    /// ```no_run
    /// use little_navigator::RouteConfig;
    ///
    /// RouteConfig::new("shows").load_children(|| async {
    ///     Ok(vec![RouteConfig::new(":id")])
    /// });
    /// ```
    pub fn load_children<F, Fut>(mut self, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<RouteConfig>, String>> + Send + 'static,
    {
        self.children = RouteChildren::Lazy(loader_fn(loader));
        self
    }

    /// Use an existing loader for the children
    pub fn children_loader(mut self, loader: ChildrenLoader) -> Self {
        self.children = RouteChildren::Lazy(loader);
        self
    }

    /// Set the `canActivate` guard
    pub fn can_activate<H>(self, hook: H) -> Self
    where
        H: RouteHook<Future = HookFuture>,
    {
        self.hook(HookKind::CanActivate, Arc::new(hook))
    }

    /// Set the `canDeactivate` guard
    pub fn can_deactivate<H>(self, hook: H) -> Self
    where
        H: RouteHook<Future = HookFuture>,
    {
        self.hook(HookKind::CanDeactivate, Arc::new(hook))
    }

    /// Set the `willActivate` hook
    pub fn will_activate<H>(self, hook: H) -> Self
    where
        H: RouteHook<Future = HookFuture>,
    {
        self.hook(HookKind::WillActivate, Arc::new(hook))
    }

    /// Set the `willDeactivate` hook
    pub fn will_deactivate<H>(self, hook: H) -> Self
    where
        H: RouteHook<Future = HookFuture>,
    {
        self.hook(HookKind::WillDeactivate, Arc::new(hook))
    }

    /// Fill a hook slot with an already boxed hook
    pub fn hook(mut self, kind: HookKind, hook: BoxedHook) -> Self {
        *self.hook_slot(kind) = Some(hook);
        self
    }

    /// Hook in the given slot
    pub fn hook_for(&self, kind: HookKind) -> Option<&BoxedHook> {
        match kind {
            HookKind::CanActivate => self.can_activate.as_ref(),
            HookKind::CanDeactivate => self.can_deactivate.as_ref(),
            HookKind::WillActivate => self.will_activate.as_ref(),
            HookKind::WillDeactivate => self.will_deactivate.as_ref(),
        }
    }

    fn hook_slot(&mut self, kind: HookKind) -> &mut Option<BoxedHook> {
        match kind {
            HookKind::CanActivate => &mut self.can_activate,
            HookKind::CanDeactivate => &mut self.can_deactivate,
            HookKind::WillActivate => &mut self.will_activate,
            HookKind::WillDeactivate => &mut self.will_deactivate,
        }
    }

    /// Set static data
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(RouteData::Static(data.into()));
        self
    }

    /// Derive data from the route context
    pub fn get_data<F>(mut self, producer: F) -> Self
    where
        F: Fn(&RouteContext) -> Value + Send + Sync + 'static,
    {
        self.data = Some(RouteData::Derived(Arc::new(producer)));
        self
    }

    /// Set the resolve-phase preparation
    pub fn will_resolve<F, Fut>(mut self, resolver: F) -> Self
    where
        F: Fn(&ActivatedRoute, &Navigation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<Value>, String>> + Send + 'static,
    {
        self.will_resolve = Some(resolver_fn(resolver));
        self
    }

    /// Redirect to `path` whenever this route is entered
    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    /// Render into the named outlet
    pub fn outlet(mut self, name: impl Into<String>) -> Self {
        self.outlet = Some(name.into());
        self
    }

    /// Ask the presentation layer to animate this route
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Contribute a context value to this subtree
    pub fn context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Replace this route's own context contribution
    pub fn with_context(mut self, context: RouteContext) -> Self {
        self.context = context;
        self
    }

    /// Add metadata
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Check if children are loaded on demand
    pub fn is_lazy(&self) -> bool {
        matches!(self.children, RouteChildren::Lazy(_))
    }
}

impl fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: Vec<&str> = HookKind::ALL
            .iter()
            .filter(|kind| self.hook_for(**kind).is_some())
            .map(|kind| kind.field())
            .collect();

        f.debug_struct("RouteConfig")
            .field("path", &self.path)
            .field("match_mode", &self.match_mode)
            .field("children", &self.children)
            .field("hooks", &hooks)
            .field("data", &self.data)
            .field("redirect_to", &self.redirect_to)
            .field("outlet", &self.outlet)
            .field("animate", &self.animate)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
