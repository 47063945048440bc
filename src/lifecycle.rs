//! Route lifecycle hooks
//!
//! Every hook slot of a route (`canActivate`, `canDeactivate`, `willActivate`,
//! `willDeactivate`) holds an optional [`BoxedHook`]. Hooks receive the
//! activated route they run for and the navigation being processed, and
//! answer with an [`Outcome`]. Redirects are ordinary outcome values, never
//! errors.
//!
//! Lazy children loaders and data resolvers live here too, since they are
//! the other async callbacks the scheduler awaits.

use crate::activated::ActivatedRoute;
use crate::navigation::Navigation;
use crate::route::RouteConfig;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Result of a lifecycle hook
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Continue with navigation
    Proceed,

    /// Stop the navigation quietly (a guard returned `false`)
    Block,

    /// Fail the navigation with a reason
    Reject { reason: String },

    /// Abandon this navigation and start the given one instead
    Redirect(Navigation),
}

impl Outcome {
    /// Create a reject result
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
        }
    }

    /// Check if the outcome lets the navigation continue
    pub fn allows_continue(&self) -> bool {
        matches!(self, Outcome::Proceed)
    }

    /// Check if the outcome is a redirect
    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect(_))
    }

    /// Redirect target, if this is a redirect
    pub fn redirect_target(&self) -> Option<&Navigation> {
        match self {
            Outcome::Redirect(navigation) => Some(navigation),
            _ => None,
        }
    }
}

impl From<bool> for Outcome {
    fn from(allowed: bool) -> Self {
        if allowed {
            Outcome::Proceed
        } else {
            Outcome::Block
        }
    }
}

impl From<Navigation> for Outcome {
    fn from(navigation: Navigation) -> Self {
        Outcome::Redirect(navigation)
    }
}

/// Hook slot names, as spelled in route configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    CanActivate,
    CanDeactivate,
    WillActivate,
    WillDeactivate,
}

impl HookKind {
    /// Every slot, in configuration order
    pub const ALL: [HookKind; 4] = [
        HookKind::CanActivate,
        HookKind::CanDeactivate,
        HookKind::WillActivate,
        HookKind::WillDeactivate,
    ];

    /// Field name in route configuration
    pub fn field(self) -> &'static str {
        match self {
            HookKind::CanActivate => "canActivate",
            HookKind::CanDeactivate => "canDeactivate",
            HookKind::WillActivate => "willActivate",
            HookKind::WillDeactivate => "willDeactivate",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Future returned by boxed hooks
pub type HookFuture = Pin<Box<dyn Future<Output = Outcome> + Send>>;

/// A lifecycle hook
///
/// # Example
///
/// ```no_run
/// use little_navigator::{ActivatedRoute, HookFuture, Navigation, Outcome, RouteHook};
///
/// struct ConfirmLeave {
///     dirty: bool,
/// }
///
/// impl RouteHook for ConfirmLeave {
///     type Future = HookFuture;
///
///     fn run(&self, _route: &ActivatedRoute, _navigation: &Navigation) -> Self::Future {
///         let outcome = Outcome::from(!self.dirty);
///         Box::pin(async move { outcome })
///     }
///
///     fn name(&self) -> &str {
///         "ConfirmLeave"
///     }
/// }
/// ```
pub trait RouteHook: Send + Sync + 'static {
    /// The future returned by `run`
    type Future: Future<Output = Outcome> + Send + 'static;

    /// Run the hook for `route` during `navigation`
    ///
    /// The future must own what it needs; `route` and `navigation` are only
    /// borrowed for the call.
    fn run(&self, route: &ActivatedRoute, navigation: &Navigation) -> Self::Future;

    /// Hook name, for logs
    fn name(&self) -> &str {
        "RouteHook"
    }
}

/// Type-erased hook stored in a route slot
pub type BoxedHook = Arc<dyn RouteHook<Future = HookFuture>>;

/// Create a hook from a closure returning a future
///
/// ```no_run
/// use little_navigator::{hook_fn, Outcome};
///
/// let guard = hook_fn(|route, navigation| {
///     let outcome = if route.params().contains("id") {
///         Outcome::Proceed
///     } else {
///         Outcome::Redirect(navigation.redirect_to("/login"))
///     };
///     async move { outcome }
/// });
/// ```
pub fn hook_fn<F, Fut>(f: F) -> FnHook<F>
where
    F: Fn(&ActivatedRoute, &Navigation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    FnHook { f }
}

/// Hook created from a closure
pub struct FnHook<F> {
    f: F,
}

impl<F, Fut> RouteHook for FnHook<F>
where
    F: Fn(&ActivatedRoute, &Navigation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    type Future = HookFuture;

    fn run(&self, route: &ActivatedRoute, navigation: &Navigation) -> Self::Future {
        Box::pin((self.f)(route, navigation))
    }
}

/// `willActivate` synthesized for routes declaring `redirectTo`
pub struct RedirectHook {
    to: String,
}

impl RedirectHook {
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }

    /// Redirect target path
    pub fn target(&self) -> &str {
        &self.to
    }
}

impl RouteHook for RedirectHook {
    type Future = HookFuture;

    fn run(&self, _route: &ActivatedRoute, navigation: &Navigation) -> Self::Future {
        let redirect = navigation.redirect_to(self.to.as_str());
        Box::pin(async move { Outcome::Redirect(redirect) })
    }

    fn name(&self) -> &str {
        "redirectTo"
    }
}

// ============================================================================
// Loaders and resolvers
// ============================================================================

/// Future returned by a children loader
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<Vec<RouteConfig>, String>> + Send>>;

/// Zero-argument producer of a route's children
pub type ChildrenLoader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Wrap a closure as a [`ChildrenLoader`]
pub fn loader_fn<F, Fut>(f: F) -> ChildrenLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<RouteConfig>, String>> + Send + 'static,
{
    Arc::new(move || -> LoadFuture { Box::pin(f()) })
}

/// Future returned by a data resolver
///
/// `Ok(Some(value))` replaces the route's data, `Ok(None)` keeps it.
pub type ResolveFuture = Pin<Box<dyn Future<Output = Result<Option<Value>, String>> + Send>>;

/// Async preparation run in the resolve phase (`willResolve`)
pub type Resolver = Arc<dyn Fn(&ActivatedRoute, &Navigation) -> ResolveFuture + Send + Sync>;

/// Wrap a closure as a [`Resolver`]
pub fn resolver_fn<F, Fut>(f: F) -> Resolver
where
    F: Fn(&ActivatedRoute, &Navigation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<Value>, String>> + Send + 'static,
{
    Arc::new(move |route: &ActivatedRoute, navigation: &Navigation| -> ResolveFuture {
        Box::pin(f(route, navigation))
    })
}
