//! Ready-made guards
//!
//! Guards are ordinary [`RouteHook`]s meant for the `canActivate` slot.
//! This module ships the common ones:
//!
//! - [`AuthGuard`] - redirects to a login path unless a check passes
//! - [`Guards`] - runs several guards in order; the first one that does not
//!   proceed decides

use crate::activated::ActivatedRoute;
use crate::lifecycle::{BoxedHook, HookFuture, Outcome, RouteHook};
use crate::navigation::Navigation;
use std::sync::Arc;

/// Authentication check run against the route being entered
pub type AuthCheckFn = Box<dyn Fn(&ActivatedRoute) -> bool + Send + Sync>;

/// Authentication guard
///
/// # Example
///
/// ```
/// use little_navigator::{AuthGuard, RouteConfig};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let signed_in = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&signed_in);
///
/// let admin = RouteConfig::new("admin")
///     .can_activate(AuthGuard::new(move |_| flag.load(Ordering::SeqCst), "/login"));
/// # let _ = admin;
/// ```
pub struct AuthGuard {
    check_fn: AuthCheckFn,
    redirect_path: String,
}

impl AuthGuard {
    /// Create a guard redirecting to `redirect_path` when `check_fn` fails
    pub fn new<F>(check_fn: F, redirect_path: impl Into<String>) -> Self
    where
        F: Fn(&ActivatedRoute) -> bool + Send + Sync + 'static,
    {
        Self {
            check_fn: Box::new(check_fn),
            redirect_path: redirect_path.into(),
        }
    }

    /// Guard that reads a boolean from the route context
    ///
    /// A missing or non-boolean value counts as signed out.
    pub fn from_context(key: impl Into<String>, redirect_path: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(
            move |route| route.context().get_as::<bool>(&key).unwrap_or(false),
            redirect_path,
        )
    }

    /// Redirect target
    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }
}

impl RouteHook for AuthGuard {
    type Future = HookFuture;

    fn run(&self, route: &ActivatedRoute, navigation: &Navigation) -> Self::Future {
        let outcome = if (self.check_fn)(route) {
            Outcome::Proceed
        } else {
            Outcome::Redirect(navigation.redirect_to(self.redirect_path.as_str()))
        };
        Box::pin(async move { outcome })
    }

    fn name(&self) -> &str {
        "AuthGuard"
    }
}

/// AND composition of guards
///
/// # Example
///
/// ```
/// use little_navigator::{hook_fn, AuthGuard, Guards, Outcome};
///
/// let guard = Guards::builder()
///     .guard(AuthGuard::from_context("signedIn", "/login"))
///     .guard(hook_fn(|route, _| {
///         let allowed = route.params().contains("id");
///         async move { Outcome::from(allowed) }
///     }))
///     .build();
/// assert_eq!(guard.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Guards {
    guards: Vec<BoxedHook>,
}

impl Guards {
    /// Create a composition from boxed hooks
    pub fn new(guards: Vec<BoxedHook>) -> Self {
        Self { guards }
    }

    /// Start building a composition
    pub fn builder() -> GuardBuilder {
        GuardBuilder::default()
    }

    /// Number of guards
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Check if there are no guards
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// Helper macro for creating a [`Guards`] composition
///
/// ```
/// use little_navigator::{guards, AuthGuard};
///
/// let guard = guards![AuthGuard::from_context("signedIn", "/login")];
/// assert_eq!(guard.len(), 1);
/// ```
#[macro_export]
macro_rules! guards {
    ($($guard:expr),* $(,)?) => {
        $crate::guards::Guards::new(vec![$(
            ::std::sync::Arc::new($guard) as $crate::lifecycle::BoxedHook
        ),*])
    };
}

/// Builder for [`Guards`]
#[derive(Default)]
pub struct GuardBuilder {
    guards: Vec<BoxedHook>,
}

impl GuardBuilder {
    /// Add a guard
    pub fn guard<G>(mut self, guard: G) -> Self
    where
        G: RouteHook<Future = HookFuture>,
    {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Add a boxed guard
    pub fn boxed_guard(mut self, guard: BoxedHook) -> Self {
        self.guards.push(guard);
        self
    }

    /// Build the composition
    pub fn build(self) -> Guards {
        Guards::new(self.guards)
    }
}

impl RouteHook for Guards {
    type Future = HookFuture;

    fn run(&self, route: &ActivatedRoute, navigation: &Navigation) -> Self::Future {
        // Guards are started in order; each future owns what it needs.
        let futures: Vec<HookFuture> = self
            .guards
            .iter()
            .map(|guard| guard.run(route, navigation))
            .collect();

        Box::pin(async move {
            for future in futures {
                match future.await {
                    Outcome::Proceed => continue,
                    other => return other,
                }
            }
            Outcome::Proceed
        })
    }

    fn name(&self) -> &str {
        "Guards"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::hook_fn;
    use crate::navigation::{NavigationType, SequenceCounter};
    use crate::route::RouteConfig;
    use crate::tree::RouteNode;
    use serde_json::json;

    fn route(config: RouteConfig) -> ActivatedRoute {
        let node = RouteNode::root(config, Default::default());
        ActivatedRoute::new(node, "", "/admin", Default::default(), Default::default())
    }

    fn navigation() -> Navigation {
        Navigation::new(NavigationType::Push, "/admin", None, &SequenceCounter::new())
    }

    #[test]
    fn test_auth_guard_allows() {
        let guard = AuthGuard::new(|_| true, "/login");
        let outcome = pollster::block_on(guard.run(&route(RouteConfig::new("admin")), &navigation()));
        assert_eq!(outcome, Outcome::Proceed);
    }

    #[test]
    fn test_auth_guard_redirects() {
        let guard = AuthGuard::new(|_| false, "/login");
        let outcome = pollster::block_on(guard.run(&route(RouteConfig::new("admin")), &navigation()));

        let target = outcome.redirect_target().map(|n| n.to().pathname.clone());
        assert_eq!(target.as_deref(), Some("/login"));
        assert_eq!(guard.name(), "AuthGuard");
        assert_eq!(guard.redirect_path(), "/login");
    }

    #[test]
    fn test_auth_guard_from_context() {
        let guard = AuthGuard::from_context("signedIn", "/login");

        let signed_in = route(RouteConfig::new("admin").context("signedIn", json!(true)));
        let outcome = pollster::block_on(guard.run(&signed_in, &navigation()));
        assert!(outcome.allows_continue());

        let anonymous = route(RouteConfig::new("admin"));
        let outcome = pollster::block_on(guard.run(&anonymous, &navigation()));
        assert!(outcome.is_redirect());
    }

    #[test]
    fn test_guards_first_refusal_wins() {
        let guard = Guards::builder()
            .guard(hook_fn(|_, _| async { Outcome::Proceed }))
            .guard(hook_fn(|_, _| async { Outcome::reject("second") }))
            .guard(hook_fn(|_, _| async { Outcome::Block }))
            .build();

        let outcome = pollster::block_on(guard.run(&route(RouteConfig::new("admin")), &navigation()));
        assert_eq!(outcome, Outcome::reject("second"));
    }

    #[test]
    fn test_empty_guards_proceed() {
        let guard = guards![];
        assert!(guard.is_empty());
        let outcome = pollster::block_on(guard.run(&route(RouteConfig::new("admin")), &navigation()));
        assert_eq!(outcome, Outcome::Proceed);
    }
}
