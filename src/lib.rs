//! # Little Navigator
//!
//! A navigation scheduler for URL-driven applications:
//!
//! - **Route Trees** - Nested routes, compound paths, `:param` segments
//! - **Lazy Children** - Subtrees loaded on first match and cached
//! - **Lifecycle Hooks** - `canActivate`, `canDeactivate`, `willActivate`, `willDeactivate`
//! - **Redirects** - Returned by hooks as values, chained up to a fixed depth
//! - **Atomic Commits** - Current and previous route chains replaced together
//! - **Event Stream** - Every step of a navigation, from `NAVIGATION_START` to its terminal event
//! - **FIFO Navigation** - One navigation in flight, the rest queued in request order
//!
//! # Quick Start
//!
//! ```
//! use little_navigator::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), NavigatorError> {
//! let router = Router::builder()
//!     .routes(vec![
//!         RouteConfig::new("").match_mode(MatchMode::Full),
//!         RouteConfig::new("shows").load_children(|| async {
//!             Ok(vec![RouteConfig::new(":id")])
//!         }),
//!     ])
//!     .build()?;
//!
//! let subscription = router.subscribe_event(|event| {
//!     println!("{} {}", event.kind(), event.navigation().to());
//! });
//!
//! router.start()?.await?;
//! let outcome = router.push("/shows/42").await?;
//! assert_eq!(outcome.location(), Some("/shows/42"));
//!
//! let leaf = router.store().routes().pop();
//! assert_eq!(leaf.and_then(|r| r.params().get("id").cloned()), Some("42".into()));
//! subscription.dispose();
//! # Ok(())
//! # }
//! ```
//!
//! # Guards and Redirects
//!
//! ```no_run
//! use little_navigator::*;
//!
//! let routes = vec![
//!     RouteConfig::new("login"),
//!     RouteConfig::new("admin").can_activate(AuthGuard::from_context("signedIn", "/login")),
//!     RouteConfig::new("old-admin").redirect_to("/admin"),
//! ];
//! # let _ = routes;
//! ```
//!
//! # Driving the Scheduler by Hand
//!
//! The [`Router`] is a thin queue around [`process_event`]; the state
//! machine can be stepped directly against a [`RouterStore`]:
//!
//! ```
//! use little_navigator::*;
//!
//! # pollster::block_on(async {
//! let store = RouterStore::new(RouteNode::root(
//!     RouteConfig::new("").child(RouteConfig::new("a")),
//!     RouteContext::new(),
//! ));
//! let navigation = store.navigation(NavigationType::Push, "/a", None);
//!
//! let mut event = Event::NavigationStart { navigation };
//! while !event.is_terminal() {
//!     event = process_event(event, &store).await;
//! }
//! assert_eq!(event.kind(), EventType::NavigationEnd);
//! assert_eq!(store.location().as_deref(), Some("/a"));
//! # });
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)

#![doc(html_root_url = "https://docs.rs/little-navigator/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Error handling and settings
pub mod config;
pub mod error;

// Route model
pub mod context;
pub mod definition;
pub mod params;
pub mod route;
pub mod tree;

// Navigation values
pub mod activated;
pub mod navigation;

// Route lifecycle
pub mod guards;
pub mod lifecycle;

// Matching and scheduling
pub mod matcher;
pub mod scheduler;
pub mod state;

// Outer surface
pub mod history;
pub mod router;

// Re-export main types for convenient access
pub use activated::ActivatedRoute;
pub use config::RouterConfig;
pub use context::RouteContext;
pub use definition::HookRegistry;
pub use error::{ConfigError, NavigationOutcome, NavigatorError};
pub use guards::{AuthGuard, GuardBuilder, Guards};
pub use history::{HistoryAdapter, MemoryHistory};
pub use lifecycle::{
    hook_fn, loader_fn, resolver_fn, BoxedHook, ChildrenLoader, FnHook, HookFuture, HookKind,
    LoadFuture, Outcome, RedirectHook, ResolveFuture, Resolver, RouteHook,
};
pub use matcher::{match_route, MatchResult, PartialMatch, RoutePattern, Segment};
pub use navigation::{Location, Navigation, NavigationType, SequenceCounter};
pub use params::{QueryParams, RouteParams};
pub use route::{validate_route_path, DataFn, MatchMode, RouteChildren, RouteConfig, RouteData};
pub use router::{EventListener, NavigationHandle, Router, RouterBuilder, Subscription};
pub use scheduler::{drive, process_event, Event, EventType, MAX_REDIRECT_DEPTH};
pub use state::{RouterStore, StoreSnapshot};
pub use tree::RouteNode;
