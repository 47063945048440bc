//! Navigation scheduler
//!
//! A navigation is driven by feeding events through [`process_event`] until
//! a terminal event comes out. Each call performs one step:
//!
//! ```text
//! NAVIGATION_START ─► NAVIGATION_MATCH_RESULT ─┬─ none ───► NAVIGATION_ERROR
//!        ▲                    ▲                ├─ partial ─► CHILDREN_CONFIG_REQUEST
//!        │                    │                │              ─► CHILDREN_CONFIG_LOAD
//!        │                    └────────────────┼────────────── ◄─ CHILDREN_LOAD
//!        │                                     └─ full ────► transition
//!        └──────── redirect ◄──────────────────────────────────────┤
//!                                 NAVIGATION_CANCELLED / NAVIGATION_ERROR
//!                                 NAVIGATION_ACTIVATED ─► NAVIGATION_END
//! ```
//!
//! The transition runs, in order: `canDeactivate` on leaving routes
//! (deepest first), `canActivate` on entering routes (parent first), data
//! resolution, `willDeactivate`, `willActivate`, then a single commit to the
//! [`RouterStore`]. Nothing before the commit writes to the store.

use crate::activated::ActivatedRoute;
use crate::error::NavigatorError;
use crate::lifecycle::{HookKind, Outcome};
use crate::matcher::{match_route, MatchResult, PartialMatch};
use crate::navigation::Navigation;
use crate::route::RouteConfig;
use crate::state::{chain_location, RouterStore};
use crate::tree::RouteNode;
use crate::{debug_log, trace_log, warn_log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Redirects allowed in one chain before the navigation fails
pub const MAX_REDIRECT_DEPTH: usize = 16;

// ============================================================================
// Events
// ============================================================================

/// Event tags, as seen by subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    NavigationStart,
    NavigationMatchResult,
    ChildrenConfigRequest,
    ChildrenConfigLoad,
    ChildrenLoad,
    NavigationActivated,
    NavigationEnd,
    NavigationCancelled,
    NavigationError,
}

impl EventType {
    /// Tag as spelled on the event stream
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::NavigationStart => "NAVIGATION_START",
            EventType::NavigationMatchResult => "NAVIGATION_MATCH_RESULT",
            EventType::ChildrenConfigRequest => "CHILDREN_CONFIG_REQUEST",
            EventType::ChildrenConfigLoad => "CHILDREN_CONFIG_LOAD",
            EventType::ChildrenLoad => "CHILDREN_LOAD",
            EventType::NavigationActivated => "NAVIGATION_ACTIVATED",
            EventType::NavigationEnd => "NAVIGATION_END",
            EventType::NavigationCancelled => "NAVIGATION_CANCELLED",
            EventType::NavigationError => "NAVIGATION_ERROR",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle event of one navigation
#[derive(Debug, Clone)]
pub enum Event {
    /// A navigation (or a redirect) begins
    NavigationStart { navigation: Navigation },

    /// The target was matched against the tree
    NavigationMatchResult {
        navigation: Navigation,
        result: MatchResult,
    },

    /// Lazy children are needed to continue matching
    ChildrenConfigRequest {
        navigation: Navigation,
        partial: PartialMatch,
    },

    /// The loader returned raw child configs
    ChildrenConfigLoad {
        navigation: Navigation,
        node: Arc<RouteNode>,
        configs: Vec<RouteConfig>,
    },

    /// Children were built and cached on the node
    ChildrenLoad {
        navigation: Navigation,
        node: Arc<RouteNode>,
    },

    /// The new chain was committed to the store
    NavigationActivated {
        navigation: Navigation,
        routes: Vec<ActivatedRoute>,
    },

    /// Terminal: the navigation completed
    NavigationEnd {
        navigation: Navigation,
        location: String,
    },

    /// Terminal: a guard said no, or the navigation was cancelled
    NavigationCancelled { navigation: Navigation },

    /// Terminal: the navigation failed
    NavigationError {
        navigation: Navigation,
        error: NavigatorError,
    },
}

impl Event {
    /// Tag of this event
    pub fn kind(&self) -> EventType {
        match self {
            Event::NavigationStart { .. } => EventType::NavigationStart,
            Event::NavigationMatchResult { .. } => EventType::NavigationMatchResult,
            Event::ChildrenConfigRequest { .. } => EventType::ChildrenConfigRequest,
            Event::ChildrenConfigLoad { .. } => EventType::ChildrenConfigLoad,
            Event::ChildrenLoad { .. } => EventType::ChildrenLoad,
            Event::NavigationActivated { .. } => EventType::NavigationActivated,
            Event::NavigationEnd { .. } => EventType::NavigationEnd,
            Event::NavigationCancelled { .. } => EventType::NavigationCancelled,
            Event::NavigationError { .. } => EventType::NavigationError,
        }
    }

    /// The navigation this event belongs to
    pub fn navigation(&self) -> &Navigation {
        match self {
            Event::NavigationStart { navigation }
            | Event::NavigationMatchResult { navigation, .. }
            | Event::ChildrenConfigRequest { navigation, .. }
            | Event::ChildrenConfigLoad { navigation, .. }
            | Event::ChildrenLoad { navigation, .. }
            | Event::NavigationActivated { navigation, .. }
            | Event::NavigationEnd { navigation, .. }
            | Event::NavigationCancelled { navigation }
            | Event::NavigationError { navigation, .. } => navigation,
        }
    }

    /// Check if no further step follows this event
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::NavigationEnd { .. }
                | Event::NavigationCancelled { .. }
                | Event::NavigationError { .. }
        )
    }

    /// Error carried by a `NAVIGATION_ERROR` event
    pub fn error(&self) -> Option<&NavigatorError> {
        match self {
            Event::NavigationError { error, .. } => Some(error),
            _ => None,
        }
    }

    fn cancelled(navigation: &Navigation) -> Event {
        Event::NavigationCancelled {
            navigation: navigation.clone(),
        }
    }

    fn failed(navigation: &Navigation, error: NavigatorError) -> Event {
        Event::NavigationError {
            navigation: navigation.clone(),
            error,
        }
    }
}

// ============================================================================
// Transition function
// ============================================================================

/// Perform one step of a navigation
///
/// Terminal events are returned unchanged.
pub async fn process_event(event: Event, store: &RouterStore) -> Event {
    debug_log!(
        "#{} {} '{}'",
        event.navigation().sequence(),
        event.kind(),
        event.navigation().to()
    );

    match event {
        Event::NavigationStart { navigation } | Event::ChildrenLoad { navigation, .. } => {
            if navigation.is_cancelled() {
                return Event::cancelled(&navigation);
            }
            let result = match_route(store.root(), navigation.to());
            trace_log!("match for '{}': {}", navigation.to(), result.label());
            Event::NavigationMatchResult { navigation, result }
        }

        Event::NavigationMatchResult { navigation, result } => match result {
            MatchResult::Full(chain) => transition(navigation, chain, store).await,
            MatchResult::Partial(partial) => Event::ChildrenConfigRequest {
                navigation,
                partial,
            },
            MatchResult::None => {
                let pathname = navigation.to().pathname.clone();
                warn_log!("no route matches '{}'", pathname);
                Event::failed(&navigation, NavigatorError::NoMatch { pathname })
            }
        },

        Event::ChildrenConfigRequest {
            navigation,
            partial,
        } => {
            let node = partial.node;
            let Some(loader) = node.loader().filter(|_| node.needs_children()).cloned() else {
                return Event::ChildrenLoad { navigation, node };
            };

            let loaded = loader().await;
            if navigation.is_cancelled() {
                return Event::cancelled(&navigation);
            }

            match loaded {
                Ok(configs) => Event::ChildrenConfigLoad {
                    navigation,
                    node,
                    configs,
                },
                Err(reason) => {
                    warn_log!("loading children of '{}' failed: {}", node.path(), reason);
                    Event::failed(
                        &navigation,
                        NavigatorError::DynamicLoad {
                            path: node.path().to_string(),
                            reason,
                        },
                    )
                }
            }
        }

        Event::ChildrenConfigLoad {
            navigation,
            node,
            configs,
        } => {
            node.attach_children(configs);
            Event::ChildrenLoad { navigation, node }
        }

        Event::NavigationActivated { navigation, routes } => {
            let location = chain_location(&routes).unwrap_or_else(|| navigation.to().to_string());
            Event::NavigationEnd {
                navigation,
                location,
            }
        }

        terminal => terminal,
    }
}

/// Drive a navigation from `first` to its terminal event
///
/// `on_event` sees every event, `first` and the terminal one included.
pub async fn drive<F>(store: &RouterStore, first: Event, mut on_event: F) -> Event
where
    F: FnMut(&Event),
{
    let mut event = first;
    loop {
        on_event(&event);
        if event.is_terminal() {
            return event;
        }
        event = process_event(event, store).await;
    }
}

async fn transition(navigation: Navigation, next: Vec<ActivatedRoute>, store: &RouterStore) -> Event {
    let current = store.routes();
    let split = current
        .iter()
        .zip(&next)
        .take_while(|(old, new)| old.same_route(new))
        .count();

    let mut next = next;
    for (new, old) in next.iter_mut().zip(&current).take(split) {
        new.inherit_data(old);
    }

    let deactivating: Vec<ActivatedRoute> = current[split..].iter().rev().cloned().collect();
    trace_log!(
        "transition keeps {} routes, leaves {}, enters {}",
        split,
        deactivating.len(),
        next.len() - split
    );

    if let Some(stop) = run_hooks(HookKind::CanDeactivate, &deactivating, &navigation).await {
        return stop;
    }
    if let Some(stop) = run_hooks(HookKind::CanActivate, &next[split..], &navigation).await {
        return stop;
    }
    if let Some(stop) = resolve(&mut next[split..], &navigation).await {
        return stop;
    }
    if let Some(stop) = run_hooks(HookKind::WillDeactivate, &deactivating, &navigation).await {
        return stop;
    }
    if let Some(stop) = run_hooks(HookKind::WillActivate, &next[split..], &navigation).await {
        return stop;
    }

    if navigation.is_cancelled() {
        return Event::cancelled(&navigation);
    }

    store.commit(next.clone());
    Event::NavigationActivated {
        navigation,
        routes: next,
    }
}

async fn run_hooks(kind: HookKind, routes: &[ActivatedRoute], navigation: &Navigation) -> Option<Event> {
    for route in routes {
        let Some(hook) = route.config().hook_for(kind) else {
            continue;
        };

        let outcome = hook.run(route, navigation).await;
        trace_log!("{} '{}' ({}): {:?}", kind, route.value(), hook.name(), outcome);

        if navigation.is_cancelled() {
            return Some(Event::cancelled(navigation));
        }

        match outcome {
            Outcome::Proceed => {}
            Outcome::Block => {
                debug_log!("{} blocked navigation to '{}'", kind, navigation.to());
                return Some(Event::cancelled(navigation));
            }
            Outcome::Reject { reason } => {
                warn_log!("{} rejected '{}': {}", kind, route.value(), reason);
                return Some(Event::failed(
                    navigation,
                    NavigatorError::GuardRejected {
                        hook: kind.to_string(),
                        path: route.value().to_string(),
                        reason,
                    },
                ));
            }
            Outcome::Redirect(target) => return Some(redirect(navigation, target)),
        }
    }
    None
}

async fn resolve(routes: &mut [ActivatedRoute], navigation: &Navigation) -> Option<Event> {
    for route in routes.iter_mut() {
        route.produce_data();

        let Some(resolver) = route.config().will_resolve.clone() else {
            continue;
        };

        let resolved = resolver(&*route, navigation).await;
        if navigation.is_cancelled() {
            return Some(Event::cancelled(navigation));
        }

        match resolved {
            Ok(Some(data)) => route.set_data(data),
            Ok(None) => {}
            Err(reason) => {
                warn_log!("resolving '{}' failed: {}", route.value(), reason);
                return Some(Event::failed(
                    navigation,
                    NavigatorError::Resolve {
                        path: route.value().to_string(),
                        reason,
                    },
                ));
            }
        }
    }
    None
}

fn redirect(navigation: &Navigation, target: Navigation) -> Event {
    navigation.cancel();

    let depth = target.redirect_depth();
    if depth > MAX_REDIRECT_DEPTH {
        warn_log!("redirect limit reached at '{}'", target.to());
        let pathname = target.to().pathname.clone();
        return Event::failed(&target, NavigatorError::RedirectLimit { pathname, depth });
    }

    debug_log!("redirecting '{}' -> '{}'", navigation.to(), target.to());
    Event::NavigationStart { navigation: target }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{hook_fn, HookFuture, RouteHook};
    use crate::navigation::{Location, NavigationType};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    fn store(routes: Vec<RouteConfig>) -> RouterStore {
        RouterStore::new(RouteNode::root(
            RouteConfig::new("").children(routes),
            Default::default(),
        ))
    }

    async fn navigate(store: &RouterStore, url: &str) -> (Vec<EventType>, Event) {
        let from = store.location().map(Location::from);
        let navigation = store.navigation(NavigationType::Push, url, from);
        let mut kinds = Vec::new();
        let last = drive(store, Event::NavigationStart { navigation }, |event| {
            kinds.push(event.kind())
        })
        .await;
        (kinds, last)
    }

    fn record(log: &Log, label: &'static str) -> impl RouteHook<Future = HookFuture> {
        let log = Arc::clone(log);
        hook_fn(move |_, _| {
            log.lock().unwrap().push(label.to_string());
            async { Outcome::Proceed }
        })
    }

    fn lazy_root() -> RouterStore {
        store(vec![RouteConfig::new("").load_children(|| async {
            Ok(vec![RouteConfig::new("a"), RouteConfig::new("b")])
        })])
    }

    #[tokio::test]
    async fn test_lazy_children_event_order() {
        let store = lazy_root();
        let (kinds, last) = navigate(&store, "/").await;

        assert_eq!(
            kinds,
            [
                EventType::NavigationStart,
                EventType::NavigationMatchResult,
                EventType::ChildrenConfigRequest,
                EventType::ChildrenConfigLoad,
                EventType::ChildrenLoad,
                EventType::NavigationMatchResult,
                EventType::NavigationActivated,
                EventType::NavigationEnd,
            ]
        );
        assert!(matches!(last, Event::NavigationEnd { ref location, .. } if location == "/"));
    }

    #[tokio::test]
    async fn test_lazy_children_no_match() {
        let store = lazy_root();
        let (kinds, last) = navigate(&store, "/c").await;

        assert_eq!(
            &kinds[..5],
            [
                EventType::NavigationStart,
                EventType::NavigationMatchResult,
                EventType::ChildrenConfigRequest,
                EventType::ChildrenConfigLoad,
                EventType::ChildrenLoad,
            ]
        );
        assert_eq!(kinds.last(), Some(&EventType::NavigationError));
        assert!(last.error().is_some_and(NavigatorError::is_no_match));
        assert!(store.routes().is_empty());
    }

    #[tokio::test]
    async fn test_loaded_children_are_reused() {
        let store = lazy_root();
        navigate(&store, "/a").await;
        let (kinds, _) = navigate(&store, "/b").await;
        assert!(!kinds.contains(&EventType::ChildrenConfigRequest));
        assert_eq!(store.location().as_deref(), Some("/b"));
    }

    #[tokio::test]
    async fn test_step_by_step() {
        let store = lazy_root();
        let navigation = store.navigation(NavigationType::Push, "/a", None);

        let event = process_event(Event::NavigationStart { navigation }, &store).await;
        match &event {
            Event::NavigationMatchResult { result, .. } => assert!(result.is_partial()),
            other => panic!("unexpected {}", other.kind()),
        }

        let event = process_event(event, &store).await;
        assert_eq!(event.kind(), EventType::ChildrenConfigRequest);
        let event = process_event(event, &store).await;
        match &event {
            Event::ChildrenConfigLoad { configs, .. } => {
                let paths: Vec<_> = configs.iter().map(|c| c.path()).collect();
                assert_eq!(paths, ["a", "b"]);
            }
            other => panic!("unexpected {}", other.kind()),
        }

        let event = process_event(event, &store).await;
        assert_eq!(event.kind(), EventType::ChildrenLoad);
        assert!(store.routes().is_empty());

        let event = process_event(event, &store).await;
        let event = process_event(event, &store).await;
        assert_eq!(event.kind(), EventType::NavigationActivated);
        assert_eq!(store.location().as_deref(), Some("/a"));

        let end = process_event(event, &store).await;
        assert_eq!(end.kind(), EventType::NavigationEnd);
        let again = process_event(end.clone(), &store).await;
        assert_eq!(again.kind(), EventType::NavigationEnd);
    }

    #[tokio::test]
    async fn test_loader_failure() {
        let store = store(vec![
            RouteConfig::new("shows").load_children(|| async { Err("offline".to_string()) })
        ]);
        let (_, last) = navigate(&store, "/shows/1").await;
        assert_eq!(
            last.error(),
            Some(&NavigatorError::DynamicLoad {
                path: "shows".to_string(),
                reason: "offline".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_redirect_to() {
        let store = store(vec![
            RouteConfig::new("a").redirect_to("/b"),
            RouteConfig::new("b"),
        ]);
        let (kinds, last) = navigate(&store, "/a").await;

        let starts = kinds
            .iter()
            .filter(|k| **k == EventType::NavigationStart)
            .count();
        assert_eq!(starts, 2);
        assert_eq!(last.navigation().kind(), NavigationType::Redirect);
        assert_eq!(
            last.navigation().redirected_from().map(|n| n.kind()),
            Some(NavigationType::Push)
        );
        assert_eq!(store.location().as_deref(), Some("/b"));
    }

    #[tokio::test]
    async fn test_redirect_loop_is_capped() {
        let store = store(vec![
            RouteConfig::new("a").redirect_to("/b"),
            RouteConfig::new("b").redirect_to("/a"),
        ]);
        let (_, last) = navigate(&store, "/a").await;
        match last.error() {
            Some(NavigatorError::RedirectLimit { depth, .. }) => {
                assert_eq!(*depth, MAX_REDIRECT_DEPTH + 1)
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(store.routes().is_empty());
    }

    #[tokio::test]
    async fn test_can_deactivate_blocks() {
        let store = store(vec![
            RouteConfig::new("form").can_deactivate(hook_fn(|_, _| async { Outcome::Block })),
            RouteConfig::new("other"),
        ]);
        navigate(&store, "/form").await;

        let (_, last) = navigate(&store, "/other").await;
        assert_eq!(last.kind(), EventType::NavigationCancelled);
        assert_eq!(store.location().as_deref(), Some("/form"));
    }

    #[tokio::test]
    async fn test_can_activate_reject() {
        let store = store(vec![RouteConfig::new("admin")
            .can_activate(hook_fn(|_, _| async { Outcome::reject("forbidden") }))]);
        let (_, last) = navigate(&store, "/admin").await;

        assert_eq!(
            last.error(),
            Some(&NavigatorError::GuardRejected {
                hook: "canActivate".to_string(),
                path: "/admin".to_string(),
                reason: "forbidden".to_string(),
            })
        );
        assert_eq!(store.location(), None);
    }

    #[tokio::test]
    async fn test_hook_order() {
        let log: Log = Arc::default();
        let store = store(vec![
            RouteConfig::new("a")
                .can_deactivate(record(&log, "canDeactivate a"))
                .will_deactivate(record(&log, "willDeactivate a"))
                .child(
                    RouteConfig::new("b")
                        .can_deactivate(record(&log, "canDeactivate b"))
                        .will_deactivate(record(&log, "willDeactivate b")),
                ),
            RouteConfig::new("c")
                .can_activate(record(&log, "canActivate c"))
                .will_activate(record(&log, "willActivate c"))
                .child(
                    RouteConfig::new("d")
                        .can_activate(record(&log, "canActivate d"))
                        .will_activate(record(&log, "willActivate d")),
                ),
        ]);

        navigate(&store, "/a/b").await;
        log.lock().unwrap().clear();
        navigate(&store, "/c/d").await;

        assert_eq!(
            *log.lock().unwrap(),
            [
                "canDeactivate b",
                "canDeactivate a",
                "canActivate c",
                "canActivate d",
                "willDeactivate b",
                "willDeactivate a",
                "willActivate c",
                "willActivate d",
            ]
        );
        let prev: Vec<_> = store.prev_routes().iter().map(|r| r.value().to_string()).collect();
        assert_eq!(prev, ["", "/a", "/a/b"]);
    }

    #[tokio::test]
    async fn test_shared_prefix_is_kept() {
        let log: Log = Arc::default();
        let store = store(vec![RouteConfig::new("shows")
            .can_activate(record(&log, "shows"))
            .will_resolve(|_, _| async { Ok(Some(json!("resolved"))) })
            .child(RouteConfig::new(":id").can_activate(record(&log, "show")))]);

        navigate(&store, "/shows/1").await;
        navigate(&store, "/shows/2").await;

        assert_eq!(*log.lock().unwrap(), ["shows", "show", "show"]);
        let routes = store.routes();
        assert_eq!(routes[1].data(), Some(&json!("resolved")));
        assert_eq!(routes[2].params().get("id"), Some(&"2".to_string()));
    }

    #[tokio::test]
    async fn test_get_data_runs_for_activating_routes_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let store = store(vec![RouteConfig::new("shows")
            .get_data(move |_| json!(counter.fetch_add(1, Ordering::SeqCst)))
            .children(vec![
                RouteConfig::new("x").can_activate(hook_fn(|_, _| async { Outcome::Block })),
                RouteConfig::new(":id"),
            ])]);

        navigate(&store, "/shows/1").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        navigate(&store, "/shows/2").await;
        let (_, last) = navigate(&store, "/shows/x").await;
        assert_eq!(last.kind(), EventType::NavigationCancelled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.routes()[1].data(), Some(&json!(0)));

        // A blocked first activation never produces data.
        let blocked = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&blocked);
        let store = store_with_blocked_data(counter);
        navigate(&store, "/gated").await;
        assert_eq!(blocked.load(Ordering::SeqCst), 0);
    }

    fn store_with_blocked_data(counter: Arc<AtomicUsize>) -> RouterStore {
        store(vec![RouteConfig::new("gated")
            .get_data(move |_| json!(counter.fetch_add(1, Ordering::SeqCst)))
            .can_activate(hook_fn(|_, _| async { Outcome::Block }))])
    }

    #[tokio::test]
    async fn test_resolve_failure() {
        let store = store(vec![
            RouteConfig::new("a").will_resolve(|_, _| async { Err("timeout".to_string()) })
        ]);
        let (_, last) = navigate(&store, "/a").await;
        assert!(matches!(last.error(), Some(NavigatorError::Resolve { .. })));
        assert!(store.routes().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_navigation_is_discarded() {
        let store = store(vec![RouteConfig::new("a")]);
        let navigation = store.navigation(NavigationType::Push, "/a", None);
        navigation.cancel();

        let last = drive(&store, Event::NavigationStart { navigation }, |_| {}).await;
        assert_eq!(last.kind(), EventType::NavigationCancelled);
        assert!(store.routes().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_during_guard() {
        let store = store(vec![RouteConfig::new("slow").can_activate(hook_fn(
            |_, navigation| {
                let navigation = navigation.clone();
                async move {
                    navigation.cancel();
                    Outcome::Proceed
                }
            },
        ))]);
        let (_, last) = navigate(&store, "/slow").await;
        assert_eq!(last.kind(), EventType::NavigationCancelled);
        assert!(store.routes().is_empty());
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(EventType::NavigationMatchResult.to_string(), "NAVIGATION_MATCH_RESULT");
        assert_eq!(
            serde_json::to_value(EventType::ChildrenConfigLoad).ok(),
            Some(json!("CHILDREN_CONFIG_LOAD"))
        );
    }
}
