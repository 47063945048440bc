//! Router facade
//!
//! [`Router`] owns the [`RouterStore`], a history adapter and the event
//! subscribers, and serves navigation requests from a bounded FIFO queue.
//! One worker task drives one navigation at a time to its terminal event
//! before taking the next request, so subscribers observe every committed
//! location in request order.
//!
//! # Lifecycle
//! 1. Build with [`Router::builder`]
//! 2. [`start`](Router::start) inside a Tokio runtime - spawns the worker and
//!    navigates to the history's current location
//! 3. Request navigations with `push`, `replace`, `go_back`, ...
//! 4. [`stop`](Router::stop) - queued navigations still complete

use crate::config::RouterConfig;
use crate::context::RouteContext;
use crate::error::{NavigationOutcome, NavigatorError};
use crate::history::{HistoryAdapter, MemoryHistory};
use crate::navigation::{Location, Navigation, NavigationType};
use crate::route::RouteConfig;
use crate::scheduler::{drive, Event};
use crate::state::RouterStore;
use crate::tree::RouteNode;
use crate::{debug_log, info_log, warn_log};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};

/// Subscriber callback for navigation events
pub type EventListener = Arc<dyn Fn(&Event) + Send + Sync>;

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Router`]
pub struct RouterBuilder {
    routes: Vec<RouteConfig>,
    context: RouteContext,
    history: Option<Box<dyn HistoryAdapter>>,
    config: RouterConfig,
}

impl RouterBuilder {
    fn new() -> Self {
        Self {
            routes: Vec::new(),
            context: RouteContext::new(),
            history: None,
            config: RouterConfig::default(),
        }
    }

    /// Set the top-level routes
    pub fn routes(mut self, routes: Vec<RouteConfig>) -> Self {
        self.routes = routes;
        self
    }

    /// Add a top-level route
    pub fn route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Context inherited by every route
    pub fn context(mut self, context: RouteContext) -> Self {
        self.context = context;
        self
    }

    /// Use a custom history adapter
    pub fn history(mut self, history: impl HistoryAdapter) -> Self {
        self.history = Some(Box::new(history));
        self
    }

    /// Router settings
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the router
    ///
    /// # Errors
    /// * `NavigatorError::Config` if the settings are invalid
    pub fn build(self) -> Result<Router, NavigatorError> {
        self.config.validate()?;

        let root = RouteNode::root(RouteConfig::new("").children(self.routes), self.context);
        let history = self.history.unwrap_or_else(|| {
            Box::new(MemoryHistory::with_max_size(
                self.config.initial_path.clone(),
                self.config.history_limit,
            ))
        });

        let shared = Arc::new(Shared {
            store: Arc::new(RouterStore::new(root)),
            history: Mutex::new(history),
            listeners: Arc::new(Mutex::new(ListenerSet::default())),
            in_flight: Mutex::new(None),
        });

        Ok(Router {
            shared,
            config: self.config,
            request_tx: Mutex::new(None),
            started: AtomicBool::new(false),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

/// Navigation router
///
/// # Example
///
/// ```
/// use little_navigator::{MemoryHistory, RouteConfig, Router};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), little_navigator::NavigatorError> {
/// let router = Router::builder()
///     .routes(vec![RouteConfig::new("shows"), RouteConfig::new("about")])
///     .history(MemoryHistory::new("/shows"))
///     .build()?;
///
/// router.start()?.await?;
/// assert_eq!(router.location().as_deref(), Some("/shows"));
///
/// let outcome = router.push("/about").await?;
/// assert!(outcome.is_activated());
/// assert_eq!(router.history_location(), "/about");
/// # Ok(())
/// # }
/// ```
pub struct Router {
    shared: Arc<Shared>,
    config: RouterConfig,
    request_tx: Mutex<Option<mpsc::Sender<Request>>>,
    started: AtomicBool,
}

impl Router {
    /// Start building a router
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// The store holding the committed chains
    pub fn store(&self) -> &Arc<RouterStore> {
        &self.shared.store
    }

    /// Router settings
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Committed location, `None` before the first commit
    pub fn location(&self) -> Option<String> {
        self.shared.store.location()
    }

    /// Current URL of the history adapter
    pub fn history_location(&self) -> String {
        self.shared.history().location()
    }

    /// Check if the router accepts navigations
    pub fn is_running(&self) -> bool {
        lock(&self.request_tx).is_some()
    }

    /// Spawn the worker and navigate to the history's current location
    ///
    /// The initial navigation is a `REPLACE`; the returned handle resolves
    /// when it settles.
    ///
    /// # Errors
    /// * `NavigatorError::AlreadyStarted` on a second call
    /// * `NavigatorError::NoRuntime` outside a Tokio runtime
    pub fn start(&self) -> Result<NavigationHandle, NavigatorError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| NavigatorError::NoRuntime)?;
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(NavigatorError::AlreadyStarted);
        }

        let (request_tx, request_rx) = mpsc::channel(self.config.queue_capacity);
        *lock(&self.request_tx) = Some(request_tx);
        runtime.spawn(worker_loop(Arc::clone(&self.shared), request_rx));

        let initial = self.shared.history().location();
        info_log!("router started at '{}'", initial);
        Ok(self.navigate(NavigationType::Replace, &initial))
    }

    /// Stop accepting navigations
    ///
    /// Requests already queued still run to completion.
    pub fn stop(&self) {
        if lock(&self.request_tx).take().is_some() {
            info_log!("router stopped");
        }
    }

    /// Mark the navigation in flight as cancelled
    ///
    /// Hooks already running are not interrupted; the navigation ends with
    /// `NAVIGATION_CANCELLED` at its next checkpoint. Returns `false` if
    /// nothing was in flight.
    pub fn cancel(&self) -> bool {
        match lock(&self.shared.in_flight).as_ref() {
            Some(navigation) => {
                debug_log!("cancelling navigation #{}", navigation.sequence());
                navigation.cancel();
                true
            }
            None => false,
        }
    }

    /// Navigate to `url`, adding a history entry
    pub fn push(&self, url: &str) -> NavigationHandle {
        self.navigate(NavigationType::Push, url)
    }

    /// Navigate to `url`, replacing the current history entry
    pub fn replace(&self, url: &str) -> NavigationHandle {
        self.navigate(NavigationType::Replace, url)
    }

    /// Step back in history
    ///
    /// If the navigation does not commit, history steps forward again.
    /// Resolves to `Cancelled` when there is nothing to go back to.
    pub fn go_back(&self) -> NavigationHandle {
        self.enqueue(Command::Back, None)
    }

    /// Step forward in history
    pub fn go_forward(&self) -> NavigationHandle {
        self.enqueue(Command::Forward, None)
    }

    /// Report that the history moved on its own (address bar, popstate)
    pub fn location_changed(&self, url: &str) -> NavigationHandle {
        self.navigate(NavigationType::Pop, url)
    }

    /// Subscribe to navigation events
    ///
    /// Listeners run on the worker task, in subscription order.
    pub fn subscribe_event<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let listener: EventListener = Arc::new(listener);
        let mut set = lock(&self.shared.listeners);
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, listener));

        Subscription {
            id,
            listeners: Arc::downgrade(&self.shared.listeners),
        }
    }

    fn navigate(&self, kind: NavigationType, url: &str) -> NavigationHandle {
        // `from` is filled in by the worker when the navigation runs.
        let navigation = self.shared.store.navigation(kind, url, None);
        let sequence = navigation.sequence();
        self.enqueue(Command::Navigate(navigation), Some(sequence))
    }

    fn enqueue(&self, command: Command, sequence: Option<u64>) -> NavigationHandle {
        let guard = lock(&self.request_tx);
        let Some(request_tx) = guard.as_ref() else {
            return NavigationHandle::failed(NavigatorError::Stopped);
        };

        let (reply, outcome) = oneshot::channel();
        match request_tx.try_send(Request { command, reply }) {
            Ok(()) => NavigationHandle {
                sequence,
                state: HandleState::Pending(outcome),
            },
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn_log!("navigation queue is full");
                NavigationHandle::failed(NavigatorError::QueueFull {
                    capacity: self.config.queue_capacity,
                })
            }
            Err(mpsc::error::TrySendError::Closed(_)) => NavigationHandle::failed(NavigatorError::Stopped),
        }
    }
}

// ============================================================================
// Worker
// ============================================================================

enum Command {
    Navigate(Navigation),
    Back,
    Forward,
}

struct Request {
    command: Command,
    reply: oneshot::Sender<NavigationOutcome>,
}

struct Shared {
    store: Arc<RouterStore>,
    history: Mutex<Box<dyn HistoryAdapter>>,
    listeners: Arc<Mutex<ListenerSet>>,
    in_flight: Mutex<Option<Navigation>>,
}

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, EventListener)>,
}

async fn worker_loop(shared: Arc<Shared>, mut request_rx: mpsc::Receiver<Request>) {
    while let Some(Request { command, reply }) = request_rx.recv().await {
        let outcome = match command {
            Command::Navigate(mut navigation) => {
                navigation.set_from(shared.store.location().map(Location::from));
                shared.run(navigation).await
            }
            Command::Back => shared.traverse(true).await,
            Command::Forward => shared.traverse(false).await,
        };
        // The requester may have dropped its handle.
        let _ = reply.send(outcome);
    }
    debug_log!("navigation worker finished");
}

impl Shared {
    fn history(&self) -> MutexGuard<'_, Box<dyn HistoryAdapter>> {
        lock(&self.history)
    }

    async fn run(&self, navigation: Navigation) -> NavigationOutcome {
        let first = Event::NavigationStart { navigation };
        let last = drive(&self.store, first, |event| self.on_event(event)).await;

        match last {
            Event::NavigationEnd { location, .. } => NavigationOutcome::Activated { location },
            Event::NavigationError { error, .. } => NavigationOutcome::Failed(error),
            _ => NavigationOutcome::Cancelled,
        }
    }

    async fn traverse(&self, back: bool) -> NavigationOutcome {
        let moved = {
            let mut history = self.history();
            if back {
                history.back()
            } else {
                history.forward()
            }
        };
        let Some(url) = moved else {
            return NavigationOutcome::Cancelled;
        };

        let from = self.store.location().map(Location::from);
        let navigation = self.store.navigation(NavigationType::Pop, url, from);
        let outcome = self.run(navigation).await;

        if !outcome.is_activated() {
            let mut history = self.history();
            if back {
                history.forward();
            } else {
                history.back();
            }
        }
        outcome
    }

    fn on_event(&self, event: &Event) {
        match event {
            Event::NavigationStart { navigation } => {
                *lock(&self.in_flight) = Some(navigation.clone());
            }
            Event::NavigationActivated { navigation, .. } => self.sync_history(navigation),
            _ => {}
        }
        if event.is_terminal() {
            *lock(&self.in_flight) = None;
        }

        let listeners: Vec<EventListener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    fn sync_history(&self, navigation: &Navigation) {
        let Some(url) = self.store.location() else {
            return;
        };
        let redirected = navigation.redirected_from().is_some();

        let mut history = self.history();
        match navigation.origin_kind() {
            NavigationType::Push => history.push(&url),
            NavigationType::Replace => history.replace(&url),
            NavigationType::Pop if redirected => history.replace(&url),
            NavigationType::Pop | NavigationType::Redirect => {}
        }
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// Handles
// ============================================================================

/// Resolves when a requested navigation settles
///
/// Awaiting is optional; the navigation runs either way.
pub struct NavigationHandle {
    sequence: Option<u64>,
    state: HandleState,
}

enum HandleState {
    Pending(oneshot::Receiver<NavigationOutcome>),
    Done(Option<NavigatorError>),
}

impl NavigationHandle {
    fn failed(error: NavigatorError) -> Self {
        Self {
            sequence: None,
            state: HandleState::Done(Some(error)),
        }
    }

    /// Sequence number of the requested navigation
    ///
    /// `None` for history traversals, which are numbered when they run, and
    /// for rejected requests.
    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }
}

impl Future for NavigationHandle {
    type Output = Result<NavigationOutcome, NavigatorError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            HandleState::Pending(outcome) => Pin::new(outcome)
                .poll(cx)
                .map(|received| received.map_err(|_| NavigatorError::Stopped)),
            HandleState::Done(error) => {
                Poll::Ready(Err(error.take().unwrap_or(NavigatorError::Stopped)))
            }
        }
    }
}

/// Disposer returned by [`Router::subscribe_event`]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<ListenerSet>>,
}

impl Subscription {
    /// Remove the listener; later events are not delivered to it
    pub fn dispose(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{hook_fn, Outcome};
    use crate::scheduler::EventType;

    fn router(routes: Vec<RouteConfig>) -> Router {
        Router::builder()
            .routes(routes)
            .build()
            .expect("valid router")
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let result = Router::builder()
            .config(RouterConfig {
                queue_capacity: 0,
                ..RouterConfig::default()
            })
            .build();
        assert!(matches!(result, Err(NavigatorError::Config(_))));
    }

    #[test]
    fn test_start_needs_runtime() {
        let router = router(vec![]);
        assert!(matches!(router.start(), Err(NavigatorError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_requests_before_start_fail() {
        let router = router(vec![RouteConfig::new("a")]);
        assert_eq!(router.push("/a").await, Err(NavigatorError::Stopped));
    }

    #[tokio::test]
    async fn test_start_twice() {
        let router = router(vec![]);
        let first = router.start().expect("started");
        assert!(matches!(router.start(), Err(NavigatorError::AlreadyStarted)));
        assert!(first.await.is_ok_and(|outcome| outcome.is_activated()));
    }

    #[tokio::test]
    async fn test_stop_drains_queue() {
        let router = router(vec![RouteConfig::new("a")]);
        router.start().expect("started");
        let pending = router.push("/a");
        router.stop();

        assert!(!router.is_running());
        assert_eq!(router.push("/a").await, Err(NavigatorError::Stopped));
        assert!(pending.await.is_ok_and(|outcome| outcome.is_activated()));
        assert_eq!(router.location().as_deref(), Some("/a"));
    }

    #[tokio::test]
    async fn test_queue_full() {
        let router = Router::builder()
            .route(RouteConfig::new("a"))
            .config(RouterConfig {
                queue_capacity: 1,
                ..RouterConfig::default()
            })
            .build()
            .expect("valid router");

        router.start().expect("started");
        let rejected = router.push("/a");
        assert_eq!(rejected.sequence(), None);
        assert_eq!(rejected.await, Err(NavigatorError::QueueFull { capacity: 1 }));
    }

    #[tokio::test]
    async fn test_subscription_dispose() {
        let router = router(vec![RouteConfig::new("a"), RouteConfig::new("b")]);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let subscription = router.subscribe_event(move |event| {
            if event.kind() == EventType::NavigationEnd {
                sink.lock().unwrap().push(event.navigation().to().pathname.clone());
            }
        });

        router.start().expect("started").await.expect("settled");
        router.push("/a").await.expect("settled");
        subscription.dispose();
        router.push("/b").await.expect("settled");

        assert_eq!(*seen.lock().unwrap(), ["/", "/a"]);
    }

    #[tokio::test]
    async fn test_history_sync() {
        let router = router(vec![
            RouteConfig::new("a"),
            RouteConfig::new("b"),
            RouteConfig::new("old").redirect_to("/b"),
        ]);
        router.start().expect("started").await.expect("settled");

        router.push("/a").await.expect("settled");
        assert_eq!(router.history_location(), "/a");

        router.replace("/b").await.expect("settled");
        assert_eq!(router.history_location(), "/b");

        let outcome = router.go_back().await.expect("settled");
        assert_eq!(outcome.location(), Some("/"));
        assert_eq!(router.history_location(), "/");

        let outcome = router.go_forward().await.expect("settled");
        assert_eq!(outcome.location(), Some("/b"));

        router.push("/old").await.expect("settled");
        assert_eq!(router.history_location(), "/b");
        assert_eq!(router.location().as_deref(), Some("/b"));
    }

    #[tokio::test]
    async fn test_queued_navigation_starts_from_previous_commit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let router = Router::builder()
            .route(RouteConfig::new(":page").can_activate(hook_fn(move |_, navigation| {
                let from = navigation.from().map(|from| from.pathname.clone());
                sink.lock()
                    .unwrap()
                    .push((navigation.to().pathname.clone(), from));
                async { Outcome::Proceed }
            })))
            .history(MemoryHistory::new("/start"))
            .build()
            .expect("valid router");

        router.start().expect("started");
        router.push("/1");
        router.push("/2").await.expect("settled");

        assert_eq!(
            *seen.lock().unwrap(),
            [
                ("/start".to_string(), None),
                ("/1".to_string(), Some("/start".to_string())),
                ("/2".to_string(), Some("/1".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_go_back_at_start() {
        let router = router(vec![]);
        router.start().expect("started").await.expect("settled");
        let outcome = router.go_back().await.expect("settled");
        assert!(outcome.is_cancelled());
    }
}
