//! Router state
//!
//! [`RouterStore`] holds the committed chain of activated routes and the chain
//! it replaced. `commit` is the only way to change either.

use crate::activated::ActivatedRoute;
use crate::debug_log;
use crate::navigation::{Location, Navigation, NavigationType, SequenceCounter};
use crate::tree::RouteNode;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Chains {
    routes: Vec<ActivatedRoute>,
    prev_routes: Vec<ActivatedRoute>,
}

/// Current and previous activated chains, taken together
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Current chain, root first
    pub routes: Vec<ActivatedRoute>,
    /// Chain replaced by the last commit
    pub prev_routes: Vec<ActivatedRoute>,
}

/// Router store
///
/// Owns the route tree and the navigation sequence counter, and holds the
/// committed chains.
#[derive(Debug)]
pub struct RouterStore {
    root: Arc<RouteNode>,
    sequence: SequenceCounter,
    chains: RwLock<Chains>,
}

impl RouterStore {
    /// Create a store over the tree rooted at `root`
    pub fn new(root: Arc<RouteNode>) -> Self {
        Self {
            root,
            sequence: SequenceCounter::new(),
            chains: RwLock::new(Chains::default()),
        }
    }

    /// Root of the route tree
    pub fn root(&self) -> &Arc<RouteNode> {
        &self.root
    }

    /// Sequence counter navigations of this store draw from
    pub fn sequence(&self) -> &SequenceCounter {
        &self.sequence
    }

    /// Create a navigation numbered by this store
    pub fn navigation(
        &self,
        kind: NavigationType,
        to: impl Into<Location>,
        from: Option<Location>,
    ) -> Navigation {
        Navigation::new(kind, to, from, &self.sequence)
    }

    /// Current chain, root first
    pub fn routes(&self) -> Vec<ActivatedRoute> {
        self.read().routes.clone()
    }

    /// Chain replaced by the last commit
    pub fn prev_routes(&self) -> Vec<ActivatedRoute> {
        self.read().prev_routes.clone()
    }

    /// Both chains, read under one lock
    pub fn snapshot(&self) -> StoreSnapshot {
        let chains = self.read();
        StoreSnapshot {
            routes: chains.routes.clone(),
            prev_routes: chains.prev_routes.clone(),
        }
    }

    /// URL of the leaf route, `None` before the first commit
    pub fn location(&self) -> Option<String> {
        chain_location(&self.read().routes)
    }

    /// Replace the current chain
    ///
    /// The current chain becomes the previous one in the same step.
    pub fn commit(&self, next: Vec<ActivatedRoute>) {
        let mut chains = self.write();
        debug_log!(
            "committing {} routes (replacing {})",
            next.len(),
            chains.routes.len()
        );
        chains.prev_routes = std::mem::replace(&mut chains.routes, next);
    }

    fn read(&self) -> RwLockReadGuard<'_, Chains> {
        self.chains.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Chains> {
        self.chains.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// URL of the leaf of `routes`
///
/// A leaf that consumed nothing below the root reports `/`.
pub(crate) fn chain_location(routes: &[ActivatedRoute]) -> Option<String> {
    routes.last().map(|leaf| {
        let value = leaf.value();
        if value.starts_with('/') {
            value.to_string()
        } else {
            format!("/{}", value)
        }
    })
}
