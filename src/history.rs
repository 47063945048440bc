//! History adapters
//!
//! The router reads the starting location from a [`HistoryAdapter`], turns
//! back/forward moves into `POP` navigations, and writes committed URLs back
//! into it. [`MemoryHistory`] keeps the stack in memory:
//! - Forward/backward navigation
//! - History truncation on push
//! - Configurable history limit

/// Address-bar collaborator of the router
pub trait HistoryAdapter: Send + 'static {
    /// Current URL
    fn location(&self) -> String;

    /// Add an entry after the current one
    fn push(&mut self, url: &str);

    /// Overwrite the current entry
    fn replace(&mut self, url: &str);

    /// Move back one entry; returns the new URL, or `None` at the start
    fn back(&mut self) -> Option<String>;

    /// Move forward one entry; returns the new URL, or `None` at the end
    fn forward(&mut self) -> Option<String>;
}

/// In-memory history stack
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    current: usize,
    /// Maximum history size (0 = unlimited)
    max_size: usize,
}

impl MemoryHistory {
    /// Default entry limit
    pub const DEFAULT_MAX_SIZE: usize = 1000;

    /// Create a history with one entry
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self::with_max_size(initial_url, Self::DEFAULT_MAX_SIZE)
    }

    /// Create with a custom entry limit (0 = unlimited)
    pub fn with_max_size(initial_url: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![initial_url.into()],
            current: 0,
            max_size,
        }
    }

    /// Check if there is an entry before the current one
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if there is an entry after the current one
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry
    pub fn current_index(&self) -> usize {
        self.current
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
            self.current = self.current.saturating_sub(excess);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryAdapter for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.current].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.current + 1);
        self.entries.push(url.to_string());
        self.current += 1;
        self.enforce_size_limit();
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.current] = url.to_string();
    }

    fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.current -= 1;
        Some(self.location())
    }

    fn forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.current += 1;
        Some(self.location())
    }
}
