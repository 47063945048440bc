//! Router configuration

use crate::error::ConfigError;
use crate::history::MemoryHistory;
use serde::{Deserialize, Serialize};

/// Settings of a [`Router`](crate::Router)
///
/// # Example
///
/// ```
/// use little_navigator::RouterConfig;
///
/// let config: RouterConfig = serde_json::from_str(r#"{ "queue_capacity": 8 }"#).unwrap();
/// assert_eq!(config.queue_capacity, 8);
/// assert_eq!(config.initial_path, "/");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Navigations that may wait behind the one in flight (default: 32)
    pub queue_capacity: usize,

    /// Entry limit of the built-in memory history, 0 = unlimited (default: 1000)
    pub history_limit: usize,

    /// Starting URL when no history adapter is supplied (default: `/`)
    pub initial_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 32,
            history_limit: MemoryHistory::DEFAULT_MAX_SIZE,
            initial_path: "/".to_string(),
        }
    }
}

impl RouterConfig {
    /// Validate the configuration
    ///
    /// # Errors
    /// * `ConfigError::Router` if a value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Router {
                message: "queue_capacity must be > 0".to_string(),
            });
        }
        if !self.initial_path.starts_with('/') {
            return Err(ConfigError::Router {
                message: format!("initial_path '{}' must start with '/'", self.initial_path),
            });
        }
        Ok(())
    }
}
