//! Route context
//!
//! Each route node carries a context composed once when the node is built:
//! the parent's context with the node's own contribution merged over it.
//! Hooks and data producers read it through the activated route.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value context shared down a route tree
///
/// # Example
///
/// ```
/// use little_navigator::RouteContext;
/// use serde_json::json;
///
/// let parent = RouteContext::from_value(json!({ "message": "Hello", "depth": 0 }));
/// let child = parent.merged(&RouteContext::from_value(json!({ "depth": 1 })));
///
/// assert_eq!(child.get_as::<String>("message").as_deref(), Some("Hello"));
/// assert_eq!(child.get_as::<u32>("depth"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteContext {
    values: Map<String, Value>,
}

impl RouteContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value; anything but an object gives an empty context
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    /// Set a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a raw value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value deserialized as `T`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_value(self.values.get(key)?.clone()).ok()
    }

    /// This context with `own` merged over it; keys in `own` win
    pub fn merged(&self, own: &RouteContext) -> RouteContext {
        let mut values = self.values.clone();
        values.extend(own.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        RouteContext { values }
    }

    /// Check if the context holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// View as a JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for RouteContext {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_overrides_and_keeps() {
        let parent = RouteContext::from_value(json!({ "a": 1, "b": 2 }));
        let own = RouteContext::from_value(json!({ "b": 3, "c": 4 }));
        let merged = parent.merged(&own);

        assert_eq!(merged.get("a"), Some(&json!(1)));
        assert_eq!(merged.get("b"), Some(&json!(3)));
        assert_eq!(merged.get("c"), Some(&json!(4)));
        assert_eq!(parent.len(), 2);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let parent = RouteContext::from_value(json!({ "message": "Hello" }));
        assert_eq!(parent.merged(&RouteContext::new()), parent);
    }

    #[test]
    fn test_non_object_is_empty() {
        assert!(RouteContext::from_value(json!([1, 2])).is_empty());
    }
}
