//! Route definitions from JSON
//!
//! Route trees can be declared as data. Callables cannot live in JSON, so
//! hook slots, `loadChildren`, `getData` and `willResolve` hold names that
//! are looked up in a [`HookRegistry`]:
//!
//! ```json
//! {
//!   "path": "admin",
//!   "canActivate": "requireLogin",
//!   "children": [{ "path": "", "match": "full", "data": { "title": "Admin" } }]
//! }
//! ```
//!
//! Every validation error names the offending field.

use crate::activated::ActivatedRoute;
use crate::context::RouteContext;
use crate::error::ConfigError;
use crate::lifecycle::{
    loader_fn, resolver_fn, BoxedHook, ChildrenLoader, HookFuture, HookKind, Resolver, RouteHook,
};
use crate::navigation::Navigation;
use crate::route::{DataFn, MatchMode, RouteChildren, RouteConfig, RouteData};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Named callables referenced from route definitions
///
/// # Example
///
/// ```
/// use little_navigator::{hook_fn, HookRegistry, Outcome, RouteConfig};
/// use serde_json::json;
///
/// let registry = HookRegistry::new()
///     .hook("deny", hook_fn(|_, _| async { Outcome::Block }))
///     .loader("adminChildren", || async { Ok(vec![RouteConfig::new("users")]) });
///
/// let config = RouteConfig::from_json(
///     &json!({ "path": "admin", "canActivate": "deny", "loadChildren": "adminChildren" }),
///     &registry,
/// )
/// .unwrap();
/// assert!(config.can_activate.is_some());
/// assert!(config.is_lazy());
/// ```
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, BoxedHook>,
    loaders: HashMap<String, ChildrenLoader>,
    producers: HashMap<String, DataFn>,
    resolvers: HashMap<String, Resolver>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lifecycle hook
    pub fn hook<H>(mut self, name: impl Into<String>, hook: H) -> Self
    where
        H: RouteHook<Future = HookFuture>,
    {
        self.hooks.insert(name.into(), Arc::new(hook));
        self
    }

    /// Register a children loader
    pub fn loader<F, Fut>(mut self, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<RouteConfig>, String>> + Send + 'static,
    {
        self.loaders.insert(name.into(), loader_fn(loader));
        self
    }

    /// Register a `getData` producer
    pub fn data_fn<F>(mut self, name: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&RouteContext) -> Value + Send + Sync + 'static,
    {
        self.producers.insert(name.into(), Arc::new(producer));
        self
    }

    /// Register a `willResolve` resolver
    pub fn resolver<F, Fut>(mut self, name: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(&ActivatedRoute, &Navigation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<Value>, String>> + Send + 'static,
    {
        self.resolvers.insert(name.into(), resolver_fn(resolver));
        self
    }

    fn lookup<T: Clone>(
        table: &HashMap<String, T>,
        field: &'static str,
        kind: &'static str,
        value: &Value,
    ) -> Result<T, ConfigError> {
        let name = value.as_str().ok_or(ConfigError::InvalidField {
            field,
            expected: "a registered name",
        })?;
        table
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownReference {
                field,
                kind,
                name: name.to_string(),
            })
    }
}

impl RouteConfig {
    /// Build a route config, with its children, from a JSON definition
    ///
    /// # Errors
    /// * `ConfigError::MissingField` if `path` is absent
    /// * `ConfigError::InvalidField` if a field has the wrong type
    /// * `ConfigError::UnknownReference` if a name is not registered
    /// * `ConfigError::InvalidPath` if the path pattern is malformed
    pub fn from_json(value: &Value, registry: &HookRegistry) -> Result<RouteConfig, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::InvalidField {
            field: "route",
            expected: "an object",
        })?;

        let path = match object.get("path") {
            None | Some(Value::Null) => return Err(ConfigError::MissingField { field: "path" }),
            Some(Value::String(path)) => path,
            Some(_) => {
                return Err(ConfigError::InvalidField {
                    field: "path",
                    expected: "a string",
                })
            }
        };
        let mut config = RouteConfig::try_new(path.as_str())?;

        if let Some(mode) = object.get("match") {
            config.match_mode =
                serde_json::from_value::<MatchMode>(mode.clone()).map_err(|_| {
                    ConfigError::InvalidField {
                        field: "match",
                        expected: "\"partial\" or \"full\"",
                    }
                })?;
        }

        config.children = children(object, registry)?;

        for kind in HookKind::ALL {
            if let Some(name) = object.get(kind.field()) {
                let hook = HookRegistry::lookup(&registry.hooks, kind.field(), "hook", name)?;
                config = config.hook(kind, hook);
            }
        }

        if let Some(producer) = object.get("getData") {
            let producer = HookRegistry::lookup(&registry.producers, "getData", "data producer", producer)?;
            config.data = Some(RouteData::Derived(producer));
        } else if let Some(data) = object.get("data") {
            config.data = Some(RouteData::Static(data.clone()));
        }

        if let Some(resolver) = object.get("willResolve") {
            config.will_resolve = Some(HookRegistry::lookup(
                &registry.resolvers,
                "willResolve",
                "resolver",
                resolver,
            )?);
        }

        config.redirect_to = optional_string(object, "redirectTo")?;
        config.outlet = optional_string(object, "outlet")?;

        if let Some(animate) = object.get("animate") {
            config.animate = animate.as_bool().ok_or(ConfigError::InvalidField {
                field: "animate",
                expected: "a boolean",
            })?;
        }

        if let Some(context) = object.get("context") {
            let values = context.as_object().ok_or(ConfigError::InvalidField {
                field: "context",
                expected: "an object",
            })?;
            config.context = RouteContext::from(values.clone());
        }

        if let Some(meta) = object.get("meta") {
            config.meta = serde_json::from_value::<HashMap<String, String>>(meta.clone()).map_err(
                |_| ConfigError::InvalidField {
                    field: "meta",
                    expected: "an object of strings",
                },
            )?;
        }

        Ok(config)
    }

    /// Build a list of route configs from a JSON array
    pub fn list_from_json(
        value: &Value,
        registry: &HookRegistry,
    ) -> Result<Vec<RouteConfig>, ConfigError> {
        value
            .as_array()
            .ok_or(ConfigError::InvalidField {
                field: "children",
                expected: "an array",
            })?
            .iter()
            .map(|child| RouteConfig::from_json(child, registry))
            .collect()
    }
}

fn children(object: &Map<String, Value>, registry: &HookRegistry) -> Result<RouteChildren, ConfigError> {
    if let Some(loader) = object.get("loadChildren") {
        let loader = HookRegistry::lookup(&registry.loaders, "loadChildren", "loader", loader)?;
        return Ok(RouteChildren::Lazy(loader));
    }

    match object.get("children") {
        Some(children) => Ok(RouteChildren::Static(RouteConfig::list_from_json(
            children, registry,
        )?)),
        None => Ok(RouteChildren::None),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ConfigError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ConfigError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{hook_fn, Outcome};
    use serde_json::json;

    fn registry() -> HookRegistry {
        HookRegistry::new()
            .hook("allow", hook_fn(|_, _| async { Outcome::Proceed }))
            .data_fn("greeting", |cx| json!(cx.get_as::<String>("name")))
    }

    #[test]
    fn test_full_definition() {
        let config = RouteConfig::from_json(
            &json!({
                "path": "",
                "context": { "name": "ada" },
                "children": [
                    { "path": "a/b/c", "data": { "msg": "hello" }, "children": [{ "path": "d" }] },
                    { "path": "e", "match": "full", "getData": "greeting", "canActivate": "allow" },
                    { "path": "f", "redirectTo": "/e", "outlet": "modal", "animate": true,
                      "meta": { "title": "F" } }
                ]
            }),
            &registry(),
        )
        .unwrap();

        let RouteChildren::Static(children) = &config.children else {
            panic!("expected static children");
        };
        let paths: Vec<_> = children.iter().map(|c| c.path()).collect();
        assert_eq!(paths, ["a/b/c", "e", "f"]);
        assert_eq!(children[1].match_mode, MatchMode::Full);
        assert!(children[1].can_activate.is_some());
        assert_eq!(children[2].redirect_to.as_deref(), Some("/e"));
        assert_eq!(children[2].outlet.as_deref(), Some("modal"));
        assert!(children[2].animate);
        assert_eq!(children[2].meta.get("title").map(String::as_str), Some("F"));
        assert_eq!(config.context.get("name"), Some(&json!("ada")));
    }

    #[test]
    fn test_missing_path() {
        let error = RouteConfig::from_json(&json!({ "children": [] }), &registry()).unwrap_err();
        assert_eq!(error, ConfigError::MissingField { field: "path" });
        assert!(error.to_string().contains("`path`"));
    }

    #[test]
    fn test_non_string_path() {
        let error = RouteConfig::from_json(&json!({ "path": 3 }), &registry()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidField { field: "path", .. }));
    }

    #[test]
    fn test_non_function_hook() {
        let error =
            RouteConfig::from_json(&json!({ "path": "a", "willActivate": 1 }), &registry()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidField { field: "willActivate", .. }));
        assert!(error.to_string().contains("`willActivate`"));
    }

    #[test]
    fn test_unknown_hook() {
        let error = RouteConfig::from_json(
            &json!({ "path": "a", "canDeactivate": "nope" }),
            &registry(),
        )
        .unwrap_err();
        assert_eq!(
            error,
            ConfigError::UnknownReference {
                field: "canDeactivate",
                kind: "hook",
                name: "nope".to_string(),
            }
        );
    }

    #[test]
    fn test_nested_error_surfaces() {
        let error = RouteConfig::from_json(
            &json!({ "path": "", "children": [{ "path": "ok" }, { "outlet": "x" }] }),
            &registry(),
        )
        .unwrap_err();
        assert_eq!(error, ConfigError::MissingField { field: "path" });
    }

    #[test]
    fn test_bad_match_mode_and_path() {
        let error =
            RouteConfig::from_json(&json!({ "path": "a", "match": "prefix" }), &registry()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidField { field: "match", .. }));

        let error = RouteConfig::from_json(&json!({ "path": "a//b" }), &registry()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn test_unknown_loader() {
        let error = RouteConfig::from_json(
            &json!({ "path": "a", "loadChildren": "missing" }),
            &registry(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            ConfigError::UnknownReference { field: "loadChildren", .. }
        ));
    }
}
