//! Rendering layer: a format-name registry over per-format renderers.
//!
//! Each renderer walks the same normalized tree — maps, lists and scalars
//! — and serializes it with its own structural conventions. The registry
//! is the only lookup point: it is populated once at start-up (see
//! [`RendererRegistry::with_defaults`]) and read-only afterwards.

mod json;
mod xml;
mod yaml;

pub use json::JsonRenderer;
pub use xml::XmlRenderer;
pub use yaml::YamlRenderer;

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{RenderError, RenderResult};

/// Serializes a normalized tree into one output format.
///
/// Implementations are stateless: they own no data and transform the
/// tree into text on each call.
pub trait Renderer: Send + Sync {
    fn render(&self, tree: &Map<String, Value>) -> RenderResult<String>;
}

/// Maps lower-cased format names to renderers.
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// A registry with the built-in json, xml and yaml renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("json", Box::new(JsonRenderer));
        registry.register("xml", Box::new(XmlRenderer));
        registry.register("yaml", Box::new(YamlRenderer));
        registry
    }

    /// Store a renderer under the lower-cased format name, overwriting
    /// any previous registration for that name.
    pub fn register(&mut self, format: &str, renderer: Box<dyn Renderer>) {
        self.renderers.insert(format.to_lowercase(), renderer);
    }

    /// Render `tree` with the renderer registered for `format`.
    ///
    /// Lookup is case-insensitive; an unregistered format is a hard
    /// failure naming the requested format, never a fallback.
    pub fn render(&self, format: &str, tree: &Map<String, Value>) -> RenderResult<String> {
        match self.renderers.get(&format.to_lowercase()) {
            Some(renderer) => renderer.render(tree),
            None => Err(RenderError::UnknownFormat(format.to_string())),
        }
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Text form of a scalar leaf, shared by the XML and YAML renderers.
///
/// Values are inserted verbatim: no escaping or quoting. A non-scalar
/// that reaches a leaf position falls back to its JSON string form.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = RendererRegistry::with_defaults();
        let tree = tree(json!({"key": "value"}));

        assert!(registry.render("JSON", &tree).is_ok());
        assert!(registry.render("Xml", &tree).is_ok());
        assert!(registry.render("yaml", &tree).is_ok());
    }

    #[test]
    fn test_unregistered_format_fails_naming_it() {
        let registry = RendererRegistry::with_defaults();
        let err = registry.render("csv", &Map::new()).unwrap_err();

        match err {
            RenderError::UnknownFormat(name) => assert_eq!(name, "csv"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_registration_overwrites() {
        struct Fixed(&'static str);
        impl Renderer for Fixed {
            fn render(&self, _tree: &Map<String, Value>) -> crate::error::RenderResult<String> {
                Ok(self.0.to_string())
            }
        }

        let mut registry = RendererRegistry::new();
        registry.register("out", Box::new(Fixed("first")));
        registry.register("OUT", Box::new(Fixed("second")));

        assert_eq!(registry.render("out", &Map::new()).unwrap(), "second");
        assert_eq!(registry.formats(), vec!["out"]);
    }

    #[test]
    fn test_default_formats() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(registry.formats(), vec!["json", "xml", "yaml"]);
    }

    #[test]
    fn test_scalar_text_forms() {
        assert_eq!(scalar(&json!("plain")), "plain");
        assert_eq!(scalar(&json!(2024)), "2024");
        assert_eq!(scalar(&json!(2.5)), "2.5");
        assert_eq!(scalar(&json!(true)), "true");
        assert_eq!(scalar(&Value::Null), "null");
    }
}
