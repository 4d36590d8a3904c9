//! XML rendering.

use serde_json::{Map, Value};

use super::{scalar, Renderer};
use crate::error::RenderResult;

/// Renders the tree as indented XML: one element per key, recursively.
///
/// A list value under key `k` repeats `<k>...</k>` once per item with no
/// enclosing wrapper element. Indentation is two spaces per level. There
/// is no XML declaration, no attributes, and no escaping: text content is
/// inserted verbatim, so values containing markup characters will not
/// re-parse. Callers that need well-formed XML must keep such characters
/// out of their data.
pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn render(&self, tree: &Map<String, Value>) -> RenderResult<String> {
        Ok(build_xml(tree, ""))
    }
}

fn build_xml(tree: &Map<String, Value>, indent: &str) -> String {
    let entries: Vec<String> = tree
        .iter()
        .map(|(key, value)| match value {
            Value::Object(child) => element(key, child, indent),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Object(child) => element(key, child, indent),
                    other => leaf(key, other, indent),
                })
                .collect::<Vec<String>>()
                .join("\n"),
            other => leaf(key, other, indent),
        })
        .collect();

    entries.join("\n")
}

fn element(key: &str, child: &Map<String, Value>, indent: &str) -> String {
    let inner = build_xml(child, &format!("{indent}  "));
    format!("{indent}<{key}>\n{inner}\n{indent}</{key}>")
}

fn leaf(key: &str, value: &Value, indent: &str) -> String {
    format!("{indent}<{key}>{}</{key}>", scalar(value))
}
