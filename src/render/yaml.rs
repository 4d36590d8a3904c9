//! YAML rendering.

use serde_json::{Map, Value};

use super::{scalar, Renderer};
use crate::error::RenderResult;

/// Renders the tree as block-style YAML.
///
/// Mappings become `key:` followed by an indented block, lists become
/// `key:` followed by `- ` sequence items (item maps sit under a bare
/// `-` marker), and scalars render inline as `key: value`. Strings are
/// never quoted, so values containing YAML syntax pass through verbatim
/// and will not re-parse cleanly. Same verbatim-insertion behavior as the
/// XML renderer.
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, tree: &Map<String, Value>) -> RenderResult<String> {
        Ok(build_yaml(tree, ""))
    }
}

fn build_yaml(tree: &Map<String, Value>, indent: &str) -> String {
    let entries: Vec<String> = tree
        .iter()
        .map(|(key, value)| match value {
            Value::Object(child) => {
                format!("{indent}{key}:\n{}", build_yaml(child, &format!("{indent}  ")))
            }
            Value::Array(items) => {
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(child) => format!(
                            "{indent}  -\n{}",
                            build_yaml(child, &format!("{indent}    "))
                        ),
                        other => format!("{indent}  - {}", scalar(other)),
                    })
                    .collect();
                format!("{indent}{key}:\n{}", rendered.join("\n"))
            }
            other => format!("{indent}{key}: {}", scalar(other)),
        })
        .collect();

    entries.join("\n")
}
