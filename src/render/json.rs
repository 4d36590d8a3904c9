//! JSON rendering.

use serde_json::{Map, Value};

use super::Renderer;
use crate::error::RenderResult;

/// Renders the tree as compact JSON.
///
/// The only renderer whose output round-trips: parsing it back yields a
/// structurally equivalent tree with scalar types preserved.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, tree: &Map<String, Value>) -> RenderResult<String> {
        Ok(serde_json::to_string(tree)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> String {
        let tree = match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        };
        JsonRenderer.render(&tree).unwrap()
    }

    #[test]
    fn test_compact_output() {
        let output = render(json!({
            "header": {"name": "Acme", "year": 2024},
            "items": [
                {"name": "Widget", "qty": 10, "price": 2.5},
                {"name": "Gadget", "qty": 3, "price": 9.0}
            ]
        }));

        assert_eq!(
            output,
            r#"{"header":{"name":"Acme","year":2024},"items":[{"name":"Widget","qty":10,"price":2.5},{"name":"Gadget","qty":3,"price":9.0}]}"#
        );
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let original = json!({
            "header": {"name": "Acme", "year": 2024},
            "flag": true,
            "nothing": null,
            "items": [{"price": 2.5}]
        });

        let output = render(original.clone());
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_strings_are_escaped() {
        let output = render(json!({"note": "a \"quoted\" value"}));
        assert_eq!(output, r#"{"note":"a \"quoted\" value"}"#);
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(render(json!({})), "{}");
    }
}
