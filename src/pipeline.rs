//! High-level conversion pipeline.
//!
//! Composes the four stages — schema parsing, line splitting,
//! normalization, rendering — into a single pure call: a deterministic
//! function of (raw lines, schema document, format name) to output text
//! or error. Nothing here suspends, blocks on I/O, or shares mutable
//! state; the registry is the caller's and is only read.

use tracing::debug;

use crate::error::ConvertResult;
use crate::normalize::normalize;
use crate::render::RendererRegistry;
use crate::schema::Schema;
use crate::splitter::LineSplitter;

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Delimiter pattern override. Default: a single pipe character.
    pub delimiter: Option<String>,

    /// Output format override. Default: the schema's declared
    /// `outputFormat`.
    pub format: Option<String>,
}

/// Outcome of a conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rendered output text.
    pub output: String,

    /// Format that was rendered.
    pub format: String,

    /// Number of non-blank input lines.
    pub line_count: usize,

    /// Number of top-level containers in the normalized tree.
    pub container_count: usize,
}

/// Convert raw `lines` according to `schema_document`, rendering with a
/// renderer from `registry`.
///
/// Schema and render errors propagate; everything else (blank lines,
/// unknown discriminators, short lines, unparseable numeric transforms)
/// is absorbed by the stages per their own contracts.
pub fn convert<I>(
    lines: I,
    schema_document: &str,
    registry: &RendererRegistry,
    options: &ConvertOptions,
) -> ConvertResult<Conversion>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let schema = Schema::from_json(schema_document)?;
    debug!(
        record_types = schema.record_types.len(),
        declared_format = %schema.output_format,
        "schema parsed"
    );

    let splitter = match &options.delimiter {
        Some(pattern) => LineSplitter::new(pattern)?,
        None => LineSplitter::default(),
    };
    let record = splitter.split_lines(lines);
    debug!(lines = record.len(), "input split");

    let tree = normalize(&record, &schema);
    debug!(containers = tree.len(), "normalized");

    let format = options
        .format
        .clone()
        .unwrap_or_else(|| schema.output_format.clone());
    let output = registry.render(&format, &tree)?;
    debug!(format = %format, bytes = output.len(), "rendered");

    Ok(Conversion {
        output,
        format,
        line_count: record.len(),
        container_count: tree.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    const SCHEMA: &str = r#"{
        "outputFormat": "json",
        "structure": ["header", "items"],
        "recordTypes": {
            "H": {
                "type": "header",
                "container": "header",
                "fields": [
                    {"key": "name", "position": 1},
                    {"key": "year", "position": 2, "transform": "int"}
                ]
            },
            "D": {
                "type": "detail",
                "container": "items",
                "isArray": true,
                "fields": [
                    {"key": "name", "position": 1},
                    {"key": "qty", "position": 2, "transform": "int"},
                    {"key": "price", "position": 3, "transform": "float"}
                ]
            }
        }
    }"#;

    const LINES: [&str; 3] = ["H|Acme|2024", "D|Widget|10|2.5", "D|Gadget|3|9.0"];

    #[test]
    fn test_convert_to_json() {
        let registry = RendererRegistry::with_defaults();
        let result = convert(LINES, SCHEMA, &registry, &ConvertOptions::default()).unwrap();

        assert_eq!(result.format, "json");
        assert_eq!(result.line_count, 3);
        assert_eq!(result.container_count, 2);
        assert_eq!(
            result.output,
            r#"{"header":{"name":"Acme","year":2024},"items":[{"name":"Widget","qty":10,"price":2.5},{"name":"Gadget","qty":3,"price":9.0}]}"#
        );
    }

    #[test]
    fn test_format_override_beats_declared_format() {
        let registry = RendererRegistry::with_defaults();
        let options = ConvertOptions {
            delimiter: None,
            format: Some("yaml".to_string()),
        };
        let result = convert(LINES, SCHEMA, &registry, &options).unwrap();

        assert_eq!(result.format, "yaml");
        assert!(result.output.starts_with("header:\n  name: Acme"));
    }

    #[test]
    fn test_custom_delimiter() {
        let registry = RendererRegistry::with_defaults();
        let options = ConvertOptions {
            delimiter: Some(";".to_string()),
            format: None,
        };
        let result = convert(["H;Acme;2024"], SCHEMA, &registry, &options).unwrap();

        assert_eq!(
            result.output,
            r#"{"header":{"name":"Acme","year":2024}}"#
        );
    }

    #[test]
    fn test_invalid_schema_propagates() {
        let registry = RendererRegistry::with_defaults();
        let err = convert(LINES, "{}", &registry, &ConvertOptions::default()).unwrap_err();

        assert!(matches!(err, ConvertError::Schema(_)));
    }

    #[test]
    fn test_unknown_format_propagates() {
        let registry = RendererRegistry::with_defaults();
        let options = ConvertOptions {
            delimiter: None,
            format: Some("csv".to_string()),
        };
        let err = convert(LINES, SCHEMA, &registry, &options).unwrap_err();

        assert!(err.to_string().contains("csv"));
    }

    #[test]
    fn test_invalid_delimiter_pattern_propagates() {
        let registry = RendererRegistry::with_defaults();
        let options = ConvertOptions {
            delimiter: Some("[".to_string()),
            format: None,
        };
        let err = convert(LINES, SCHEMA, &registry, &options).unwrap_err();

        assert!(matches!(err, ConvertError::Delimiter(_)));
    }

    #[test]
    fn test_blank_input_renders_empty_tree() {
        let registry = RendererRegistry::with_defaults();
        let result = convert(
            ["", "   "],
            SCHEMA,
            &registry,
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(result.output, "{}");
        assert_eq!(result.line_count, 0);
        assert_eq!(result.container_count, 0);
    }
}
