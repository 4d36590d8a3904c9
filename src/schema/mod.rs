//! Schema document model.
//!
//! The schema declares how raw positional fields map into named, typed
//! and nested output structures: one [`RecordType`] per discriminator
//! value, each with an ordered list of [`FieldMapping`]s, a target
//! container, and an optional root wrapper around the whole output.
//!
//! Parsing is structural only. Unknown extra fields in the document are
//! ignored and no semantic validation happens here; a mapping that
//! references a position the input never has simply reads as an empty
//! string during normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::SchemaResult;

/// A complete schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Declared target format. Informational: the format actually rendered
    /// is a separate runtime input that merely defaults to this value.
    pub output_format: String,

    /// Intended top-level container names. Documentation of shape only,
    /// not enforced.
    pub structure: Vec<String>,

    /// Optional outermost wrapper around the whole normalized output.
    pub root: Option<RootConfig>,

    /// Record-type definitions keyed by discriminator, the value expected
    /// in field position 0 of a line.
    pub record_types: HashMap<String, RecordType>,
}

/// Root wrapper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Name of the wrapping element.
    pub element: String,

    /// true: the wrapped content is presented as a one-element list.
    #[serde(default)]
    pub is_array: bool,
}

/// How lines of one record type are normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordType {
    /// Human-readable record kind, e.g. "header" or "detail".
    pub r#type: String,

    /// Output key the normalized objects of this type are stored under.
    pub container: String,

    /// Accepted for document compatibility; not consumed by any stage.
    pub item_tag: Option<String>,

    /// true: records of this type accumulate into a list. false: only the
    /// most recently processed record is kept.
    #[serde(default)]
    pub is_array: bool,

    /// Field mappings in output order.
    pub fields: Vec<FieldMapping>,
}

/// One output field of a record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Output key name.
    pub key: String,

    /// Zero-based source field position within the line.
    pub position: usize,

    /// Optional transform rule name, see [`crate::transform`].
    pub transform: Option<String>,
}

impl Schema {
    /// Parse a schema from a JSON document.
    pub fn from_json(document: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and parse a schema from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SchemaResult<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Serialize to a pretty JSON document.
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A sample schema for documentation and the CLI: an `H` header line
/// feeding a singleton container and `D` detail lines accumulating into
/// an array container.
pub fn example_schema() -> Schema {
    let mut record_types = HashMap::new();

    record_types.insert(
        "H".to_string(),
        RecordType {
            r#type: "header".to_string(),
            container: "header".to_string(),
            item_tag: None,
            is_array: false,
            fields: vec![
                FieldMapping {
                    key: "name".to_string(),
                    position: 1,
                    transform: None,
                },
                FieldMapping {
                    key: "year".to_string(),
                    position: 2,
                    transform: Some("int".to_string()),
                },
            ],
        },
    );

    record_types.insert(
        "D".to_string(),
        RecordType {
            r#type: "detail".to_string(),
            container: "items".to_string(),
            item_tag: Some("item".to_string()),
            is_array: true,
            fields: vec![
                FieldMapping {
                    key: "name".to_string(),
                    position: 1,
                    transform: None,
                },
                FieldMapping {
                    key: "qty".to_string(),
                    position: 2,
                    transform: Some("int".to_string()),
                },
                FieldMapping {
                    key: "price".to_string(),
                    position: 3,
                    transform: Some("float".to_string()),
                },
            ],
        },
    );

    Schema {
        output_format: "json".to_string(),
        structure: vec!["header".to_string(), "items".to_string()],
        root: None,
        record_types,
    }
}
