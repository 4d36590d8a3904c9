//! Schema-driven normalization engine.
//!
//! Consumes the splitter's [`FieldRecord`] plus a [`Schema`] and builds
//! the nested output tree: for every line, the field-0 discriminator
//! selects a record type, the type's field mappings produce a transformed
//! object, and the object lands in its container — appended for array
//! containers, overwriting for singleton containers.
//!
//! Anomalies never raise here. Lines with an unknown discriminator are
//! skipped, out-of-range field positions read as an empty string, and a
//! repeated singleton simply wins over its predecessor.

use serde_json::{Map, Value};
use tracing::debug;

use crate::schema::{RecordType, Schema};
use crate::splitter::FieldRecord;
use crate::transform::apply_transform;

/// Build the nested output tree for `record` according to `schema`.
///
/// Lines are processed in ascending index order. If the schema declares a
/// root wrapper, the whole accumulated output is wrapped under the root
/// element, as a one-element list when the root's array flag is set.
pub fn normalize(record: &FieldRecord, schema: &Schema) -> Map<String, Value> {
    let mut output = Map::new();

    for (index, fields) in record {
        if fields.is_empty() {
            continue;
        }

        let discriminator = fields[0].as_str();
        let Some(record_type) = schema.record_types.get(discriminator) else {
            debug!(line = index, discriminator, "no record type for line, skipping");
            continue;
        };

        let obj = build_object(fields, record_type);
        store(&mut output, record_type, obj);
    }

    match &schema.root {
        Some(root) => {
            let inner = Value::Object(output);
            let wrapped = if root.is_array {
                Value::Array(vec![inner])
            } else {
                inner
            };
            let mut tree = Map::new();
            tree.insert(root.element.clone(), wrapped);
            tree
        }
        None => output,
    }
}

/// Build the transformed object for one line.
///
/// Positions beyond the end of the line read as an empty string, so a
/// short line never fails; the transform sees `""` and degrades per its
/// own rules.
fn build_object(fields: &[String], record_type: &RecordType) -> Map<String, Value> {
    let mut obj = Map::new();

    for mapping in &record_type.fields {
        let raw = fields
            .get(mapping.position)
            .map(String::as_str)
            .unwrap_or("");
        obj.insert(
            mapping.key.clone(),
            apply_transform(raw, mapping.transform.as_deref()),
        );
    }

    obj
}

/// Place a normalized object into its container.
///
/// Array containers get-or-create a list and append. Singleton containers
/// overwrite: a one-field object stores its bare field value, a
/// multi-field object is stored whole, and an empty object contributes
/// nothing.
fn store(output: &mut Map<String, Value>, record_type: &RecordType, obj: Map<String, Value>) {
    if record_type.is_array {
        let entry = output
            .entry(record_type.container.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(items) => items.push(Value::Object(obj)),
            // Container name collision with a singleton: start a fresh list.
            other => *other = Value::Array(vec![Value::Object(obj)]),
        }
        return;
    }

    let value = match obj.len() {
        0 => return,
        1 => match obj.into_iter().next() {
            Some((_, value)) => value,
            None => return,
        },
        _ => Value::Object(obj),
    };
    output.insert(record_type.container.clone(), value);
}
