//! # Flatcast - schema-driven flat-file normalization
//!
//! Flatcast converts delimited flat-file records (pipe-separated by
//! default) into structured JSON, XML or YAML, driven entirely by an
//! externally supplied schema document. The schema declares how raw
//! positional fields map into named, typed and nested output structures.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌──────────┐     ┌────────────┐     ┌──────────┐
//! │ Raw lines │────▶│ Splitter │────▶│ Normalizer │────▶│ Renderer │
//! │ (H|Acme|…)│     │ (indexed │     │  (schema-  │     │ (json /  │
//! └───────────┘     │  fields) │     │   driven)  │     │ xml/yaml)│
//!                   └──────────┘     └────────────┘     └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flatcast::{convert, ConvertOptions, RendererRegistry};
//!
//! let registry = RendererRegistry::with_defaults();
//! let schema = std::fs::read_to_string("schema.json")?;
//! let input = std::fs::read_to_string("input.txt")?;
//!
//! let result = convert(input.lines(), &schema, &registry, &ConvertOptions::default())?;
//! println!("{}", result.output);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per pipeline concern
//! - [`splitter`] - Raw lines to indexed field arrays
//! - [`schema`] - Schema document model and parsing
//! - [`transform`] - Per-field value transforms
//! - [`normalize`] - Schema-driven normalization engine
//! - [`render`] - Renderer registry and the three renderers
//! - [`pipeline`] - End-to-end conversion

// Core modules
pub mod error;

// Splitting
pub mod splitter;

// Schema
pub mod schema;

// Normalization
pub mod normalize;
pub mod transform;

// Rendering
pub mod render;

// Pipeline
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, RenderError, SchemaError};

// =============================================================================
// Re-exports - Splitting
// =============================================================================

pub use splitter::{FieldRecord, LineSplitter};

// =============================================================================
// Re-exports - Schema
// =============================================================================

pub use schema::{example_schema, FieldMapping, RecordType, RootConfig, Schema};

// =============================================================================
// Re-exports - Normalization
// =============================================================================

pub use normalize::normalize;
pub use transform::{apply_transform, TransformRule};

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::{JsonRenderer, Renderer, RendererRegistry, XmlRenderer, YamlRenderer};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{convert, Conversion, ConvertOptions};
