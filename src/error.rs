//! Error types for the flatcast conversion pipeline.
//!
//! This module defines one error type per pipeline concern:
//!
//! - [`SchemaError`] - schema document errors
//! - [`RenderError`] - renderer lookup and serialization errors
//! - [`ConvertError`] - top-level pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Only schema and render problems are errors at all: blank lines,
//! unknown record-type discriminators, short lines and unparseable
//! numeric transforms are absorbed by the pipeline and never raise.

use thiserror::Error;

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while reading or parsing a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the document from disk.
    #[error("Failed to read schema document: {0}")]
    Io(#[from] std::io::Error),

    /// Document is structurally invalid or missing required fields.
    #[error("Invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors while rendering a normalized tree.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Requested output format has no registered renderer.
    #[error("Renderer for '{0}' not found")]
    UnknownFormat(String),

    /// Serializing the normalized tree failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by [`crate::pipeline::convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Schema document error.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The caller-supplied delimiter pattern does not compile.
    #[error("Invalid delimiter pattern: {0}")]
    Delimiter(#[from] regex::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for pipeline operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
