//! Error types for entity conversion.

use openleg_model::{ElementKind, EntityKind, FieldType};
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Classified conversion failures. Any of them aborts the whole
/// conversion; no partial tree is ever returned.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A field's declared type has no encoding strategy and the active
    /// exclusion policy did not exclude it.
    #[error("unsupported field type {field_type} for {entity}.{field}")]
    UnsupportedFieldType {
        entity: EntityKind,
        field: &'static str,
        field_type: FieldType,
    },

    /// A list element matched no encoder registered for the declaring field.
    #[error("unrecognized list element type {element} at index {index} of {entity}.{field}")]
    UnrecognizedListElementType {
        entity: EntityKind,
        field: &'static str,
        element: ElementKind,
        index: usize,
    },

    /// A null root was passed without the expected type, so the envelope
    /// key cannot be determined.
    #[error("null root entity with no expected type")]
    NullRootWithoutExpectedType,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
