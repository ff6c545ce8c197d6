//! Error types for schema parsing and resolution.

use thiserror::Error;

/// Error type for schema document parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax or shape error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Field kind outside the supported set.
    #[error("unknown type '{kind}' found in schema for field '{field}'")]
    UnrecognizedFieldKind {
        /// The offending kind.
        kind: String,
        /// Field name.
        field: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for resolving references across collections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A relation points at a collection id that is not part of the set.
    #[error("could not find collection with id '{collection_id}'")]
    UnresolvedRelationTarget {
        /// The missing collection id.
        collection_id: String,
    },
}

impl ParseError {
    /// Creates an unrecognized field kind error.
    pub fn field_kind(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnrecognizedFieldKind {
            kind: kind.into(),
            field: field.into(),
        }
    }
}

impl SchemaError {
    /// Creates an unresolved relation target error.
    pub fn unresolved(collection_id: impl Into<String>) -> Self {
        Self::UnresolvedRelationTarget {
            collection_id: collection_id.into(),
        }
    }
}
