//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant aborts the whole generation run; no partial output is
/// produced.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema document parsing error, including unrecognized field kinds.
    #[error("schema parse error: {0}")]
    Parse(#[from] pbtypegen_schema::ParseError),

    /// Schema resolution error, such as a dangling relation.
    #[error("schema error: {0}")]
    Schema(#[from] pbtypegen_schema::SchemaError),
}

impl CodegenError {
    /// Returns the offending kind if this is an unrecognized field kind error.
    #[must_use]
    pub fn unrecognized_field_kind(&self) -> Option<&str> {
        match self {
            Self::Parse(pbtypegen_schema::ParseError::UnrecognizedFieldKind { kind, .. }) => {
                Some(kind.as_str())
            }
            _ => None,
        }
    }

    /// Returns the missing collection id if this is an unresolved relation error.
    #[must_use]
    pub fn unresolved_relation_target(&self) -> Option<&str> {
        match self {
            Self::Schema(pbtypegen_schema::SchemaError::UnresolvedRelationTarget {
                collection_id,
            }) => Some(collection_id.as_str()),
            _ => None,
        }
    }
}
