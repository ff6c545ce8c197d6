//! Fixed declarations emitted once per generated module.

/// Alias for timestamps serialized as text.
pub const DATE_STRING_TYPE_NAME: &str = "IsoDateString";

/// Alias for record identifiers.
pub const RECORD_ID_STRING_NAME: &str = "RecordIdString";

/// System fields type for base collections.
pub const BASE_SYSTEM_FIELDS_NAME: &str = "BaseSystemFields";

/// System fields type for auth collections.
pub const AUTH_SYSTEM_FIELDS_NAME: &str = "AuthSystemFields";

/// Header marking the output as generated.
pub const EXPORT_COMMENT: &str = "/**
* This file was @generated using pbtypegen
*/";

/// Comment placed before the record types.
pub const RECORD_TYPE_COMMENT: &str = "// Record types for each collection";

/// Comment placed before the response types.
pub const RESPONSE_TYPE_COMMENT: &str =
    "// Response types include system fields and match responses from the PocketBase API";

/// Alias declarations.
pub const ALIAS_TYPE_DEFINITIONS: &str = "// Alias types for improved usability
export type IsoDateString = string
export type RecordIdString = string";

/// System fields shared by every record.
pub const BASE_SYSTEM_FIELDS_DEFINITION: &str = "// System fields
export type BaseSystemFields = {
\tid: RecordIdString
\tcreated: IsoDateString
\tupdated: IsoDateString
\tcollectionId: string
\tcollectionName: Collections
\texpand?: { [key: string]: any }
}";

/// System fields of auth records.
pub const AUTH_SYSTEM_FIELDS_DEFINITION: &str = "export type AuthSystemFields = {
\temail: string
\temailVisibility: boolean
\tusername: string
\tverified: boolean
} & BaseSystemFields";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_match_names() {
        assert!(ALIAS_TYPE_DEFINITIONS.contains(&format!("type {DATE_STRING_TYPE_NAME} =")));
        assert!(ALIAS_TYPE_DEFINITIONS.contains(&format!("type {RECORD_ID_STRING_NAME} =")));
        assert!(BASE_SYSTEM_FIELDS_DEFINITION.contains(BASE_SYSTEM_FIELDS_NAME));
        assert!(AUTH_SYSTEM_FIELDS_DEFINITION.starts_with(&format!(
            "export type {AUTH_SYSTEM_FIELDS_NAME} ="
        )));
    }
}
