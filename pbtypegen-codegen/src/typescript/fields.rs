//! Field type mapping.
//!
//! Maps one field's kind and options to a TypeScript type expression.

use crate::typescript::constants::{DATE_STRING_TYPE_NAME, RECORD_ID_STRING_NAME};
use crate::typescript::generics::param_name;
use crate::typescript::naming::{option_enum_name, sanitize_field_name};
use pbtypegen_schema::types::{Field, FieldKind, allows_many, exactly_one};

/// Returns the type expression for a field of the given collection.
#[must_use]
pub fn field_type(field: &Field, collection_name: &str) -> String {
    match &field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Url => "string".to_string(),
        FieldKind::Number => "number".to_string(),
        FieldKind::Bool => "boolean".to_string(),
        FieldKind::Date => DATE_STRING_TYPE_NAME.to_string(),
        FieldKind::Select { values, max_select } => {
            // Without declared values the domain is unknown at generation time.
            let value_type = if values.is_some() {
                option_enum_name(collection_name, &field.name)
            } else {
                "string".to_string()
            };
            many_if(value_type, allows_many(*max_select))
        }
        FieldKind::Json => format!("null | {}", param_name(&field.name)),
        FieldKind::File { max_select } => many_if("string".to_string(), allows_many(*max_select)),
        FieldKind::Relation { max_select, .. } => {
            many_if(RECORD_ID_STRING_NAME.to_string(), !exactly_one(*max_select))
        }
        FieldKind::User { max_select } => {
            many_if(RECORD_ID_STRING_NAME.to_string(), allows_many(*max_select))
        }
    }
}

/// Renders one record member line.
#[must_use]
pub fn field_member(field: &Field, collection_name: &str) -> String {
    format!(
        "\t{}{}: {}",
        sanitize_field_name(&field.name),
        optional_marker(field),
        field_type(field, collection_name)
    )
}

/// Returns `?` for fields that are not required.
#[must_use]
pub fn optional_marker(field: &Field) -> &'static str {
    if field.required { "" } else { "?" }
}

fn many_if(type_expr: String, many: bool) -> String {
    if many {
        format!("{type_expr}[]")
    } else {
        type_expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(values: Option<&[&str]>, max_select: Option<u32>) -> FieldKind {
        FieldKind::Select {
            values: values.map(|v| v.iter().map(|s| s.to_string()).collect()),
            max_select,
        }
    }

    fn relation(max_select: Option<u32>) -> FieldKind {
        FieldKind::Relation {
            collection_id: "target".to_string(),
            max_select,
        }
    }

    fn map(kind: FieldKind) -> String {
        field_type(&Field::new("field", kind), "posts")
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(map(FieldKind::Text), "string");
        assert_eq!(map(FieldKind::Email), "string");
        assert_eq!(map(FieldKind::Url), "string");
        assert_eq!(map(FieldKind::Number), "number");
        assert_eq!(map(FieldKind::Bool), "boolean");
        assert_eq!(map(FieldKind::Date), "IsoDateString");
    }

    #[test]
    fn test_select_kinds() {
        assert_eq!(map(select(Some(&["a", "b"]), Some(1))), "PostsFieldOptions");
        assert_eq!(map(select(Some(&["a", "b"]), Some(2))), "PostsFieldOptions[]");
        assert_eq!(map(select(None, None)), "string");
        assert_eq!(map(select(None, Some(5))), "string[]");
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(
            field_type(&Field::new("payload", FieldKind::Json), "posts"),
            "null | Tpayload"
        );
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(map(FieldKind::File { max_select: None }), "string");
        assert_eq!(map(FieldKind::File { max_select: Some(1) }), "string");
        assert_eq!(map(FieldKind::File { max_select: Some(3) }), "string[]");
    }

    #[test]
    fn test_relation_cardinality() {
        assert_eq!(map(relation(Some(1))), "RecordIdString");
        assert_eq!(map(relation(None)), "RecordIdString[]");
        assert_eq!(map(relation(Some(0))), "RecordIdString[]");
        assert_eq!(map(relation(Some(4))), "RecordIdString[]");
    }

    #[test]
    fn test_legacy_user_kind() {
        assert_eq!(map(FieldKind::User { max_select: None }), "RecordIdString");
        assert_eq!(map(FieldKind::User { max_select: Some(1) }), "RecordIdString");
        assert_eq!(map(FieldKind::User { max_select: Some(2) }), "RecordIdString[]");
    }

    #[test]
    fn test_field_member() {
        let title = Field::new("title", FieldKind::Text).required();
        assert_eq!(field_member(&title, "posts"), "\ttitle: string");

        let tags = Field::new("tags", select(Some(&["a", "b"]), Some(2)));
        assert_eq!(field_member(&tags, "posts"), "\ttags?: PostsTagsOptions[]");

        let odd = Field::new("1st", FieldKind::Number);
        assert_eq!(field_member(&odd, "posts"), "\t\"1st\"?: number");
    }
}
