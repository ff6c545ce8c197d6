//! Module assembly.
//!
//! Ties the individual generators together into one TypeScript module.

use crate::error::CodegenError;
use crate::typescript::constants::{
    ALIAS_TYPE_DEFINITIONS, AUTH_SYSTEM_FIELDS_DEFINITION, BASE_SYSTEM_FIELDS_DEFINITION,
    EXPORT_COMMENT, RECORD_TYPE_COMMENT,
};
use crate::typescript::{EnumGenerator, RecordGenerator, ResponseGenerator};
use pbtypegen_schema::ir::SchemaIr;

/// Separator placed between the top-level parts of the output.
const PART_SEPARATOR: &str = "\n\n";

/// TypeScript module generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the given IR.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the complete TypeScript module.
    ///
    /// The output is a pure function of the IR: the same collections always
    /// produce byte-identical text.
    ///
    /// # Errors
    /// Returns `CodegenError` if a relation target cannot be resolved.
    pub fn generate(&self) -> Result<String, CodegenError> {
        for collection in self.ir.collections.iter().filter(|c| c.schema.is_none()) {
            tracing::warn!(
                "Collection {} declares no schema, listing it without types",
                collection.name
            );
        }

        let records = RecordGenerator::new(self.ir);
        let responses = ResponseGenerator::new(self.ir);

        let mut parts = vec![
            EXPORT_COMMENT.to_string(),
            EnumGenerator::new(self.ir).generate_collections(),
            ALIAS_TYPE_DEFINITIONS.to_string(),
            BASE_SYSTEM_FIELDS_DEFINITION.to_string(),
            AUTH_SYSTEM_FIELDS_DEFINITION.to_string(),
            RECORD_TYPE_COMMENT.to_string(),
        ];
        parts.extend(records.generate());
        parts.push(responses.generate()?);
        parts.push(records.generate_lookup());
        parts.push(responses.generate_lookup());

        tracing::info!(
            "Generated types for {} of {} collections",
            self.ir.schema_collections().count(),
            self.ir.len()
        );

        Ok(parts.join(PART_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbtypegen_schema::types::{Collection, CollectionKind, Field, FieldKind};

    fn create_test_ir() -> SchemaIr {
        SchemaIr::from_collections(vec![
            Collection::new("usr", "users", CollectionKind::Auth)
                .with_field(Field::new("name", FieldKind::Text)),
            Collection::new("pst", "posts", CollectionKind::Base)
                .with_field(Field::new("title", FieldKind::Text).required()),
            Collection::without_schema("old", "legacy", CollectionKind::Base),
        ])
    }

    #[test]
    fn test_generator_new() {
        let ir = create_test_ir();
        let generator = Generator::new(&ir);
        assert_eq!(generator.ir.len(), 3);
    }

    #[test]
    fn test_generate_part_order() {
        let ir = create_test_ir();
        let output = Generator::new(&ir).generate().expect("Failed to generate");

        let markers = [
            "@generated",
            "export enum Collections",
            "export type IsoDateString",
            "export type BaseSystemFields",
            "export type AuthSystemFields",
            RECORD_TYPE_COMMENT,
            "export type PostsRecord",
            "export type UsersRecord",
            "// Response types",
            "export type PostsResponse",
            "export type UsersResponse",
            "export type CollectionRecords",
            "export type CollectionResponses",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| output.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_boilerplate_once() {
        let ir = create_test_ir();
        let output = Generator::new(&ir).generate().expect("Failed to generate");

        assert_eq!(output.matches("export type BaseSystemFields").count(), 1);
        assert_eq!(output.matches("export type AuthSystemFields").count(), 1);
        assert_eq!(output.matches("export type IsoDateString").count(), 1);
    }

    #[test]
    fn test_schema_less_collection_listed_without_types() {
        let ir = create_test_ir();
        let output = Generator::new(&ir).generate().expect("Failed to generate");

        assert!(output.contains("\tLegacy = \"legacy\","));
        assert!(!output.contains("LegacyRecord"));
        assert!(!output.contains("LegacyResponse"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let ir = create_test_ir();
        let first = Generator::new(&ir).generate().expect("Failed to generate");
        let second = Generator::new(&ir).generate().expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_empty_ir() {
        let ir = SchemaIr::from_collections(Vec::new());
        let output = Generator::new(&ir).generate().expect("Failed to generate");

        assert!(output.contains("export enum Collections {\n\n}"));
        assert!(output.ends_with("export type CollectionResponses = {\n\n}"));
    }
}
