//! Response type code generation.
//!
//! A response type is the record type plus the system fields, and an
//! optional `expand` object with one member per relation field. Expanded
//! members reference the target collection's response type, which keeps
//! expansion to a single level.

use crate::error::CodegenError;
use crate::typescript::constants::{
    AUTH_SYSTEM_FIELDS_NAME, BASE_SYSTEM_FIELDS_NAME, RESPONSE_TYPE_COMMENT,
};
use crate::typescript::generics::GenericParams;
use crate::typescript::naming::{sanitize_field_name, to_pascal_case};
use crate::typescript::records::record_type_name;
use pbtypegen_schema::error::SchemaError;
use pbtypegen_schema::ir::SchemaIr;
use pbtypegen_schema::types::{Collection, Field, FieldKind, exactly_one};

/// Generator for response types.
pub struct ResponseGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> ResponseGenerator<'a> {
    /// Creates a new response generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the response section: the header comment followed by one
    /// response type per schema-bearing collection.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if a relation target cannot be resolved.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut parts = vec![RESPONSE_TYPE_COMMENT.to_string()];
        for collection in self.ir.schema_collections() {
            parts.push(self.generate_response(collection)?);
        }
        Ok(parts.join("\n"))
    }

    /// Generates the response type of one collection.
    ///
    /// # Errors
    /// Returns `SchemaError::UnresolvedRelationTarget` if a relation field
    /// points at a collection id missing from the IR.
    pub fn generate_response(&self, collection: &Collection) -> Result<String, SchemaError> {
        tracing::debug!("Generating response type for collection {}", collection.name);

        let pascal_name = to_pascal_case(&collection.name);
        let generics = GenericParams::from_fields(collection.fields());

        let mut output = format!(
            "export type {}Response{} = {}{} & {}",
            pascal_name,
            generics.declaration(),
            record_type_name(&collection.name),
            generics.reference(),
            system_fields_name(collection)
        );

        let expand_members = collection
            .fields()
            .iter()
            .filter_map(|field| match &field.kind {
                FieldKind::Relation {
                    collection_id,
                    max_select,
                } => Some(self.generate_expand_member(field, collection_id, *max_select)),
                _ => None,
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !expand_members.is_empty() {
            output.push_str(&format!(
                " & {{\n\texpand?: {{\n{}\n\t}}\n}}",
                expand_members.join("\n")
            ));
        }

        Ok(output)
    }

    /// Generates one member of the `expand` object.
    fn generate_expand_member(
        &self,
        field: &Field,
        collection_id: &str,
        max_select: Option<u32>,
    ) -> Result<String, SchemaError> {
        let target = self.ir.resolve_relation(collection_id)?;
        // Schema-less collections get no response type of their own.
        let target_type = if target.schema.is_some() {
            response_type_name(&target.name)
        } else {
            system_fields_name(target).to_string()
        };
        let type_expr = if exactly_one(max_select) {
            target_type
        } else {
            format!("{target_type}[]")
        };

        Ok(format!(
            "\t\t{}?: {}",
            sanitize_field_name(&field.name),
            type_expr
        ))
    }

    /// Generates the `CollectionResponses` lookup type.
    #[must_use]
    pub fn generate_lookup(&self) -> String {
        let entries: Vec<String> = self
            .ir
            .schema_collections()
            .map(|c| {
                format!(
                    "\t{}: {}",
                    sanitize_field_name(&c.name),
                    response_type_name(&c.name)
                )
            })
            .collect();

        format!(
            "export type CollectionResponses = {{\n{}\n}}",
            entries.join("\n")
        )
    }
}

/// Returns the response type name of a collection.
#[must_use]
pub fn response_type_name(collection_name: &str) -> String {
    format!("{}Response", to_pascal_case(collection_name))
}

/// Returns the system fields type that applies to a collection.
#[must_use]
pub const fn system_fields_name(collection: &Collection) -> &'static str {
    if collection.is_auth() {
        AUTH_SYSTEM_FIELDS_NAME
    } else {
        BASE_SYSTEM_FIELDS_NAME
    }
}
