//! Record type code generation.

use crate::typescript::enums::EnumGenerator;
use crate::typescript::fields::field_member;
use crate::typescript::generics::GenericParams;
use crate::typescript::naming::{sanitize_field_name, to_pascal_case};
use pbtypegen_schema::ir::SchemaIr;
use pbtypegen_schema::types::Collection;

/// Generator for record types.
pub struct RecordGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates one record block per schema-bearing collection.
    #[must_use]
    pub fn generate(&self) -> Vec<String> {
        self.ir
            .schema_collections()
            .map(|c| self.generate_record(c))
            .collect()
    }

    /// Generates the option enums and record type of a collection.
    #[must_use]
    pub fn generate_record(&self, collection: &Collection) -> String {
        tracing::debug!("Generating record type for collection {}", collection.name);

        let mut output = String::new();

        for option_enum in EnumGenerator::new(self.ir).generate_select_options(collection) {
            output.push_str(&option_enum);
            output.push_str("\n\n");
        }

        let generics = GenericParams::from_fields(collection.fields());
        let members: Vec<String> = collection
            .fields()
            .iter()
            .map(|field| field_member(field, &collection.name))
            .collect();

        output.push_str(&format!(
            "export type {}{} = {{\n{}\n}}",
            record_type_name(&collection.name),
            generics.declaration(),
            members.join("\n")
        ));

        output
    }

    /// Generates the `CollectionRecords` lookup type.
    #[must_use]
    pub fn generate_lookup(&self) -> String {
        let entries: Vec<String> = self
            .ir
            .schema_collections()
            .map(|c| {
                format!(
                    "\t{}: {}",
                    sanitize_field_name(&c.name),
                    record_type_name(&c.name)
                )
            })
            .collect();

        format!("export type CollectionRecords = {{\n{}\n}}", entries.join("\n"))
    }
}

/// Returns the record type name of a collection.
#[must_use]
pub fn record_type_name(collection_name: &str) -> String {
    format!("{}Record", to_pascal_case(collection_name))
}
