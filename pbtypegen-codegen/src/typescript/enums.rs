//! Enum code generation.
//!
//! Covers the collection name enum and the per-field select option enums.

use crate::typescript::naming::{option_enum_name, quote, to_pascal_case};
use pbtypegen_schema::ir::SchemaIr;
use pbtypegen_schema::types::{Collection, Field, FieldKind};

/// Generator for enum declarations.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the `Collections` enum with one member per collection.
    ///
    /// Collections without a schema are listed too.
    #[must_use]
    pub fn generate_collections(&self) -> String {
        let members: Vec<String> = self
            .ir
            .collections
            .iter()
            .map(|c| format!("\t{} = {},", to_pascal_case(&c.name), quote(&c.name)))
            .collect();

        format!("export enum Collections {{\n{}\n}}", members.join("\n"))
    }

    /// Generates the option enums for every select field of a collection,
    /// in schema order.
    #[must_use]
    pub fn generate_select_options(&self, collection: &Collection) -> Vec<String> {
        collection
            .fields()
            .iter()
            .filter_map(|field| self.generate_select_option(&collection.name, field))
            .collect()
    }

    /// Generates the option enum of one select field.
    ///
    /// Returns `None` for other kinds and for selects without declared values.
    #[must_use]
    pub fn generate_select_option(&self, collection_name: &str, field: &Field) -> Option<String> {
        let values = option_values(field)?;
        let members: Vec<String> = values
            .iter()
            .map(|value| {
                let literal = quote(value);
                format!("\t{literal} = {literal},")
            })
            .collect();

        Some(format!(
            "export enum {} {{\n{}\n}}",
            option_enum_name(collection_name, &field.name),
            members.join("\n")
        ))
    }
}

/// Returns the declared values of a select field with repeats removed.
///
/// First occurrences keep their position.
#[must_use]
pub fn option_values(field: &Field) -> Option<Vec<&str>> {
    let FieldKind::Select {
        values: Some(values),
        ..
    } = &field.kind
    else {
        return None;
    };

    let mut unique: Vec<&str> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value.as_str()) {
            unique.push(value);
        }
    }
    Some(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbtypegen_schema::types::CollectionKind;

    fn select(name: &str, values: &[&str]) -> Field {
        Field::new(
            name,
            FieldKind::Select {
                values: Some(values.iter().map(|s| s.to_string()).collect()),
                max_select: Some(1),
            },
        )
    }

    fn create_test_ir() -> SchemaIr {
        SchemaIr::from_collections(vec![
            Collection::new("u1", "users", CollectionKind::Auth),
            Collection::new("p1", "blog_posts", CollectionKind::Base)
                .with_field(Field::new("title", FieldKind::Text))
                .with_field(select("status", &["draft", "Published", "draft"]))
                .with_field(Field::new(
                    "mood",
                    FieldKind::Select {
                        values: None,
                        max_select: None,
                    },
                ))
                .with_field(select("level", &["low", "high"])),
            Collection::without_schema("a1", "archive", CollectionKind::Base),
        ])
    }

    #[test]
    fn test_generate_collections() {
        let ir = create_test_ir();
        let output = EnumGenerator::new(&ir).generate_collections();

        assert_eq!(
            output,
            "export enum Collections {\n\
             \tArchive = \"archive\",\n\
             \tBlogPosts = \"blog_posts\",\n\
             \tUsers = \"users\",\n\
             }"
        );
    }

    #[test]
    fn test_one_member_per_collection() {
        let ir = create_test_ir();
        let output = EnumGenerator::new(&ir).generate_collections();
        let members = output.lines().filter(|l| l.starts_with('\t')).count();
        assert_eq!(members, ir.len());
    }

    #[test]
    fn test_generate_select_options() {
        let ir = create_test_ir();
        let generator = EnumGenerator::new(&ir);
        let posts = ir.collection_by_id("p1").expect("posts exists");
        let enums = generator.generate_select_options(posts);

        assert_eq!(enums.len(), 2);
        assert_eq!(
            enums[0],
            "export enum BlogPostsStatusOptions {\n\
             \t\"draft\" = \"draft\",\n\
             \t\"Published\" = \"Published\",\n\
             }"
        );
        assert!(enums[1].starts_with("export enum BlogPostsLevelOptions {"));
    }

    #[test]
    fn test_option_values_preserve_order() {
        let field = select("size", &["XL", "s", "M"]);
        assert_eq!(option_values(&field), Some(vec!["XL", "s", "M"]));
        assert_eq!(option_values(&Field::new("t", FieldKind::Text)), None);
    }

    #[test]
    fn test_option_values_are_escaped() {
        let ir = create_test_ir();
        let field = select("quote", &["say \"hi\""]);
        let output = EnumGenerator::new(&ir)
            .generate_select_option("posts", &field)
            .expect("enum generated");
        assert!(output.contains("\t\"say \\\"hi\\\"\" = \"say \\\"hi\\\"\","));
    }
}
