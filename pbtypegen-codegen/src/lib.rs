//! # pbtypegen Codegen
//!
//! TypeScript type generation from backend collection schemas.
//!
//! This crate provides:
//! - Field type mapping for every supported field kind
//! - Record types with generic parameters for json fields
//! - Response types with system fields and one level of relation expansion
//! - Select option and collection name enums

pub mod error;
pub mod generator;
pub mod typescript;

pub use error::CodegenError;
pub use generator::Generator;

use pbtypegen_schema::{Collection, SchemaIr};

/// Generates TypeScript types for a collection set.
///
/// # Errors
/// Returns `CodegenError` if a relation target cannot be resolved.
pub fn generate(collections: Vec<Collection>) -> Result<String, CodegenError> {
    let ir = SchemaIr::from_collections(collections);
    Generator::new(&ir).generate()
}

/// Generates TypeScript types from a JSON collection list.
///
/// # Arguments
/// * `json` - JSON array of collection objects
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let collections = pbtypegen_schema::parse_collections(json)?;
    generate(collections)
}

/// Generates TypeScript types from a JSON schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let collections = pbtypegen_schema::parse_collections_file(path)?;
    generate(collections)
}
