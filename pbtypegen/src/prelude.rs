//! Commonly used types and functions.

pub use pbtypegen_codegen::{
    CodegenError, Generator, generate, generate_from_file, generate_from_json,
};
pub use pbtypegen_schema::{
    Collection, CollectionKind, Field, FieldKind, ParseError, SchemaError, SchemaIr,
    parse_collections, parse_collections_file,
};
