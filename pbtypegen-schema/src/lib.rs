//! # pbtypegen Schema
//!
//! Backend collection schema model and parser.
//!
//! This crate provides:
//! - Typed collection and field definitions
//! - JSON schema document parsing
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use ir::SchemaIr;
pub use parser::{parse_collections, parse_collections_file};
pub use types::{AccessRules, Collection, CollectionKind, Field, FieldKind};
