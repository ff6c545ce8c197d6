//! # pbtypegen
//!
//! Generate TypeScript type definitions from PocketBase collection schemas.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pbtypegen::prelude::*;
//!
//! let json = std::fs::read_to_string("pb_schema.json")?;
//! let source = generate_from_json(&json)?;
//! std::fs::write("pocketbase-types.ts", source)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Collection model, JSON parsing and IR
//! - [`codegen`] - TypeScript generation

pub mod prelude;

/// Collection model, JSON parsing and intermediate representation.
pub mod schema {
    pub use pbtypegen_schema::*;
}

/// TypeScript generation from collection schemas.
pub mod codegen {
    pub use pbtypegen_codegen::*;
}
