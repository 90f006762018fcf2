//! # resolvergen
//!
//! GraphQL resolver-interface generator for Go servers.
//!
//! resolvergen parses a GraphQL SDL schema and emits the Go interfaces,
//! argument-bundle structs, and enum constants that a hand-written
//! resolver package must implement against the graph-gophers GraphQL
//! runtime.
//!
//! ## Quick Start
//!
//! ```
//! use resolvergen::prelude::*;
//!
//! let sdl = "type Query { name: String! }";
//! let code = generate_from_sdl(sdl, "schema.gql", "app").unwrap();
//! assert!(code.contains("type QueryResolver interface {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - SDL parsing, descriptor graph, validation
//! - [`codegen`] - Go code generation from the descriptor graph

pub mod prelude;

/// Schema parsing and validation.
pub mod schema {
    pub use resolvergen_schema::*;
}

/// Code generation from parsed schemas.
pub mod codegen {
    pub use resolvergen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use resolvergen_codegen::{CodegenError, GenContext, Generator, generate_from_file, generate_from_sdl};
pub use resolvergen_schema::{ParseError, Schema, SchemaError, parse_schema, validate_schema};
