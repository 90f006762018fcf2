//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use resolvergen::prelude::*;
//! ```

// Schema types
pub use resolvergen_schema::{
    Deprecation, EnumValueDescriptor, FieldDescriptor, InputValueDescriptor, ParseError, Schema,
    SchemaError, TypeDescriptor, TypeKind, TypeRef, parse_schema, validate_schema,
};

// Codegen types
pub use resolvergen_codegen::{
    CodegenError, GenContext, Generator, generate_from_file, generate_from_sdl,
};
