//! # resolvergen-schema
//!
//! GraphQL SDL parsing and the type-descriptor graph.
//!
//! This crate provides:
//! - SDL schema parsing into a descriptor graph
//! - Normalized type references (explicit per-node nullability)
//! - Root operation binding resolution
//! - Schema validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::parse_schema;
pub use types::{
    BUILTIN_SCALARS, Deprecation, EnumValueDescriptor, FieldDescriptor, InputValueDescriptor,
    Schema, TypeDescriptor, TypeKind, TypeRef, is_builtin_scalar,
};
pub use validation::validate_schema;
