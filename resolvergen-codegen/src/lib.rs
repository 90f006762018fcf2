//! # resolvergen-codegen
//!
//! Go resolver-interface generation from GraphQL schemas.
//!
//! This crate provides:
//! - Type-name resolution from schema type references to Go expressions
//! - Field accessor and argument-bundle emission
//! - Per-entity declaration emission (enum, union, interface, object,
//!   input object)
//! - Document assembly with deterministic output

pub mod context;
pub mod error;
pub mod generator;
pub mod go;

pub use context::GenContext;
pub use error::CodegenError;
pub use generator::Generator;

/// Generates Go resolver interfaces from GraphQL SDL text.
///
/// # Arguments
/// * `sdl` - GraphQL schema content
/// * `source_name` - Schema origin recorded in the generated banner
/// * `package` - Go package identifier for the generated file
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
/// Nothing is assembled when the schema fails to parse.
pub fn generate_from_sdl(
    sdl: &str,
    source_name: &str,
    package: &str,
) -> Result<String, CodegenError> {
    let schema = resolvergen_schema::parse_schema(sdl)?;
    resolvergen_schema::validate_schema(&schema)?;
    let generator = Generator::new(&schema, source_name, package, sdl);
    generator.generate()
}

/// Generates Go resolver interfaces from a GraphQL schema file.
///
/// # Arguments
/// * `path` - Path to the schema file
/// * `package` - Go package identifier for the generated file
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation
/// fails.
pub fn generate_from_file(
    path: &std::path::Path,
    package: &str,
) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, &path.display().to_string(), package)
}
