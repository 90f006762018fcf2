//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] resolvergen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] resolvergen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument bundle registered under one name with divergent definitions.
    #[error(
        "argument bundle '{name}' registered with divergent definitions\n\told='{existing}'\n\tnew='{new}'"
    )]
    BundleConflict {
        /// Bundle name.
        name: String,
        /// Previously registered definition.
        existing: String,
        /// Conflicting definition.
        new: String,
    },
}
