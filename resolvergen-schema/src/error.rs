//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// SDL syntax error.
    #[error("schema syntax error: {0}")]
    Syntax(#[from] graphql_parser::schema::ParseError),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, schema definition, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Unsupported schema construct.
    #[error("unsupported schema construct: {construct}")]
    Unsupported {
        /// Construct description.
        construct: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unsupported construct error.
    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::Unsupported {
            construct: construct.into(),
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Unknown type reference.
    #[error("unknown type '{type_name}' referenced by {context}")]
    UnknownType {
        /// Referenced type name.
        type_name: String,
        /// Referencing field, argument, or declaration.
        context: String,
    },

    /// A reference requires a different type kind.
    #[error("type '{type_name}' referenced by {context} must be {expected}")]
    WrongKind {
        /// Referenced type name.
        type_name: String,
        /// Referencing declaration.
        context: String,
        /// Expected kind.
        expected: String,
    },

    /// The schema declares no query root type.
    #[error("schema has no query root type")]
    MissingQueryRoot,

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }

    /// Creates a wrong kind error.
    pub fn wrong_kind(
        type_name: impl Into<String>,
        context: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::WrongKind {
            type_name: type_name.into(),
            context: context.into(),
            expected: expected.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
