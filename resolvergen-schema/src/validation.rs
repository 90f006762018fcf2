//! Schema validation.
//!
//! The code generator assumes every type reference resolves; this module
//! checks that assumption after parsing so generation never observes a
//! dangling name.

use crate::error::SchemaError;
use crate::types::{
    InputValueDescriptor, Schema, TypeDescriptor, TypeKind, TypeRef, is_builtin_scalar,
};
use std::collections::HashSet;

/// Validates a parsed schema for referential consistency.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if a reference does not resolve, a root or union
/// member is not an object type, or an enum declares a value twice.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_roots(schema)?;
    for descriptor in &schema.types {
        validate_type(schema, descriptor)?;
    }
    Ok(())
}

/// Validates the root operation bindings.
fn validate_roots(schema: &Schema) -> Result<(), SchemaError> {
    let query = schema
        .query_root
        .as_deref()
        .ok_or(SchemaError::MissingQueryRoot)?;
    validate_root(schema, query, "query root")?;

    if let Some(mutation) = schema.mutation_root.as_deref() {
        validate_root(schema, mutation, "mutation root")?;
    }
    if let Some(subscription) = schema.subscription_root.as_deref() {
        validate_root(schema, subscription, "subscription root")?;
    }
    Ok(())
}

fn validate_root(schema: &Schema, name: &str, context: &str) -> Result<(), SchemaError> {
    let descriptor = schema
        .get_type(name)
        .ok_or_else(|| SchemaError::unknown_type(name, context))?;
    if !descriptor.kind.is_object() {
        return Err(SchemaError::wrong_kind(name, context, "an object type"));
    }
    Ok(())
}

/// Validates one type descriptor.
fn validate_type(schema: &Schema, descriptor: &TypeDescriptor) -> Result<(), SchemaError> {
    match &descriptor.kind {
        TypeKind::Scalar => Ok(()),
        TypeKind::Object { fields, interfaces } => {
            for interface in interfaces {
                let target = schema.get_type(interface).ok_or_else(|| {
                    SchemaError::unknown_type(interface, format!("object '{}'", descriptor.name))
                })?;
                if !target.kind.is_interface() {
                    return Err(SchemaError::wrong_kind(
                        interface,
                        format!("object '{}'", descriptor.name),
                        "an interface type",
                    ));
                }
            }
            validate_fields(schema, &descriptor.name, fields)
        }
        TypeKind::Interface { fields, .. } => validate_fields(schema, &descriptor.name, fields),
        TypeKind::Union { possible_types } => {
            for member in possible_types {
                let target = schema.get_type(member).ok_or_else(|| {
                    SchemaError::unknown_type(member, format!("union '{}'", descriptor.name))
                })?;
                if !target.kind.is_object() {
                    return Err(SchemaError::wrong_kind(
                        member,
                        format!("union '{}'", descriptor.name),
                        "an object type",
                    ));
                }
            }
            Ok(())
        }
        TypeKind::Enum { values } => {
            let mut seen = HashSet::new();
            for value in values {
                if !seen.insert(value.name.as_str()) {
                    return Err(SchemaError::validation(format!(
                        "duplicate enum value '{}' in enum '{}'",
                        value.name, descriptor.name
                    )));
                }
            }
            Ok(())
        }
        TypeKind::InputObject { fields } => {
            validate_input_values(schema, &format!("input '{}'", descriptor.name), fields)
        }
    }
}

/// Validates output fields and their arguments.
fn validate_fields(
    schema: &Schema,
    type_name: &str,
    fields: &[crate::types::FieldDescriptor],
) -> Result<(), SchemaError> {
    for field in fields {
        let context = format!("field '{}.{}'", type_name, field.name);
        validate_type_ref(schema, &context, &field.field_type)?;
        validate_input_values(schema, &context, &field.arguments)?;
    }
    Ok(())
}

/// Validates argument or input-field type references.
fn validate_input_values(
    schema: &Schema,
    context: &str,
    values: &[InputValueDescriptor],
) -> Result<(), SchemaError> {
    for value in values {
        let context = format!("{} argument '{}'", context, value.name);
        validate_type_ref(schema, &context, &value.value_type)?;
    }
    Ok(())
}

/// Checks that the base name of a type reference is declared or built in.
fn validate_type_ref(schema: &Schema, context: &str, ty: &TypeRef) -> Result<(), SchemaError> {
    let name = ty.base_name();
    if schema.has_type(name) || is_builtin_scalar(name) {
        return Ok(());
    }
    Err(SchemaError::unknown_type(name, context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    #[test]
    fn test_validate_valid_schema() {
        let sdl = r#"
type Query {
    droid(id: ID!): Droid
}

type Droid {
    name: String!
}
"#;
        let schema = parse_schema(sdl).expect("parse failed");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_missing_query_root() {
        let schema = parse_schema("type Droid { name: String }").expect("parse failed");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::MissingQueryRoot)
        ));
    }

    #[test]
    fn test_unknown_field_type() {
        let schema = parse_schema("type Query { ship: Starship }").expect("parse failed");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_unknown_argument_type() {
        let schema =
            parse_schema("type Query { search(filter: Filter): String }").expect("parse failed");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_union_member_must_be_object() {
        let sdl = r#"
type Query { any: Thing }
enum Color { RED }
union Thing = Color
"#;
        let schema = parse_schema(sdl).expect("parse failed");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_duplicate_enum_value() {
        let sdl = r#"
type Query { color: Color }
enum Color { RED RED }
"#;
        let schema = parse_schema(sdl).expect("parse failed");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::Validation { .. })
        ));
    }

    #[test]
    fn test_builtin_scalars_allowed() {
        let sdl = "type Query { id: ID! at: Time name: String rate: Float ok: Boolean n: Int }";
        let schema = parse_schema(sdl).expect("parse failed");
        assert!(validate_schema(&schema).is_ok());
    }
}
