//! GraphQL SDL schema parser.
//!
//! This module turns GraphQL schema text into the descriptor graph defined
//! in [`crate::types`]. Non-null wrappers are normalized into per-node
//! `required` flags while converting, so downstream consumers never see
//! wrapper indirection.

use crate::error::ParseError;
use crate::types::{
    Deprecation, EnumValueDescriptor, FieldDescriptor, InputValueDescriptor, Schema,
    TypeDescriptor, TypeKind, TypeRef,
};
use graphql_parser::schema::{
    Definition, Directive, EnumType, Field, InputObjectType, InputValue, InterfaceType, ObjectType,
    ScalarType, SchemaDefinition, Type, TypeDefinition, UnionType, Value,
};

/// Parses a GraphQL SDL schema from a string.
///
/// # Arguments
/// * `sdl` - Schema source text
///
/// # Returns
/// Parsed schema descriptor graph or parse error.
///
/// # Errors
/// Returns `ParseError` if the SDL is malformed, declares a name twice,
/// or uses an unsupported construct.
pub fn parse_schema(sdl: &str) -> Result<Schema, ParseError> {
    let document = graphql_parser::parse_schema::<String>(sdl)?;

    let mut schema = Schema::new();
    let mut saw_schema_definition = false;

    for definition in document.definitions {
        match definition {
            Definition::SchemaDefinition(sd) => {
                if saw_schema_definition {
                    return Err(ParseError::duplicate("schema definition", "schema"));
                }
                saw_schema_definition = true;
                apply_schema_definition(&mut schema, sd);
            }
            Definition::TypeDefinition(td) => {
                let descriptor = convert_type(td);
                if schema.has_type(&descriptor.name) {
                    return Err(ParseError::duplicate("type", descriptor.name));
                }
                schema.add_type(descriptor);
            }
            Definition::TypeExtension(_) => {
                return Err(ParseError::unsupported("type extension"));
            }
            // Directive declarations only matter to the runtime; the raw
            // schema text carries them through unchanged.
            Definition::DirectiveDefinition(_) => {}
        }
    }

    if !saw_schema_definition {
        apply_default_roots(&mut schema);
    }
    link_possible_types(&mut schema);

    Ok(schema)
}

/// Records the root operation bindings from an explicit `schema {}` block.
fn apply_schema_definition(schema: &mut Schema, sd: SchemaDefinition<'_, String>) {
    schema.query_root = sd.query;
    schema.mutation_root = sd.mutation;
    schema.subscription_root = sd.subscription;
}

/// Binds the conventional root type names when no `schema {}` block exists.
fn apply_default_roots(schema: &mut Schema) {
    if schema.has_type("Query") {
        schema.query_root = Some("Query".to_string());
    }
    if schema.has_type("Mutation") {
        schema.mutation_root = Some("Mutation".to_string());
    }
    if schema.has_type("Subscription") {
        schema.subscription_root = Some("Subscription".to_string());
    }
}

/// Fills interface `possible_types` from object `implements` clauses,
/// preserving object declaration order.
fn link_possible_types(schema: &mut Schema) {
    let mut implementors: Vec<(String, String)> = Vec::new();
    for descriptor in &schema.types {
        if let TypeKind::Object { interfaces, .. } = &descriptor.kind {
            for interface in interfaces {
                implementors.push((interface.clone(), descriptor.name.clone()));
            }
        }
    }

    for (interface, object) in implementors {
        if let Some(descriptor) = schema.get_type_mut(&interface) {
            if let TypeKind::Interface { possible_types, .. } = &mut descriptor.kind {
                possible_types.push(object);
            }
        }
    }
}

fn convert_type(td: TypeDefinition<'_, String>) -> TypeDescriptor {
    match td {
        TypeDefinition::Scalar(s) => convert_scalar(s),
        TypeDefinition::Object(o) => convert_object(o),
        TypeDefinition::Interface(i) => convert_interface(i),
        TypeDefinition::Union(u) => convert_union(u),
        TypeDefinition::Enum(e) => convert_enum(e),
        TypeDefinition::InputObject(io) => convert_input_object(io),
    }
}

fn convert_scalar(s: ScalarType<'_, String>) -> TypeDescriptor {
    TypeDescriptor {
        name: s.name,
        description: s.description,
        kind: TypeKind::Scalar,
    }
}

fn convert_object(o: ObjectType<'_, String>) -> TypeDescriptor {
    TypeDescriptor {
        name: o.name,
        description: o.description,
        kind: TypeKind::Object {
            fields: o.fields.into_iter().map(convert_field).collect(),
            interfaces: o.implements_interfaces,
        },
    }
}

fn convert_interface(i: InterfaceType<'_, String>) -> TypeDescriptor {
    TypeDescriptor {
        name: i.name,
        description: i.description,
        kind: TypeKind::Interface {
            fields: i.fields.into_iter().map(convert_field).collect(),
            possible_types: Vec::new(),
        },
    }
}

fn convert_union(u: UnionType<'_, String>) -> TypeDescriptor {
    TypeDescriptor {
        name: u.name,
        description: u.description,
        kind: TypeKind::Union {
            possible_types: u.types,
        },
    }
}

fn convert_enum(e: EnumType<'_, String>) -> TypeDescriptor {
    let values = e
        .values
        .into_iter()
        .map(|v| EnumValueDescriptor {
            name: v.name,
            description: v.description,
            deprecation: deprecation_of(&v.directives),
        })
        .collect();

    TypeDescriptor {
        name: e.name,
        description: e.description,
        kind: TypeKind::Enum { values },
    }
}

fn convert_input_object(io: InputObjectType<'_, String>) -> TypeDescriptor {
    TypeDescriptor {
        name: io.name,
        description: io.description,
        kind: TypeKind::InputObject {
            fields: io.fields.into_iter().map(convert_input_value).collect(),
        },
    }
}

fn convert_field(f: Field<'_, String>) -> FieldDescriptor {
    FieldDescriptor {
        name: f.name,
        description: f.description,
        deprecation: deprecation_of(&f.directives),
        arguments: f.arguments.into_iter().map(convert_input_value).collect(),
        field_type: normalize_type(&f.field_type),
    }
}

fn convert_input_value(iv: InputValue<'_, String>) -> InputValueDescriptor {
    InputValueDescriptor {
        name: iv.name,
        description: iv.description,
        value_type: normalize_type(&iv.value_type),
        default_value: iv.default_value.map(|v| render_value(&v)),
    }
}

/// Normalizes a wrapper-nested type into the explicit [`TypeRef`] shape.
fn normalize_type(ty: &Type<'_, String>) -> TypeRef {
    match ty {
        Type::NamedType(name) => TypeRef::named(name.clone()),
        Type::ListType(inner) => TypeRef::list(normalize_type(inner)),
        Type::NonNullType(inner) => normalize_type(inner).required(),
    }
}

/// Renders a default value as GraphQL literal text.
fn render_value(value: &Value<'_, String>) -> String {
    value.to_string()
}

/// Extracts the `@deprecated` directive, if present.
fn deprecation_of(directives: &[Directive<'_, String>]) -> Option<Deprecation> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find(|(name, _)| name.as_str() == "reason")
        .map(|(_, value)| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    Some(Deprecation { reason })
}
