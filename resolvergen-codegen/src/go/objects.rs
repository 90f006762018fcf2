//! Object, interface, and union declaration emission.

use crate::context::GenContext;
use crate::error::CodegenError;
use crate::go::fields::write_field;
use crate::go::types::{RenderPosition, resolve_name};
use resolvergen_schema::{FieldDescriptor, Schema};

/// Writes an object capability interface.
///
/// # Errors
/// Returns `CodegenError::BundleConflict` on an argument-bundle collision.
pub fn write_object(
    out: &mut String,
    schema: &Schema,
    ctx: &mut GenContext,
    resolver_name: &str,
    fields: &[FieldDescriptor],
) -> Result<(), CodegenError> {
    out.push_str(&format!("type {resolver_name} interface {{\n"));
    for field in fields {
        write_field(out, schema, ctx, field)?;
    }
    out.push_str("}\n\n");
    Ok(())
}

/// Writes a union holder plus one downcast accessor per member.
///
/// The holder carries the concrete resolver in a single untyped slot;
/// each accessor performs the runtime type check against it.
pub fn write_union(
    out: &mut String,
    schema: &Schema,
    holder_name: &str,
    possible_types: &[String],
) {
    out.push_str(&format!("type {holder_name} struct {{\n"));
    out.push_str("\tResult interface{}\n");
    out.push_str("}\n\n");

    write_downcasts(out, schema, holder_name, "Result", possible_types);
}

/// Writes an interface capability set, its holder, and downcast accessors.
///
/// # Errors
/// Returns `CodegenError::BundleConflict` on an argument-bundle collision.
pub fn write_interface(
    out: &mut String,
    schema: &Schema,
    ctx: &mut GenContext,
    type_name: &str,
    holder_name: &str,
    fields: &[FieldDescriptor],
    possible_types: &[String],
) -> Result<(), CodegenError> {
    let interface_name = resolve_name(schema, type_name, RenderPosition::PLAIN).text;

    out.push_str(&format!("type {interface_name} interface {{\n"));
    for field in fields {
        write_field(out, schema, ctx, field)?;
    }
    out.push_str("}\n\n");

    // Holder embeds the capability interface; downcasts check against it.
    out.push_str(&format!("type {holder_name} struct {{\n"));
    out.push_str(&format!("\t{interface_name}\n"));
    out.push_str("}\n\n");

    write_downcasts(out, schema, holder_name, &interface_name, possible_types);
    Ok(())
}

/// Writes one `To<Implementor>` accessor per possible concrete type.
fn write_downcasts(
    out: &mut String,
    schema: &Schema,
    holder_name: &str,
    held_field: &str,
    possible_types: &[String],
) {
    for member in possible_types {
        let plain = resolve_name(schema, member, RenderPosition::PLAIN);
        let resolver = resolve_name(schema, member, RenderPosition::REFERENCE);

        out.push_str(&format!(
            "func (i *{holder_name}) To{}() ({}, bool) {{\n",
            plain.text, resolver.text
        ));
        out.push_str(&format!(
            "\tc, ok := i.{held_field}.({})\n\treturn c, ok\n",
            resolver.text
        ));
        out.push_str("}\n\n");
    }
}
