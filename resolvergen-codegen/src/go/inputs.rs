//! Argument bundles and input-object rendering.

use crate::context::GenContext;
use crate::error::CodegenError;
use crate::go::fields::{member_name, write_description};
use crate::go::types::{RenderPosition, resolve_name, resolve_type};
use resolvergen_schema::{InputValueDescriptor, Schema, TypeDescriptor};

/// Synthesizes and registers the `<FieldName>Arguments` bundle for a field.
///
/// Returns the parameter fragment for the accessor signature, or `None`
/// for fields without arguments.
///
/// # Errors
/// Returns `CodegenError::BundleConflict` if the bundle name is already
/// registered with different text.
pub fn argument_bundle(
    schema: &Schema,
    ctx: &mut GenContext,
    func_name: &str,
    arguments: &[InputValueDescriptor],
) -> Result<Option<String>, CodegenError> {
    if arguments.is_empty() {
        return Ok(None);
    }

    let bundle_name = format!("{func_name}Arguments");
    let mut decl = format!("type {bundle_name} struct {{\n");

    for input in arguments {
        write_description(&mut decl, "\t", input.description.as_deref());

        if let Some(default) = &input.default_value {
            decl.push_str(&format!("\t// default value \"{default}\"\n"));
        }

        // Bundle members are plain struct fields, never resolver references.
        let member_type = resolve_type(
            schema,
            Some(&input.value_type),
            RenderPosition::input(input.default_value.is_some()),
        );
        decl.push_str(&format!(
            "\t{} {}\n",
            member_name(&input.name),
            member_type.text
        ));
    }

    decl.push_str("}\n\n");
    ctx.register_bundle(&bundle_name, decl)?;

    Ok(Some(format!("in {bundle_name}")))
}

/// Writes one member of an input-object declaration.
pub fn write_input_value(
    out: &mut String,
    schema: &Schema,
    prefix: &str,
    input: &InputValueDescriptor,
) {
    write_description(out, prefix, input.description.as_deref());

    if let Some(default) = &input.default_value {
        out.push_str(&format!("{prefix}// default value - \"{default}\"\n"));
    }

    let member_type = resolve_type(
        schema,
        Some(&input.value_type),
        RenderPosition::input(input.default_value.is_some()),
    );
    out.push_str(&format!(
        "{prefix}{} {}\n",
        member_name(&input.name),
        member_type.text
    ));
}

/// Writes an input-object structural declaration.
pub fn write_input_object(
    out: &mut String,
    schema: &Schema,
    descriptor: &TypeDescriptor,
    fields: &[InputValueDescriptor],
) {
    let declare_name = resolve_name(schema, &descriptor.name, RenderPosition::DECLARE);

    out.push_str(&format!("type {} struct {{\n", declare_name.text));
    for input in fields {
        write_input_value(out, schema, "\t", input);
    }
    out.push_str("}\n\n");
}
