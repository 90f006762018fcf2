//! Field accessor and comment rendering.

use crate::context::GenContext;
use crate::error::CodegenError;
use crate::go::inputs::argument_bundle;
use crate::go::types::{RenderPosition, resolve_type};
use resolvergen_schema::{Deprecation, FieldDescriptor, Schema};

/// Token in a field description that forces the context/error contract
/// even for primitive outputs.
const LAZY_MARKER: &str = "@lazy";

/// Writes a description as `// ` comment lines at the given prefix.
pub fn write_description(out: &mut String, prefix: &str, description: Option<&str>) {
    if let Some(description) = description {
        for line in description.split('\n') {
            out.push_str(prefix);
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Writes a `// Deprecated:` notice, with the reason when one was given.
pub fn write_deprecation(out: &mut String, prefix: &str, deprecation: Option<&Deprecation>) {
    if let Some(deprecation) = deprecation {
        out.push_str(prefix);
        out.push_str("// Deprecated:");
        if let Some(reason) = &deprecation.reason {
            out.push(' ');
            out.push_str(reason);
        }
        out.push('\n');
    }
}

/// Go member name for a schema field or argument name.
///
/// `id` in any casing renders verbatim as `ID`; everything else is
/// title-cased.
#[must_use]
pub fn member_name(name: &str) -> String {
    if name.eq_ignore_ascii_case("ID") {
        return "ID".to_string();
    }
    title_case(name)
}

/// Uppercases the first letter of each letter run.
fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut boundary = true;

    for c in s.chars() {
        if boundary && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        boundary = !c.is_alphabetic();
    }

    result
}

/// Writes one accessor line of a capability interface.
///
/// Non-primitive outputs and `@lazy`-marked fields get a leading
/// `ctx context.Context` parameter and a `(value, error)` return; plain
/// primitive fields stay synchronous accessors.
///
/// # Errors
/// Returns `CodegenError::BundleConflict` if the field's argument bundle
/// collides with a divergent registration.
pub fn write_field(
    out: &mut String,
    schema: &Schema,
    ctx: &mut GenContext,
    field: &FieldDescriptor,
) -> Result<(), CodegenError> {
    write_description(out, "\t", field.description.as_deref());
    write_deprecation(out, "\t", field.deprecation.as_ref());

    let func_name = member_name(&field.name);
    let mut params = argument_bundle(schema, ctx, &func_name, &field.arguments)?;

    let out_type = resolve_type(schema, Some(&field.field_type), RenderPosition::OUTPUT);
    let lazy = field
        .description
        .as_deref()
        .is_some_and(|d| d.contains(LAZY_MARKER));

    let ret = if !out_type.primitive || lazy {
        params = Some(match params {
            Some(p) => format!("ctx context.Context, {p}"),
            None => "ctx context.Context".to_string(),
        });
        format!("({}, error)", out_type.text)
    } else {
        out_type.text
    };

    out.push_str(&format!(
        "\t{}({}) {}\n",
        func_name,
        params.unwrap_or_default(),
        ret
    ));
    Ok(())
}
