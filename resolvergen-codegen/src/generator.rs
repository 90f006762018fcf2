//! Generated-document assembly.
//!
//! Emits the fixed section order: banner, imports, embedded schema
//! constant, the aggregate resolver declaration, argument bundles sorted
//! by name, and per-entity declarations in document order.

use crate::context::GenContext;
use crate::error::CodegenError;
use crate::go::enums::write_enum;
use crate::go::fields::write_description;
use crate::go::inputs::write_input_object;
use crate::go::objects::{write_interface, write_object, write_union};
use crate::go::types::{RenderPosition, resolve_name};
use resolvergen_schema::{Schema, TypeKind};

/// Import path of the Go GraphQL runtime referenced by generated code.
const RUNTIME_IMPORT: &str = "github.com/graph-gophers/graphql-go";

/// Assembles one generated Go source listing from a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    source_name: &'a str,
    package: &'a str,
    raw_sdl: &'a str,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a parsed schema.
    #[must_use]
    pub fn new(schema: &'a Schema, source_name: &'a str, package: &'a str, raw_sdl: &'a str) -> Self {
        Self {
            schema,
            source_name,
            package,
            raw_sdl,
        }
    }

    /// Generates the full source listing.
    ///
    /// # Errors
    /// Returns `CodegenError::BundleConflict` if two fields synthesize the
    /// same argument-bundle name with different shapes.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut ctx = GenContext::new();

        // Entities come first so the bundle registry is complete before
        // the bundle section is flushed.
        let entities = self.generate_entities(&mut ctx)?;

        let mut out = String::new();
        self.write_header(&mut out);
        ctx.write_bundles(&mut out);
        out.push_str(&entities);
        Ok(out)
    }

    /// Writes the banner, import block, embedded schema constant, and the
    /// aggregate resolver declaration.
    fn write_header(&self, out: &mut String) {
        out.push_str(&format!(
            "// Code generated by resolvergen. DO NOT EDIT.\n// source: {}\npackage {}\n",
            self.source_name, self.package
        ));

        out.push_str(&format!(
            "\nimport (\n\tgraphql \"{RUNTIME_IMPORT}\"\n\tcontext \"context\"\n)\n"
        ));

        out.push_str(&format!(
            "\n// schema from source: {} \nconst Schema string = `\n{}\n`",
            self.source_name, self.raw_sdl
        ));

        out.push_str("\n\ntype SchemaResolver interface {\n");
        out.push_str("\tQueryResolver\n");
        if self.schema.mutation_root.is_some() {
            out.push_str("\tMutationResolver\n");
        }
        if self.schema.subscription_root.is_some() {
            out.push_str("\tSubscriptionResolver\n");
        }
        out.push_str("}\n\n");
    }

    /// Writes all entity declarations in document order.
    fn generate_entities(&self, ctx: &mut GenContext) -> Result<String, CodegenError> {
        let mut out = String::new();

        for descriptor in &self.schema.types {
            let resolved = resolve_name(self.schema, &descriptor.name, RenderPosition::ENTITY);
            if !resolved.needs_declaration {
                continue;
            }

            out.push_str("\n\n");
            write_description(&mut out, "", descriptor.description.as_deref());

            match &descriptor.kind {
                TypeKind::Enum { values } => write_enum(&mut out, &resolved.text, values),
                TypeKind::Union { possible_types } => {
                    write_union(&mut out, self.schema, &resolved.text, possible_types);
                }
                TypeKind::Interface {
                    fields,
                    possible_types,
                } => write_interface(
                    &mut out,
                    self.schema,
                    ctx,
                    &descriptor.name,
                    &resolved.text,
                    fields,
                    possible_types,
                )?,
                TypeKind::Object { fields, .. } => {
                    write_object(&mut out, self.schema, ctx, &resolved.text, fields)?;
                }
                TypeKind::InputObject { fields } => {
                    write_input_object(&mut out, self.schema, descriptor, fields);
                }
                // Custom scalars keep their name but have no declaration
                // body; their resolver type is provided by hand.
                TypeKind::Scalar => {}
            }
        }

        Ok(out)
    }
}
