//! Go type-expression resolution.
//!
//! Maps a normalized schema type reference to the Go type expression used
//! in generated signatures and declarations. Pointer prefixing depends on
//! the referenced kind, the node's own `required` flag, and the rendering
//! position; declared non-enum types additionally carry the resolver
//! suffix in suffixed positions.

use resolvergen_schema::{Schema, TypeKind, TypeRef};

/// Names beginning with this marker are introspection meta-types and must
/// never surface in generated code.
const PRIVATE_TYPE_MARKER: &str = "__";

/// Suffix appended to declared type names in suffixed positions.
pub const RESOLVER_SUFFIX: &str = "Resolver";

/// Where and how a type reference is being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderPosition {
    /// Declared non-enum type names carry the resolver suffix.
    pub suffixed: bool,
    /// Rendering an output or holder-declaration position.
    pub output: bool,
    /// The surrounding input value declares a default literal.
    pub has_default: bool,
    /// Top-level entity declaration lookup.
    pub top_level: bool,
}

impl RenderPosition {
    /// Top-level entity declaration lookup.
    pub const ENTITY: Self = Self {
        suffixed: true,
        output: false,
        has_default: false,
        top_level: true,
    };

    /// Field output type in an accessor signature.
    pub const OUTPUT: Self = Self {
        suffixed: true,
        output: true,
        has_default: false,
        top_level: false,
    };

    /// Suffixed reference outside output position (downcast return types).
    pub const REFERENCE: Self = Self {
        suffixed: true,
        output: false,
        has_default: false,
        top_level: false,
    };

    /// Plain name without suffix (interface names, downcast method names).
    pub const PLAIN: Self = Self {
        suffixed: false,
        output: false,
        has_default: false,
        top_level: false,
    };

    /// Structural declaration name (input-object declarations).
    pub const DECLARE: Self = Self {
        suffixed: false,
        output: true,
        has_default: false,
        top_level: false,
    };

    /// Argument or input-object member position.
    #[must_use]
    pub const fn input(has_default: bool) -> Self {
        Self {
            suffixed: false,
            output: false,
            has_default,
            top_level: false,
        }
    }
}

/// Result of resolving a type reference.
#[derive(Debug, Clone, Default)]
pub struct ResolvedName {
    /// Rendered Go type expression. Empty for suppressed meta-types.
    pub text: String,
    /// True if the referenced type needs its own top-level declaration.
    pub needs_declaration: bool,
    /// True if the expression bottoms out in a built-in scalar.
    pub primitive: bool,
}

/// Resolves a type reference to a Go type expression.
///
/// An absent reference resolves to the empty expression (fields with no
/// output type have no return value).
#[must_use]
pub fn resolve_type(schema: &Schema, ty: Option<&TypeRef>, pos: RenderPosition) -> ResolvedName {
    let Some(ty) = ty else {
        return ResolvedName::default();
    };

    match ty {
        TypeRef::List { element, required } => {
            let marker = if *required { "[]" } else { "*[]" };
            let inner = resolve_type(
                schema,
                Some(element),
                RenderPosition {
                    top_level: false,
                    ..pos
                },
            );
            ResolvedName {
                text: format!("{marker}{}", inner.text),
                ..inner
            }
        }
        TypeRef::Named { name, required } => resolve_named(schema, name, *required, pos),
    }
}

/// Resolves a declared type's name directly, outside any reference.
#[must_use]
pub fn resolve_name(schema: &Schema, name: &str, pos: RenderPosition) -> ResolvedName {
    resolve_named(schema, name, false, pos)
}

fn resolve_named(schema: &Schema, name: &str, required: bool, pos: RenderPosition) -> ResolvedName {
    let kind = named_kind(schema, name);

    let pointered = match kind {
        NamedKind::Enum => !required && !pos.top_level && !pos.has_default,
        NamedKind::Interface | NamedKind::Union => pos.output,
        NamedKind::InputObject => !required && !pos.output,
        NamedKind::Scalar => !required && !pos.has_default,
        NamedKind::Object => false,
    };
    let prefix = if pointered { "*" } else { "" };

    if let Some(go_type) = builtin_scalar(name) {
        return ResolvedName {
            text: format!("{prefix}{go_type}"),
            needs_declaration: false,
            primitive: true,
        };
    }

    if name.len() > PRIVATE_TYPE_MARKER.len() && name.starts_with(PRIVATE_TYPE_MARKER) {
        // Introspection meta-type: contributes nothing anywhere.
        return ResolvedName::default();
    }

    let suffix = if pos.suffixed && !matches!(kind, NamedKind::Enum) {
        RESOLVER_SUFFIX
    } else {
        ""
    };

    ResolvedName {
        text: format!("{prefix}{name}{suffix}"),
        needs_declaration: true,
        primitive: false,
    }
}

/// Kind of a named reference, with unknown and built-in names treated as
/// scalars.
#[derive(Debug, Clone, Copy)]
enum NamedKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

fn named_kind(schema: &Schema, name: &str) -> NamedKind {
    match schema.get_type(name).map(|td| &td.kind) {
        Some(TypeKind::Object { .. }) => NamedKind::Object,
        Some(TypeKind::Interface { .. }) => NamedKind::Interface,
        Some(TypeKind::Union { .. }) => NamedKind::Union,
        Some(TypeKind::Enum { .. }) => NamedKind::Enum,
        Some(TypeKind::InputObject { .. }) => NamedKind::InputObject,
        Some(TypeKind::Scalar) | None => NamedKind::Scalar,
    }
}

/// Go spelling for the built-in scalar names.
fn builtin_scalar(name: &str) -> Option<&'static str> {
    match name {
        "ID" => Some("graphql.ID"),
        "Time" => Some("graphql.Time"),
        "String" => Some("string"),
        "Float" => Some("float64"),
        "Boolean" => Some("bool"),
        "Int" => Some("int32"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvergen_schema::parse_schema;

    fn test_schema() -> Schema {
        parse_schema(
            r#"
type Query { ok: Boolean }
type Droid { name: String }
interface Character { name: String }
union SearchResult = Droid
enum Color { RED }
input ReviewInput { stars: Int }
scalar Cursor
"#,
        )
        .expect("parse failed")
    }

    fn output(schema: &Schema, ty: &TypeRef) -> String {
        resolve_type(schema, Some(ty), RenderPosition::OUTPUT).text
    }

    #[test]
    fn test_absent_type_resolves_empty() {
        let schema = test_schema();
        let resolved = resolve_type(&schema, None, RenderPosition::OUTPUT);
        assert_eq!(resolved.text, "");
        assert!(!resolved.needs_declaration);
        assert!(!resolved.primitive);
    }

    #[test]
    fn test_scalar_nullability_round_trip() {
        let schema = test_schema();

        // Bare scalar is pointered; non-null drops the pointer.
        assert_eq!(output(&schema, &TypeRef::named("String")), "*string");
        assert_eq!(output(&schema, &TypeRef::named("String").required()), "string");

        // [Int!] : optional sequence of non-optional scalars.
        let list_of_required = TypeRef::list(TypeRef::named("Int").required());
        assert_eq!(output(&schema, &list_of_required), "*[]int32");

        // [Int]! : non-optional sequence of optional scalars.
        let required_list = TypeRef::list(TypeRef::named("Int")).required();
        assert_eq!(output(&schema, &required_list), "[]*int32");
    }

    #[test]
    fn test_builtin_scalar_spellings() {
        let schema = test_schema();
        assert_eq!(output(&schema, &TypeRef::named("ID").required()), "graphql.ID");
        assert_eq!(output(&schema, &TypeRef::named("Time").required()), "graphql.Time");
        assert_eq!(output(&schema, &TypeRef::named("Float").required()), "float64");
        assert_eq!(output(&schema, &TypeRef::named("Boolean").required()), "bool");

        let id = resolve_type(
            &schema,
            Some(&TypeRef::named("ID").required()),
            RenderPosition::OUTPUT,
        );
        assert!(id.primitive);
        assert!(!id.needs_declaration);
    }

    #[test]
    fn test_default_value_suppresses_pointer() {
        let schema = test_schema();
        let resolved = resolve_type(
            &schema,
            Some(&TypeRef::named("Int")),
            RenderPosition::input(true),
        );
        assert_eq!(resolved.text, "int32");

        let without_default = resolve_type(
            &schema,
            Some(&TypeRef::named("Int")),
            RenderPosition::input(false),
        );
        assert_eq!(without_default.text, "*int32");
    }

    #[test]
    fn test_default_value_propagates_into_list_elements() {
        let schema = test_schema();
        let resolved = resolve_type(
            &schema,
            Some(&TypeRef::list(TypeRef::named("Int"))),
            RenderPosition::input(true),
        );
        assert_eq!(resolved.text, "*[]int32");
    }

    #[test]
    fn test_enum_positions() {
        let schema = test_schema();

        // Output position: pointered, never suffixed.
        assert_eq!(output(&schema, &TypeRef::named("Color")), "*Color");
        assert_eq!(output(&schema, &TypeRef::named("Color").required()), "Color");

        // Defaulted argument drops the pointer.
        let defaulted = resolve_type(
            &schema,
            Some(&TypeRef::named("Color")),
            RenderPosition::input(true),
        );
        assert_eq!(defaulted.text, "Color");

        // Entity lookup renders the bare alias name.
        let entity = resolve_name(&schema, "Color", RenderPosition::ENTITY);
        assert_eq!(entity.text, "Color");
        assert!(entity.needs_declaration);
    }

    #[test]
    fn test_interface_and_union_pointer_in_output_only() {
        let schema = test_schema();

        assert_eq!(output(&schema, &TypeRef::named("Character")), "*CharacterResolver");
        // Still pointered when required: resolver holders pass by pointer.
        assert_eq!(
            output(&schema, &TypeRef::named("Character").required()),
            "*CharacterResolver"
        );
        assert_eq!(
            resolve_name(&schema, "SearchResult", RenderPosition::REFERENCE).text,
            "SearchResultResolver"
        );
        assert_eq!(
            resolve_name(&schema, "Character", RenderPosition::PLAIN).text,
            "Character"
        );
    }

    #[test]
    fn test_input_object_positions() {
        let schema = test_schema();

        let arg = resolve_type(
            &schema,
            Some(&TypeRef::named("ReviewInput")),
            RenderPosition::input(false),
        );
        assert_eq!(arg.text, "*ReviewInput");

        let required_arg = resolve_type(
            &schema,
            Some(&TypeRef::named("ReviewInput").required()),
            RenderPosition::input(false),
        );
        assert_eq!(required_arg.text, "ReviewInput");

        assert_eq!(
            resolve_name(&schema, "ReviewInput", RenderPosition::DECLARE).text,
            "ReviewInput"
        );
    }

    #[test]
    fn test_object_never_pointered() {
        let schema = test_schema();
        assert_eq!(output(&schema, &TypeRef::named("Droid")), "DroidResolver");
        assert_eq!(
            output(&schema, &TypeRef::list(TypeRef::named("Droid"))),
            "*[]DroidResolver"
        );
    }

    #[test]
    fn test_custom_scalar_declared_with_suffix() {
        let schema = test_schema();
        let resolved = resolve_type(
            &schema,
            Some(&TypeRef::named("Cursor")),
            RenderPosition::OUTPUT,
        );
        assert_eq!(resolved.text, "*CursorResolver");
        assert!(resolved.needs_declaration);
        assert!(!resolved.primitive);
    }

    #[test]
    fn test_meta_type_suppressed() {
        let schema = test_schema();
        for pos in [
            RenderPosition::ENTITY,
            RenderPosition::OUTPUT,
            RenderPosition::input(false),
        ] {
            let resolved = resolve_name(&schema, "__Schema", pos);
            assert_eq!(resolved.text, "");
            assert!(!resolved.needs_declaration);
        }
    }

    #[test]
    fn test_bare_marker_name_not_suppressed() {
        // Exactly the two-character marker falls through to declaration.
        let schema = test_schema();
        let resolved = resolve_name(&schema, "__", RenderPosition::REFERENCE);
        assert!(resolved.needs_declaration);
        assert_eq!(resolved.text, "*__Resolver");
    }
}
