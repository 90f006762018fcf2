//! Schema descriptor model.
//!
//! This module contains the data structures representing a parsed GraphQL
//! schema: the named type descriptors, their fields and input values, and
//! the normalized type references used by the code generator.

use std::collections::HashMap;

/// Built-in scalar names understood without a declaration in the schema.
pub const BUILTIN_SCALARS: [&str; 6] = ["ID", "Time", "String", "Float", "Boolean", "Int"];

/// Returns true if `name` is one of the built-in scalar names.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Complete schema descriptor graph.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Named type descriptors, in document order.
    pub types: Vec<TypeDescriptor>,
    /// Name of the query root type.
    pub query_root: Option<String>,
    /// Name of the mutation root type.
    pub mutation_root: Option<String>,
    /// Name of the subscription root type.
    pub subscription_root: Option<String>,
    /// Type lookup map (built during parsing).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type descriptor to the schema.
    pub fn add_type(&mut self, descriptor: TypeDescriptor) {
        let name = descriptor.name.clone();
        let index = self.types.len();
        self.types.push(descriptor);
        self.type_map.insert(name, index);
    }

    /// Looks up a type descriptor by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name is declared.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    pub(crate) fn get_type_mut(&mut self, name: &str) -> Option<&mut TypeDescriptor> {
        let idx = self.type_map.get(name).copied()?;
        Some(&mut self.types[idx])
    }
}

/// A named schema entity.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Per-kind payload.
    pub kind: TypeKind,
}

/// Type kind variants.
///
/// Wrapper kinds (list, non-null) never appear here: nullability and list
/// nesting are normalized into [`TypeRef`] during parsing, so every
/// descriptor is a named entity.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Scalar type, built-in or custom.
    Scalar,
    /// Object type with output fields.
    Object {
        /// Output fields, in declaration order.
        fields: Vec<FieldDescriptor>,
        /// Names of implemented interfaces.
        interfaces: Vec<String>,
    },
    /// Interface type with output fields and concrete implementors.
    Interface {
        /// Output fields, in declaration order.
        fields: Vec<FieldDescriptor>,
        /// Names of object types implementing this interface,
        /// in object declaration order.
        possible_types: Vec<String>,
    },
    /// Union type over object members.
    Union {
        /// Names of the member object types.
        possible_types: Vec<String>,
    },
    /// Enum type.
    Enum {
        /// Enum values, in declaration order.
        values: Vec<EnumValueDescriptor>,
    },
    /// Input object type.
    InputObject {
        /// Input fields, in declaration order.
        fields: Vec<InputValueDescriptor>,
    },
}

impl TypeKind {
    /// Returns true if this is an object type.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object { .. })
    }

    /// Returns true if this is an interface type.
    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self, Self::Interface { .. })
    }
}

/// A field on an object or interface type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name as declared in the schema.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Deprecation marker, if the field carries `@deprecated`.
    pub deprecation: Option<Deprecation>,
    /// Field arguments, in declaration order.
    pub arguments: Vec<InputValueDescriptor>,
    /// Output type reference.
    pub field_type: TypeRef,
}

/// An argument or input-object field.
#[derive(Debug, Clone)]
pub struct InputValueDescriptor {
    /// Value name as declared in the schema.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Value type reference.
    pub value_type: TypeRef,
    /// Default value as GraphQL literal text, if one was declared.
    pub default_value: Option<String>,
}

/// A value of an enum type.
#[derive(Debug, Clone)]
pub struct EnumValueDescriptor {
    /// Value name as declared in the schema.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Deprecation marker, if the value carries `@deprecated`.
    pub deprecation: Option<Deprecation>,
}

/// Deprecation marker from the `@deprecated` directive.
#[derive(Debug, Clone)]
pub struct Deprecation {
    /// Reason argument of the directive, if given.
    pub reason: Option<String>,
}

/// Normalized type reference.
///
/// Nullability is explicit per node: `required` is true where the schema
/// wrapped the node in a non-null wrapper. A list element carries its own
/// flag, so `[Int!]` and `[Int]!` normalize to distinct shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Reference to a named type.
    Named {
        /// Target type name.
        name: String,
        /// True if the reference was non-null.
        required: bool,
    },
    /// List over an element type.
    List {
        /// Element type reference.
        element: Box<TypeRef>,
        /// True if the list itself was non-null.
        required: bool,
    },
}

impl TypeRef {
    /// Creates a nullable named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            required: false,
        }
    }

    /// Creates a nullable list over `element`.
    #[must_use]
    pub fn list(element: TypeRef) -> Self {
        Self::List {
            element: Box::new(element),
            required: false,
        }
    }

    /// Returns this reference with its `required` flag set.
    #[must_use]
    pub fn required(mut self) -> Self {
        match &mut self {
            Self::Named { required, .. } | Self::List { required, .. } => *required = true,
        }
        self
    }

    /// Returns true if this node is non-null.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        match self {
            Self::Named { required, .. } | Self::List { required, .. } => *required,
        }
    }

    /// Returns the innermost named type, unwrapping lists.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { element, .. } => element.base_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_lookup() {
        let mut schema = Schema::new();
        schema.add_type(TypeDescriptor {
            name: "Color".to_string(),
            description: None,
            kind: TypeKind::Enum { values: Vec::new() },
        });

        assert!(schema.has_type("Color"));
        assert!(schema.get_type("Color").is_some());
        assert!(schema.get_type("Shade").is_none());
    }

    #[test]
    fn test_type_ref_required() {
        let r = TypeRef::named("Int").required();
        assert!(r.is_required());
        assert_eq!(r.base_name(), "Int");
    }

    #[test]
    fn test_type_ref_list_shapes() {
        // [Int!] and [Int]! carry the flag on different nodes.
        let list_of_required = TypeRef::list(TypeRef::named("Int").required());
        let required_list = TypeRef::list(TypeRef::named("Int")).required();

        assert!(!list_of_required.is_required());
        assert!(required_list.is_required());
        assert_ne!(list_of_required, required_list);
    }

    #[test]
    fn test_builtin_scalars() {
        assert!(is_builtin_scalar("ID"));
        assert!(is_builtin_scalar("Time"));
        assert!(!is_builtin_scalar("Cursor"));
    }
}
