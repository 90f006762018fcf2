//! Enum declaration emission.

use crate::go::fields::{write_deprecation, write_description};
use resolvergen_schema::EnumValueDescriptor;

/// Writes an enum as a string alias plus one constant per value.
///
/// Constant identifiers are `<Alias>_<UPPERCASED_VALUE>` and carry the
/// uppercased literal, so resolver code can compare request values
/// directly against the constants.
pub fn write_enum(out: &mut String, alias_name: &str, values: &[EnumValueDescriptor]) {
    out.push_str(&format!("type {alias_name} = string\n"));
    out.push_str("const (\n");

    for value in values {
        write_description(out, "\t", value.description.as_deref());
        write_deprecation(out, "\t", value.deprecation.as_ref());

        let literal = value.name.to_uppercase();
        out.push_str(&format!("\t{alias_name}_{literal} = `{literal}`\n"));
    }

    out.push_str(")\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvergen_schema::Deprecation;

    fn value(name: &str) -> EnumValueDescriptor {
        EnumValueDescriptor {
            name: name.to_string(),
            description: None,
            deprecation: None,
        }
    }

    #[test]
    fn test_enum_alias_and_constants() {
        let mut out = String::new();
        write_enum(&mut out, "Color", &[value("RED"), value("GREEN")]);
        assert_eq!(
            out,
            "type Color = string\n\
             const (\n\
             \tColor_RED = `RED`\n\
             \tColor_GREEN = `GREEN`\n\
             )\n"
        );
    }

    #[test]
    fn test_enum_values_uppercased() {
        let mut out = String::new();
        write_enum(&mut out, "Side", &[value("buy")]);
        assert!(out.contains("\tSide_BUY = `BUY`\n"));
    }

    #[test]
    fn test_enum_value_comments_forwarded() {
        let mut deprecated = value("JEDI");
        deprecated.description = Some("The final episode".to_string());
        deprecated.deprecation = Some(Deprecation { reason: None });

        let mut out = String::new();
        write_enum(&mut out, "Episode", &[deprecated]);
        assert!(out.contains("\t// The final episode\n\t// Deprecated:\n\tEpisode_JEDI = `JEDI`\n"));
    }
}
