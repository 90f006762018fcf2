//! Per-run generation state.

use crate::error::CodegenError;
use std::collections::BTreeMap;

/// Mutable state scoped to a single generation run.
///
/// Holds the argument-bundle registry. A fresh context is created per run;
/// concurrent generations over different schemas each use their own.
#[derive(Debug, Default)]
pub struct GenContext {
    // Keyed map keeps flush order lexicographic by bundle name.
    bundles: BTreeMap<String, String>,
}

impl GenContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an argument-bundle declaration.
    ///
    /// Re-registering a name with identical text is a no-op: distinct fields
    /// with identical argument shapes share one declaration. Divergent text
    /// under one name means the naming scheme produced a collision and the
    /// run must abort.
    ///
    /// # Errors
    /// Returns `CodegenError::BundleConflict` on a divergent re-registration.
    pub fn register_bundle(&mut self, name: &str, definition: String) -> Result<(), CodegenError> {
        if let Some(existing) = self.bundles.get(name) {
            if *existing != definition {
                return Err(CodegenError::BundleConflict {
                    name: name.to_string(),
                    existing: existing.clone(),
                    new: definition,
                });
            }
            return Ok(());
        }
        self.bundles.insert(name.to_string(), definition);
        Ok(())
    }

    /// Returns the number of registered bundles.
    #[must_use]
    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    /// Writes all registered bundle declarations, ordered by name.
    pub fn write_bundles(&self, out: &mut String) {
        for definition in self.bundles.values() {
            out.push_str(definition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_identical_is_deduplicated() {
        let mut ctx = GenContext::new();
        ctx.register_bundle("FindArguments", "type FindArguments struct {\n}\n\n".to_string())
            .unwrap();
        ctx.register_bundle("FindArguments", "type FindArguments struct {\n}\n\n".to_string())
            .unwrap();
        assert_eq!(ctx.bundle_count(), 1);
    }

    #[test]
    fn test_register_divergent_fails() {
        let mut ctx = GenContext::new();
        ctx.register_bundle("FindArguments", "type FindArguments struct {\n}\n\n".to_string())
            .unwrap();
        let err = ctx.register_bundle(
            "FindArguments",
            "type FindArguments struct {\n\tID graphql.ID\n}\n\n".to_string(),
        );
        assert!(matches!(err, Err(CodegenError::BundleConflict { .. })));
    }

    #[test]
    fn test_write_bundles_sorted_by_name() {
        let mut ctx = GenContext::new();
        ctx.register_bundle("ZetaArguments", "zeta\n".to_string()).unwrap();
        ctx.register_bundle("AlphaArguments", "alpha\n".to_string()).unwrap();

        let mut out = String::new();
        ctx.write_bundles(&mut out);
        assert_eq!(out, "alpha\nzeta\n");
    }
}
