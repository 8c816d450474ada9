//! Default backfill.

use crate::material::{MappedMaterial, Value};
use crate::rules::{RuleTable, TargetKind};

/// Fills target properties the source left out.
#[derive(Clone, Copy, Debug)]
pub struct DefaultResolver<'a> {
    rules: &'a RuleTable,
}

impl<'a> DefaultResolver<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Insert each default of `kind` whose name is absent from every value
    /// bucket. Present values win, zeros and `false` included, so applying
    /// twice is the same as applying once.
    pub fn apply_defaults(&self, mapped: MappedMaterial, kind: TargetKind) -> MappedMaterial {
        fill_absent(mapped, self.rules.defaults(kind))
    }

    /// Like [`apply_defaults`](Self::apply_defaults), plus the starter
    /// palette given to synthesized placeholders.
    pub fn apply_placeholder_defaults(
        &self,
        mapped: MappedMaterial,
        kind: TargetKind,
    ) -> MappedMaterial {
        let mapped = self.apply_defaults(mapped, kind);
        fill_absent(mapped, self.rules.placeholder_palette(kind))
    }
}

fn fill_absent(mut mapped: MappedMaterial, values: &[(&'static str, Value)]) -> MappedMaterial {
    for (name, value) in values {
        if !mapped.has_value(name) {
            tracing::debug!(material = %mapped.name, property = *name, "default applied");
            mapped.insert_value(*name, *value);
        }
    }
    mapped
}
