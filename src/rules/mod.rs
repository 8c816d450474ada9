//! Static rule tables driving classification and mapping.
//!
//! The [`RuleTable`] bundles everything the engine consults:
//!
//! - identifier map: exact source shader reference -> kind
//! - name rules: weighted, case-insensitive name patterns
//! - signatures: property names that vote for a kind
//! - property maps: per-kind source -> target name translation
//! - quirk sets: zero-alpha colors and boolean-encoded numbers
//! - defaults: per-kind backfill values
//!
//! A table is built once per run and never mutated afterwards; it is
//! `Send + Sync` and can be shared freely between workers.
//!
//! ## Registration order
//!
//! Name rules are registered first, in declaration order, followed by the
//! signatures. Detection breaks score ties in favour of the kind whose
//! earliest contributing rule was registered first.

mod defaults;
mod identifiers;
mod kind;
mod patterns;
mod properties;
mod quirks;
mod signatures;

pub use kind::{PerKind, TargetKind};
pub use patterns::{NamePattern, NameRule};
pub use properties::PropertyMap;
pub use quirks::TRANSPARENCY_MODE_PROPERTY;
pub use signatures::{Evidence, Signature};

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::config::Config;
use crate::material::Value;
use crate::util::Result;

/// Immutable rule data for one conversion run.
#[derive(Clone, Debug)]
pub struct RuleTable {
    identifiers: HashMap<String, TargetKind>,
    name_rules: Vec<NameRule>,
    signatures: Vec<Signature>,
    property_maps: PerKind<PropertyMap>,
    alpha_fix: HashSet<&'static str>,
    boolean_numbers: HashSet<&'static str>,
    defaults: PerKind<Vec<(&'static str, Value)>>,
    placeholder_palette: PerKind<Vec<(&'static str, Value)>>,
    evidence: PerKind<Evidence>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleTable {
    /// Build the built-in tables.
    pub fn builtin() -> Self {
        let mut defaults: PerKind<Vec<(&'static str, Value)>> = PerKind::default();
        for (kind, values) in defaults::DEFAULTS {
            defaults[*kind].extend_from_slice(values);
        }
        let mut placeholder_palette: PerKind<Vec<(&'static str, Value)>> = PerKind::default();
        for (kind, values) in defaults::PLACEHOLDER_PALETTE {
            placeholder_palette[*kind].extend_from_slice(values);
        }
        let mut evidence: PerKind<Evidence> = PerKind::default();
        for (kind, ev) in signatures::EVIDENCE {
            evidence[*kind] = *ev;
        }

        Self {
            identifiers: identifiers::IDENTIFIERS
                .iter()
                .map(|(id, kind)| (id.to_string(), *kind))
                .collect(),
            name_rules: patterns::NAME_RULES.to_vec(),
            signatures: signatures::SIGNATURES.to_vec(),
            property_maps: PerKind::from_fn(PropertyMap::layered),
            alpha_fix: quirks::ALPHA_FIX_PROPERTIES.iter().copied().collect(),
            boolean_numbers: quirks::BOOLEAN_NUMERIC_PROPERTIES.iter().copied().collect(),
            defaults,
            placeholder_palette,
            evidence,
        }
    }

    /// Built-in tables with the configuration's identifier overrides applied.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut table = Self::builtin();
        for (id, kind) in &config.extra_identifiers {
            if let Some(prev) = table.identifiers.insert(id.clone(), *kind) {
                if prev != *kind {
                    tracing::debug!(identifier = %id, from = %prev, to = %kind, "identifier override");
                }
            }
        }
        Ok(table)
    }

    /// Exact identifier lookup.
    #[inline]
    pub fn identifier(&self, shader_ref: &str) -> Option<TargetKind> {
        self.identifiers.get(shader_ref).copied()
    }

    /// Name rules in registration order.
    pub fn name_rules(&self) -> &[NameRule] {
        &self.name_rules
    }

    /// Signatures in registration order (after all name rules).
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Translation tables for `kind`.
    #[inline]
    pub fn property_map(&self, kind: TargetKind) -> &PropertyMap {
        &self.property_maps[kind]
    }

    /// Whether a color property suffers the zero-alpha defect.
    #[inline]
    pub fn is_alpha_fix(&self, name: &str) -> bool {
        self.alpha_fix.contains(name)
    }

    /// Whether a numeric property is really a boolean.
    #[inline]
    pub fn is_boolean_number(&self, name: &str) -> bool {
        self.boolean_numbers.contains(name)
    }

    /// Backfill values for `kind`.
    pub fn defaults(&self, kind: TargetKind) -> &[(&'static str, Value)] {
        &self.defaults[kind]
    }

    /// Extra starter values for placeholders of `kind`.
    pub fn placeholder_palette(&self, kind: TargetKind) -> &[(&'static str, Value)] {
        &self.placeholder_palette[kind]
    }

    /// Properties justifying a specialized `kind`.
    pub fn evidence(&self, kind: TargetKind) -> &Evidence {
        &self.evidence[kind]
    }

    /// Counts describing the loaded tables.
    pub fn summary(&self) -> RuleSummary {
        let mut identifiers_per_kind = BTreeMap::new();
        for kind in self.identifiers.values() {
            *identifiers_per_kind.entry(*kind).or_insert(0) += 1;
        }
        RuleSummary {
            identifiers: self.identifiers.len(),
            identifiers_per_kind,
            name_rules: self.name_rules.len(),
            signatures: self.signatures.len(),
            alpha_fix_properties: self.alpha_fix.len(),
            boolean_properties: self.boolean_numbers.len(),
        }
    }
}

/// Table sizes, as reported by [`RuleTable::summary`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub identifiers: usize,
    pub identifiers_per_kind: BTreeMap<TargetKind, usize>,
    pub name_rules: usize,
    pub signatures: usize,
    pub alpha_fix_properties: usize,
    pub boolean_properties: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_summary() {
        let s = RuleTable::builtin().summary();
        assert_eq!(s.identifiers, 56);
        assert_eq!(s.name_rules, 20);
        assert_eq!(s.signatures, 6);
        assert_eq!(s.identifiers_per_kind[&TargetKind::Atmosphere], 1);
        assert_eq!(s.identifiers_per_kind.values().sum::<usize>(), s.identifiers);
    }

    #[test]
    fn test_lookups() {
        let rules = RuleTable::builtin();
        assert_eq!(
            rules.identifier("5808064c5204e554c89f589a7059c558"),
            Some(TargetKind::Refractive)
        );
        assert_eq!(rules.identifier("unknown"), None);
        assert!(rules.is_alpha_fix("_Color"));
        assert!(!rules.is_alpha_fix("_Fog_Color"));
        assert!(rules.is_boolean_number("_Enable_Snow"));
        assert!(!rules.is_boolean_number("_Smoothness"));
        assert!(rules.defaults(TargetKind::Particle).is_empty());
        assert!(rules.evidence(TargetKind::Base).is_empty());
    }

    #[test]
    fn test_config_identifier_override() {
        let mut config = Config::default();
        config
            .extra_identifiers
            .insert("0730dae39bc73f34796280af9875ce14".into(), TargetKind::Liquid);
        config
            .extra_identifiers
            .insert("feedfacefeedfacefeedfacefeedface".into(), TargetKind::Particle);
        let rules = RuleTable::with_config(&config).unwrap();
        assert_eq!(
            rules.identifier("0730dae39bc73f34796280af9875ce14"),
            Some(TargetKind::Liquid)
        );
        assert_eq!(
            rules.identifier("feedfacefeedfacefeedfacefeedface"),
            Some(TargetKind::Particle)
        );
        assert_eq!(rules.summary().identifiers, 57);
    }
}
