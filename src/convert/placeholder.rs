//! Placeholder materials for names with no backing record.

use crate::config::Config;
use crate::detect::Detector;
use crate::mapping::DefaultResolver;
use crate::material::MappedMaterial;
use crate::rules::{RuleTable, TargetKind};

/// Builds a usable material from a name alone.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderSynthesizer<'a> {
    detector: Detector<'a>,
    defaults: DefaultResolver<'a>,
}

impl<'a> PlaceholderSynthesizer<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            detector: Detector::new(rules),
            defaults: DefaultResolver::new(rules),
        }
    }

    pub fn with_config(rules: &'a RuleTable, config: &Config) -> Self {
        Self {
            detector: Detector::with_config(rules, config),
            defaults: DefaultResolver::new(rules),
        }
    }

    /// Name-only classification, `Base` when nothing matches.
    pub fn synthesize(&self, name: &str) -> MappedMaterial {
        let kind = self.detector.detect_from_name(name).unwrap_or(TargetKind::Base);
        self.synthesize_as(name, kind)
    }

    /// Placeholder of a kind the caller already decided.
    pub fn synthesize_as(&self, name: &str, kind: TargetKind) -> MappedMaterial {
        tracing::debug!(material = name, %kind, "synthesizing placeholder");
        let mut mapped = MappedMaterial::new(name, kind);
        mapped.placeholder = true;
        self.defaults.apply_placeholder_defaults(mapped, kind)
    }
}
