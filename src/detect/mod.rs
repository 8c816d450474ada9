//! Shader kind detection.
//!
//! Three tiers, evaluated in order:
//!
//! 1. **Identifier** - the record's shader reference is looked up in the
//!    identifier map. A hit on any kind other than `Base` is final.
//! 2. **Scoring** - every name rule and every property signature adds to a
//!    per-kind score. The best kind wins if it reaches the publish
//!    threshold (20 by default).
//! 3. **Fallback** - `Base`, flagged as low-confidence.
//!
//! Detection is total: it always yields a kind and never errors. The
//! `matched` flag is the only signal that a result deserves review.
//!
//! ## Example
//!
//! ```ignore
//! use matconv::detect::Detector;
//! use matconv::material::MaterialRecord;
//! use matconv::rules::{RuleTable, TargetKind};
//!
//! let rules = RuleTable::builtin();
//! let detector = Detector::new(&rules);
//! let d = detector.detect(&MaterialRecord::new("Dirt_Leaves_Triplanar", "unknown"));
//! assert_eq!(d.kind, TargetKind::Base);
//! assert!(d.matched);
//! ```

mod scoreboard;

pub use scoreboard::Scoreboard;

use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_PUBLISH_THRESHOLD, DEFAULT_SIGNATURE_WEIGHT};
use crate::material::MaterialRecord;
use crate::rules::{RuleTable, TargetKind};

/// Which step produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Exact shader identifier match.
    Identifier,
    /// Weighted name/property scoring.
    Scoring,
    /// Nothing qualified; generic fallback.
    Fallback,
    /// Forced by an external slot hint.
    Hint,
    /// Inherited from the group's reference member.
    Cached,
}

/// Result of classifying one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: TargetKind,
    /// False when the result is a low-confidence fallback.
    pub matched: bool,
    pub tier: Tier,
    /// Winning score for tier-2 decisions, zero otherwise.
    pub score: u32,
}

impl Detection {
    /// A confident decision from `tier`.
    pub fn confident(kind: TargetKind, tier: Tier) -> Self {
        Self { kind, matched: true, tier, score: 0 }
    }

    /// The low-confidence generic fallback.
    pub fn fallback(score: u32) -> Self {
        Self { kind: TargetKind::Base, matched: false, tier: Tier::Fallback, score }
    }
}

/// External hint from the material-list manifest about a slot's shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderHint {
    /// The slot uses the authoring tool's default shader.
    Generic,
    /// The slot is marked as using a custom shader.
    Custom,
}

impl ShaderHint {
    /// Hint from the manifest's "uses custom shader" flag.
    pub fn from_custom_flag(custom: bool) -> Self {
        if custom {
            ShaderHint::Custom
        } else {
            ShaderHint::Generic
        }
    }
}

/// Stateless classifier over a borrowed [`RuleTable`].
#[derive(Clone, Copy, Debug)]
pub struct Detector<'a> {
    rules: &'a RuleTable,
    threshold: u32,
    signature_weight: u32,
}

impl<'a> Detector<'a> {
    /// Detector with the default threshold and signature weight.
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            rules,
            threshold: DEFAULT_PUBLISH_THRESHOLD,
            signature_weight: DEFAULT_SIGNATURE_WEIGHT,
        }
    }

    /// Detector using the config's threshold and signature weight.
    pub fn with_config(rules: &'a RuleTable, config: &Config) -> Self {
        Self {
            rules,
            threshold: config.publish_threshold,
            signature_weight: config.signature_weight,
        }
    }

    /// Rule table this detector reads.
    pub fn rules(&self) -> &'a RuleTable {
        self.rules
    }

    /// Full three-tier detection.
    #[tracing::instrument(level = "debug", skip_all, fields(material = %record.name))]
    pub fn detect(&self, record: &MaterialRecord) -> Detection {
        let identified = self.rules.identifier(&record.shader_ref);
        if let Some(kind) = identified.filter(|k| !k.is_base()) {
            tracing::debug!(%kind, shader_ref = %record.shader_ref, "identifier match");
            return Detection::confident(kind, Tier::Identifier);
        }

        let board = self.score_record(record);
        let best = board.best();
        if let Some((kind, score)) = best.filter(|(_, s)| *s >= self.threshold) {
            tracing::debug!(%kind, score, "scored match");
            return Detection { kind, matched: true, tier: Tier::Scoring, score };
        }

        let score = best.map_or(0, |(_, s)| s);
        tracing::debug!(score, "no kind reached threshold, falling back");
        Detection::fallback(score)
    }

    /// Detection honouring an optional slot hint.
    ///
    /// `Generic` forces `Base` without running any tier; `Custom` or no
    /// hint runs the full detector.
    pub fn detect_with_hint(&self, record: &MaterialRecord, hint: Option<ShaderHint>) -> Detection {
        match hint {
            Some(ShaderHint::Generic) => Detection::confident(TargetKind::Base, Tier::Hint),
            Some(ShaderHint::Custom) | None => self.detect(record),
        }
    }

    /// Name-only scoring. `None` when no kind reaches the threshold.
    pub fn detect_from_name(&self, name: &str) -> Option<TargetKind> {
        self.score_name(name)
            .best()
            .filter(|(_, s)| *s >= self.threshold)
            .map(|(kind, score)| {
                tracing::debug!(material = name, %kind, score, "name match");
                kind
            })
    }

    /// Decision for a slot known only by name plus its custom-shader flag.
    ///
    /// Generic slots are `Base` outright. Custom slots use name scoring and
    /// fall back to an unmatched `Base` when nothing qualifies.
    pub fn determine_from_hint(&self, name: &str, custom: bool) -> Detection {
        if !custom {
            return Detection::confident(TargetKind::Base, Tier::Hint);
        }
        let board = self.score_name(name);
        match board.best() {
            Some((kind, score)) if score >= self.threshold => {
                Detection { kind, matched: true, tier: Tier::Scoring, score }
            }
            best => Detection::fallback(best.map_or(0, |(_, s)| s)),
        }
    }

    /// Score vector from name rules only.
    pub fn score_name(&self, name: &str) -> Scoreboard {
        let mut board = Scoreboard::new();
        self.add_name_scores(&mut board, name);
        board
    }

    /// Score vector from name rules and property signatures.
    pub fn score_record(&self, record: &MaterialRecord) -> Scoreboard {
        let mut board = Scoreboard::new();
        self.add_name_scores(&mut board, &record.name);
        self.add_signature_scores(&mut board, record);
        board
    }

    fn add_name_scores(&self, board: &mut Scoreboard, name: &str) {
        let lowered = name.to_lowercase();
        for (index, rule) in self.rules.name_rules().iter().enumerate() {
            if rule.pattern.matches_lowered(&lowered) {
                board.add(rule.kind, rule.weight, index);
                tracing::trace!(pattern = %rule.pattern, kind = %rule.kind, weight = rule.weight, "name rule hit");
            }
        }
    }

    fn add_signature_scores(&self, board: &mut Scoreboard, record: &MaterialRecord) {
        let base_index = self.rules.name_rules().len();
        for (offset, sig) in self.rules.signatures().iter().enumerate() {
            let mut hits = sig.numbers.iter().filter(|p| record.numbers.contains_key(**p)).count()
                as u32;
            hits += sig.colors.iter().filter(|p| record.colors.contains_key(**p)).count() as u32;
            if let Some((a, b, bonus)) = sig.color_pair {
                if record.colors.contains_key(a) && record.colors.contains_key(b) {
                    hits += bonus;
                }
            }
            if hits > 0 {
                board.add(sig.kind, hits * self.signature_weight, base_index + offset);
                tracing::trace!(kind = %sig.kind, hits, "signature hit");
            }
        }
    }

    /// Whether the record carries any property justifying `kind`.
    ///
    /// Always true for kinds without an evidence set (including `Base`).
    pub fn has_evidence(&self, record: &MaterialRecord, kind: TargetKind) -> bool {
        let ev = self.rules.evidence(kind);
        if ev.is_empty() {
            return true;
        }
        ev.textures.iter().any(|p| record.textures.contains_key(*p))
            || ev.numbers.iter().any(|p| record.numbers.contains_key(*p))
            || ev.colors.iter().any(|p| record.colors.contains_key(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rgba;

    fn rules() -> RuleTable {
        RuleTable::builtin()
    }

    #[test]
    fn test_identifier_wins_over_name() {
        let rules = rules();
        let d = Detector::new(&rules);
        // Water shader id on a material named like a crystal.
        let rec = MaterialRecord::new("Crystal_Triplanar", "436db39b4e2ae5e46a17e21865226b19");
        let det = d.detect(&rec);
        assert_eq!(det.kind, TargetKind::Liquid);
        assert_eq!(det.tier, Tier::Identifier);
        assert!(det.matched);
    }

    #[test]
    fn test_base_identifier_falls_through() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Tree_Leaves_01", "0730dae39bc73f34796280af9875ce14");
        let det = d.detect(&rec);
        assert_eq!(det.kind, TargetKind::Vegetation);
        assert_eq!(det.tier, Tier::Scoring);
    }

    #[test]
    fn test_base_identifier_without_signal_is_unmatched() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Rock_01", "0730dae39bc73f34796280af9875ce14");
        // A generic shader id carries no signal of its own.
        assert_eq!(d.detect(&rec), Detection::fallback(0));
    }

    #[test]
    fn test_unknown_everything_falls_back() {
        let rules = rules();
        let d = Detector::new(&rules);
        let det = d.detect(&MaterialRecord::new("Generic01", "unknown"));
        assert_eq!(det, Detection::fallback(0));
    }

    #[test]
    fn test_below_threshold_reports_score() {
        let rules = rules();
        let d = Detector::new(&rules);
        let det = d.detect(&MaterialRecord::new("Moss_01", "unknown"));
        assert_eq!(det.kind, TargetKind::Base);
        assert!(!det.matched);
        assert_eq!(det.score, 15);
    }

    #[test]
    fn test_compound_name() {
        let rules = rules();
        let d = Detector::new(&rules);
        let board = d.score_name("Dirt_Leaves_Triplanar");
        assert_eq!(board.score(TargetKind::Vegetation), 20);
        assert!(board.score(TargetKind::Base) >= 60);
        let det = d.detect(&MaterialRecord::new("Dirt_Leaves_Triplanar", "unknown"));
        assert_eq!((det.kind, det.matched), (TargetKind::Base, true));
    }

    #[test]
    fn test_property_signature_scoring() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Generic01", "unknown")
            .with_number("_Fresnel_Power", 1.0)
            .with_number("_Refraction_Strength", 1.0);
        let det = d.detect(&rec);
        assert_eq!(det.kind, TargetKind::Refractive);
        assert_eq!(det.score, 20);
        assert!(det.matched);
    }

    #[test]
    fn test_sky_color_pair_bonus() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Backdrop", "unknown")
            .with_color("_Top_Color", rgba(0.2, 0.4, 0.9, 1.0))
            .with_color("_Bottom_Color", rgba(0.9, 0.8, 0.7, 1.0));
        let board = d.score_record(&rec);
        assert_eq!(board.score(TargetKind::SkyGradient), 40);
    }

    #[test]
    fn test_single_signature_hit_below_threshold() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Generic01", "unknown").with_number("_Soft_Power", 1.0);
        let det = d.detect(&rec);
        assert_eq!(det.kind, TargetKind::Base);
        assert!(!det.matched);
    }

    #[test]
    fn test_detect_from_name() {
        let rules = rules();
        let d = Detector::new(&rules);
        assert_eq!(d.detect_from_name("Crystal_Mat_01"), Some(TargetKind::Refractive));
        assert_eq!(d.detect_from_name("Water_River_01"), Some(TargetKind::Liquid));
        assert_eq!(d.detect_from_name("SomeUnknownMaterial"), None);
    }

    #[test]
    fn test_determine_from_hint() {
        let rules = rules();
        let d = Detector::new(&rules);
        let generic = d.determine_from_hint("Crystal_Mat_01", false);
        assert_eq!((generic.kind, generic.matched), (TargetKind::Base, true));
        let custom = d.determine_from_hint("Crystal_Mat_01", true);
        assert_eq!((custom.kind, custom.matched), (TargetKind::Refractive, true));
        let unknown = d.determine_from_hint("UnknownMat", true);
        assert_eq!((unknown.kind, unknown.matched), (TargetKind::Base, false));
    }

    #[test]
    fn test_generic_hint_skips_detection() {
        let rules = rules();
        let d = Detector::new(&rules);
        let rec = MaterialRecord::new("Water_01", "436db39b4e2ae5e46a17e21865226b19");
        let det = d.detect_with_hint(&rec, Some(ShaderHint::Generic));
        assert_eq!(det, Detection::confident(TargetKind::Base, Tier::Hint));
        let det = d.detect_with_hint(&rec, Some(ShaderHint::Custom));
        assert_eq!(det.kind, TargetKind::Liquid);
    }

    #[test]
    fn test_config_threshold() {
        let rules = rules();
        let config = Config { publish_threshold: 50, ..Config::default() };
        let d = Detector::with_config(&rules, &config);
        assert_eq!(d.detect_from_name("Water_01"), None);
        assert_eq!(d.detect_from_name("Rock_Triplanar"), Some(TargetKind::Base));
    }

    #[test]
    fn test_has_evidence() {
        let rules = rules();
        let d = Detector::new(&rules);
        let bucket = MaterialRecord::new("Water_Bucket", "unknown").with_number("_Metallic", 1.0);
        assert!(!d.has_evidence(&bucket, TargetKind::Liquid));
        assert!(d.has_evidence(&bucket, TargetKind::Base));
        let lake = bucket.with_color("_Deep_Color", rgba(0.0, 0.1, 0.3, 1.0));
        assert!(d.has_evidence(&lake, TargetKind::Liquid));
    }
}
