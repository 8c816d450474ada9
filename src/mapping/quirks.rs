//! Source-format quirk correction.

use crate::material::MaterialRecord;
use crate::rules::{RuleTable, TRANSPARENCY_MODE_PROPERTY};
use crate::util::{has_rgb, with_alpha, Rgba};

/// Repairs zero-alpha colors and names boolean-encoded numbers.
#[derive(Clone, Copy, Debug)]
pub struct QuirkCorrector<'a> {
    rules: &'a RuleTable,
}

impl<'a> QuirkCorrector<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Force alpha to 1.0 on a known-opaque property that arrived with
    /// `alpha == 0.0` and non-black RGB. Anything else passes through.
    #[inline]
    pub fn fix_alpha(&self, color: Rgba, src_name: &str) -> Rgba {
        if color.w == 0.0 && has_rgb(color) && self.rules.is_alpha_fix(src_name) {
            tracing::debug!(property = src_name, "alpha 0 -> 1");
            return with_alpha(color, 1.0);
        }
        color
    }

    /// Boolean carried by a numeric property, if the property is one.
    #[inline]
    pub fn extract_bool(&self, src_name: &str, value: f32) -> Option<bool> {
        self.rules.is_boolean_number(src_name).then_some(value != 0.0)
    }
}

/// True if the record renders in cutout, fade or transparent mode.
pub fn uses_transparent_mode(record: &MaterialRecord) -> bool {
    record
        .numbers
        .get(TRANSPARENCY_MODE_PROPERTY)
        .is_some_and(|mode| *mode >= 1.0)
}

/// Target-style name derived from a source property name.
///
/// Leading underscores are dropped, an underscore goes before every
/// uppercase letter except the first character, and runs of underscores
/// collapse to one: `_Enable_Breeze` -> `enable_breeze`, `_AlphaClip` ->
/// `alpha_clip`, `_Enable_AO` -> `enable_a_o`.
pub fn derive_target_name(src_name: &str) -> String {
    let trimmed = src_name.trim_start_matches('_');
    let mut out = String::with_capacity(trimmed.len() * 2);
    for (i, c) in trimmed.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 && !out.ends_with('_') {
            out.push('_');
        }
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rgba;

    #[test]
    fn test_fix_alpha_on_listed_property() {
        let rules = RuleTable::builtin();
        let q = QuirkCorrector::new(&rules);
        let fixed = q.fix_alpha(rgba(0.5, 0.5, 0.5, 0.0), "_Color");
        assert_eq!(fixed, rgba(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_fix_alpha_leaves_black_and_partial() {
        let rules = RuleTable::builtin();
        let q = QuirkCorrector::new(&rules);
        let black = rgba(0.0, 0.0, 0.0, 0.0);
        assert_eq!(q.fix_alpha(black, "_Color"), black);
        let glass = rgba(0.5, 0.7, 1.0, 0.3);
        assert_eq!(q.fix_alpha(glass, "_Color"), glass);
    }

    #[test]
    fn test_fix_alpha_ignores_unlisted_property() {
        let rules = RuleTable::builtin();
        let q = QuirkCorrector::new(&rules);
        let fog = rgba(0.6, 0.6, 0.7, 0.0);
        assert_eq!(q.fix_alpha(fog, "_Fog_Color"), fog);
    }

    #[test]
    fn test_extract_bool() {
        let rules = RuleTable::builtin();
        let q = QuirkCorrector::new(&rules);
        assert_eq!(q.extract_bool("_Enable_Snow", 1.0), Some(true));
        assert_eq!(q.extract_bool("_Enable_Snow", 0.0), Some(false));
        assert_eq!(q.extract_bool("_Smoothness", 1.0), None);
    }

    #[test]
    fn test_transparent_mode() {
        let opaque = MaterialRecord::new("a", "x").with_number("_Mode", 0.0);
        let fade = MaterialRecord::new("b", "x").with_number("_Mode", 2.0);
        assert!(!uses_transparent_mode(&opaque));
        assert!(uses_transparent_mode(&fade));
        assert!(!uses_transparent_mode(&MaterialRecord::default()));
    }

    #[test]
    fn test_derive_target_name() {
        assert_eq!(derive_target_name("_Enable_Breeze"), "enable_breeze");
        assert_eq!(derive_target_name("_AlphaClip"), "alpha_clip");
        assert_eq!(derive_target_name("_VertexOffset_Toggle"), "vertex_offset_toggle");
    }

    #[test]
    fn test_derive_target_name_splits_every_capital() {
        assert_eq!(derive_target_name("_Enable_UV_Based"), "enable_u_v_based");
        assert_eq!(derive_target_name("_Enable_AO"), "enable_a_o");
        assert_eq!(derive_target_name("_Enable_UV_Distortion"), "enable_u_v_distortion");
    }

    #[test]
    fn test_derive_target_name_collapses_but_keeps_trailing() {
        assert_eq!(derive_target_name("__Wind__Enabled_"), "wind_enabled_");
    }
}
