//! Weighted material-name patterns.
//!
//! Every rule is evaluated against the lowercased material name and all
//! matches accumulate, so a name can contribute to several kinds at once.
//! Weights are tiered: rendering-technique terms (55-60) outrank clear
//! material types (45), common material types (35), generic vegetation
//! terms (20-25) and ambiguous terms (15).

use std::fmt;

use super::TargetKind::{self, *};

/// Case-insensitive name matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamePattern {
    /// Matches when any term is a substring of the name.
    Terms(&'static [&'static str]),
    /// Matches `head` followed by `tail`, with at most one character between.
    Spaced {
        head: &'static str,
        tail: &'static str,
    },
}

impl NamePattern {
    /// Test against a name that is already lowercased.
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        match *self {
            NamePattern::Terms(terms) => terms.iter().any(|t| lowered.contains(t)),
            NamePattern::Spaced { head, tail } => {
                lowered.match_indices(head).any(|(pos, _)| {
                    let rest = &lowered[pos + head.len()..];
                    if rest.starts_with(tail) {
                        return true;
                    }
                    let mut chars = rest.chars();
                    match chars.next() {
                        Some(c) if c != '\n' => chars.as_str().starts_with(tail),
                        _ => false,
                    }
                })
            }
        }
    }

    /// Test against an arbitrary name.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_lowered(&name.to_lowercase())
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePattern::Terms(terms) => write!(f, "{}", terms.join("|")),
            NamePattern::Spaced { head, tail } => write!(f, "{head}?{tail}"),
        }
    }
}

/// One weighted name rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameRule {
    pub pattern: NamePattern,
    pub kind: TargetKind,
    pub weight: u32,
}

const fn terms(kind: TargetKind, weight: u32, terms: &'static [&'static str]) -> NameRule {
    NameRule { pattern: NamePattern::Terms(terms), kind, weight }
}

/// Built-in name rules in registration order.
pub(crate) const NAME_RULES: &[NameRule] = &[
    // Rendering techniques and optics
    terms(Base, 60, &["triplanar"]),
    terms(Liquid, 55, &["caustics"]),
    terms(Refractive, 55, &["fresnel", "refractive", "refraction"]),
    NameRule {
        pattern: NamePattern::Spaced { head: "soft", tail: "particle" },
        kind: Particle,
        weight: 55,
    },
    terms(SkyGradient, 55, &["skydome", "sky_dome", "skybox", "sky_box"]),
    // Clear material types
    terms(
        Refractive,
        45,
        &["crystal", "gem", "jewel", "diamond", "ruby", "emerald", "sapphire", "amethyst", "quartz"],
    ),
    terms(Liquid, 45, &["water", "ocean", "river", "lake", "waterfall"]),
    terms(Particle, 45, &["particle", "fx_"]),
    terms(Atmosphere, 45, &["cloud", "clouds", "sky_cloud"]),
    // Common material types
    terms(Refractive, 35, &["glass", "ice", "transparent", "translucent"]),
    terms(Liquid, 35, &["pond", "stream", "liquid", "aqua", "sea"]),
    terms(Atmosphere, 35, &["fog", "mist", "atmosphere"]),
    terms(
        Particle,
        35,
        &["spark", "dust", "debris", "smoke", "fire", "rain", "snow", "splash"],
    ),
    terms(SkyGradient, 35, &["aurora", "sky_gradient"]),
    terms(Vegetation, 35, &["foliage", "vegetation"]),
    // Generic vegetation terms
    terms(
        Vegetation,
        25,
        &[
            "tree", "fern", "grass", "vine", "branch", "willow", "bush", "shrub", "hedge",
            "bamboo", "koru", "treefern",
        ],
    ),
    terms(Vegetation, 20, &["leaf", "leaves"]),
    terms(Vegetation, 20, &["bark", "trunk", "undergrowth", "plant"]),
    // Ambiguous terms
    terms(Base, 15, &["moss", "dirt"]),
    terms(Particle, 15, &["effect", "additive"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_case_insensitive() {
        let p = NamePattern::Terms(&["triplanar"]);
        assert!(p.matches("Rock_TriPlanar_01"));
        assert!(!p.matches("Rock_01"));
    }

    #[test]
    fn test_spaced_pattern() {
        let p = NamePattern::Spaced { head: "soft", tail: "particle" };
        assert!(p.matches("FX_SoftParticle"));
        assert!(p.matches("Soft_Particle_01"));
        assert!(p.matches("soft particle"));
        assert!(!p.matches("Soft__Particle"));
        assert!(!p.matches("Particle_Soft"));
    }

    #[test]
    fn test_rule_weights_positive() {
        assert!(NAME_RULES.iter().all(|r| r.weight > 0));
    }

    #[test]
    fn test_display() {
        let p = NamePattern::Terms(&["leaf", "leaves"]);
        assert_eq!(p.to_string(), "leaf|leaves");
    }
}
