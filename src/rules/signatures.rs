//! Property signatures and evidence sets.
//!
//! A signature lists numeric and color property names that strongly suggest
//! a kind; each one present on a record adds a fixed weight to that kind's
//! score. Evidence sets are the narrower lists used to confirm that a
//! specialized kind is warranted at all.

use super::TargetKind::{self, *};

/// Property names associated with one kind during scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub kind: TargetKind,
    pub numbers: &'static [&'static str],
    pub colors: &'static [&'static str],
    /// Two colors whose joint presence earns extra matches.
    pub color_pair: Option<(&'static str, &'static str, u32)>,
}

/// Built-in signatures in registration order.
///
/// Deep/shallow colors are deliberately absent: both liquids and
/// refractive materials use them.
pub(crate) const SIGNATURES: &[Signature] = &[
    Signature {
        kind: Liquid,
        numbers: &[
            "_Enable_Shore_Foam",
            "_Enable_Shore_Waves",
            "_Enable_Caustics",
            "_Enable_Ocean_Wave",
            "_Shore_Foam_Intensity",
            "_Water_Depth",
            "_Depth_Distance",
            "_Deep_Height",
            "_Shallow_Intensity",
            "_Shore_Wave_Speed",
            "_Ocean_Wave_Height",
            "_Ocean_Wave_Speed",
            "_Caustics_Intensity",
            "_Maximum_Depth",
            "_Base_Opacity",
            "_Shallows_Opacity",
            "_Very_Deep_Height",
        ],
        colors: &[
            "_Water_Deep_Color",
            "_Water_Shallow_Color",
            "_Foam_Color",
            "_Shore_Wave_Color_Tint",
            "_Shore_Foam_Color_Tint",
            "_Caustics_Color",
        ],
        color_pair: None,
    },
    Signature {
        kind: Vegetation,
        numbers: &[
            "_Enable_Breeze",
            "_Breeze_Strength",
            "_Enable_Light_Wind",
            "_Light_Wind_Strength",
            "_Enable_Strong_Wind",
            "_Strong_Wind_Strength",
            "_Wind_Enabled",
            "_Leaf_Metallic",
            "_Leaf_Smoothness",
            "_Trunk_Metallic",
            "_Trunk_Smoothness",
            "_Frosting_Falloff",
            "_Frosting_Height",
            "_Wind_Twist_Strength",
            "_Gale_Blend",
            "_Light_Wind_Y_Strength",
            "_Light_Wind_Y_Offset",
        ],
        colors: &[
            "_Leaf_Base_Color",
            "_Trunk_Base_Color",
            "_Leaf_Noise_Color",
            "_Trunk_Noise_Color",
            "_Frosting_Color",
            "_Trunk_Emissive_Color",
        ],
        color_pair: None,
    },
    Signature {
        kind: Atmosphere,
        numbers: &[
            "_Cloud_Speed",
            "_Cloud_Strength",
            "_Scattering_Multiplier",
            "_Scattering_Edge_Dist",
            "_Light_Intensity",
            "_Fog_Density",
        ],
        colors: &["_Scattering_Color"],
        color_pair: None,
    },
    Signature {
        kind: Particle,
        numbers: &[
            "_Soft_Power",
            "_Soft_Distance",
            "_Enable_Soft_Particles",
            "_Camera_Fade_Near",
            "_Camera_Fade_Far",
            "_Camera_Fade_Smoothness",
            "_View_Edge_Power",
            "_Enable_Camera_Fade",
        ],
        colors: &[],
        color_pair: None,
    },
    Signature {
        kind: SkyGradient,
        numbers: &["_Falloff", "_Offset", "_Distance"],
        colors: &["_Top_Color", "_Bottom_Color"],
        color_pair: Some(("_Top_Color", "_Bottom_Color", 2)),
    },
    Signature {
        kind: Refractive,
        numbers: &[
            "_Enable_Fresnel",
            "_Enable_Depth",
            "_Enable_Refraction",
            "_Fresnel_Power",
            "_Refraction_Strength",
            "_Opacity",
            "_Deep_Depth",
            "_Shallow_Depth",
        ],
        colors: &["_Fresnel_Color", "_Refraction_Color"],
        color_pair: None,
    },
];

/// Properties that justify a specialized kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evidence {
    pub textures: &'static [&'static str],
    pub numbers: &'static [&'static str],
    pub colors: &'static [&'static str],
}

impl Evidence {
    /// An empty evidence set places no constraint.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.numbers.is_empty() && self.colors.is_empty()
    }
}

/// Evidence sets per specialized kind. `Base` never needs evidence.
pub(crate) const EVIDENCE: &[(TargetKind, Evidence)] = &[
    (
        Vegetation,
        Evidence {
            textures: &[
                "_Leaf_Texture",
                "_Trunk_Texture",
                "_Leaf_Normal",
                "_Trunk_Normal",
                "_Breeze_Noise_Map",
                "_Leaf_Ambient_Occlusion",
                "_Trunk_Ambient_Occlusion",
            ],
            numbers: &[
                "_Breeze_Strength",
                "_Light_Wind_Strength",
                "_Strong_Wind_Strength",
                "_Leaf_Smoothness",
                "_LeafSmoothness",
                "_Trunk_Smoothness",
                "_TrunkSmoothness",
                "_Leaf_Metallic",
                "_Trunk_Metallic",
            ],
            colors: &["_Leaf_Base_Color", "_Trunk_Base_Color"],
        },
    ),
    (
        Refractive,
        Evidence {
            textures: &[
                "_Refraction_Height",
                "_Refraction_Texture",
                "_Top_Albedo",
                "_Base_Albedo",
                "_Top_Normal",
                "_Base_Normal",
            ],
            numbers: &[
                "_Fresnel_Power",
                "_Refraction_Strength",
                "_Deep_Depth",
                "_Shallow_Depth",
                "_Enable_Fresnel",
                "_Enable_Refraction",
            ],
            colors: &["_Deep_Color", "_Shallow_Color", "_Fresnel_Color", "_Refraction_Color"],
        },
    ),
    (
        Liquid,
        Evidence {
            textures: &[
                "_Caustics_Flipbook",
                "_Foam_Noise_Texture",
                "_Shore_Foam_Noise_Texture",
                "_Scrolling_Texture",
                "_Water_Normal_Texture",
                "_Foam_Texture",
            ],
            numbers: &[
                "_Maximum_Depth",
                "_Shore_Wave_Speed",
                "_Ocean_Wave_Height",
                "_Shore_Foam_Intensity",
                "_Caustics_Intensity",
                "_Base_Opacity",
                "_Shallows_Opacity",
            ],
            colors: &[
                "_Shallow_Color",
                "_Deep_Color",
                "_Very_Deep_Color",
                "_Foam_Color",
                "_Caustics_Color",
            ],
        },
    ),
    (
        Particle,
        Evidence {
            textures: &[],
            numbers: &[
                "_Soft_Power",
                "_Soft_Distance",
                "_Camera_Fade_Near",
                "_Camera_Fade_Far",
                "_View_Edge_Power",
                "_Fog_Density",
            ],
            colors: &["_Fog_Color"],
        },
    ),
    (
        SkyGradient,
        Evidence {
            textures: &[],
            numbers: &["_Falloff", "_Offset", "_Distance"],
            colors: &["_Top_Color", "_Bottom_Color"],
        },
    ),
    (
        Atmosphere,
        Evidence {
            textures: &[],
            numbers: &[
                "_Light_Intensity",
                "_Scattering_Multiplier",
                "_Cloud_Speed",
                "_Cloud_Strength",
                "_CloudCoverage",
            ],
            colors: &["_Scattering_Color", "_Aurora_Color_01", "_Aurora_Color_02"],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_no_signature() {
        assert!(SIGNATURES.iter().all(|s| s.kind != Base));
        assert!(EVIDENCE.iter().all(|(k, _)| *k != Base));
    }

    #[test]
    fn test_one_signature_per_kind() {
        for kind in TargetKind::ALL {
            assert!(SIGNATURES.iter().filter(|s| s.kind == kind).count() <= 1);
        }
    }

    #[test]
    fn test_pair_members_are_signature_colors() {
        for sig in SIGNATURES {
            if let Some((a, b, _)) = sig.color_pair {
                assert!(sig.colors.contains(&a) && sig.colors.contains(&b));
            }
        }
    }
}
