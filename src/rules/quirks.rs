//! Source-format quirk tables.
//!
//! The authoring tool zeroes the alpha of many logically opaque colors and
//! stores toggles as `0.0`/`1.0` numbers. These lists name the properties
//! known to be affected.

/// Color properties whose `alpha == 0.0` with non-zero RGB is a defect.
pub(crate) const ALPHA_FIX_PROPERTIES: &[&str] = &[
    "_Base_Color",
    "_Base_Color_Multiplier",
    "_Top_Color_Multiplier",
    "_Deep_Color",
    "_Shallow_Color",
    "_Fresnel_Color",
    "_Refraction_Color",
    "_Water_Deep_Color",
    "_Water_Shallow_Color",
    "_Water_Near_Color",
    "_Water_Far_Color",
    "_Foam_Color",
    "_Caustics_Color",
    "_CausticColour",
    "_Shore_Foam_Color_Tint",
    "_Shore_Wave_Color_Tint",
    "_WaterDeepColor",
    "_WaterShallowColor",
    "_WaterColour",
    "_FresnelColour",
    "_Very_Deep_Color",
    "_ShallowColour",
    "_DeepColour",
    "_VeryDeepColour",
    "_FoamEmitColour",
    "_DepthGlowColour",
    "_Leaf_Base_Color",
    "_Trunk_Base_Color",
    "_Emissive_Color",
    "_Emissive_2_Color",
    "_Trunk_Emissive_Color",
    "_Frosting_Color",
    "_Neon_Colour_01",
    "_Neon_Colour_02",
    "_Glow_Colour",
    "_Glow_Tint",
    "_RimColor",
    "_Hologram_Color",
    "_BloodColor",
    "_Blood_Color",
    "_Dust_Colour",
    "_Color",
    "_BaseColor",
    "_BaseColour",
    "_Color_Tint",
    "_ColorTint",
    "_Hair_Color",
    "_Skin_Color",
    "_Snow_Color",
    "_Emission_Color",
    "_EmissionColor",
    "_Liquid_Color",
    "_Top_Color",
    "_Bottom_Color",
    "_Scattering_Color",
    "_Aurora_Color_01",
    "_Aurora_Color_02",
    "_Color_Primary",
    "_Color_Secondary",
    "_Color_Tertiary",
    "_Color_Metal_Primary",
    "_Color_Metal_Secondary",
    "_Color_Metal_Dark",
    "_Color_Leather_Primary",
    "_Color_Leather_Secondary",
    "_Color_Skin",
    "_Color_Hair",
    "_Color_Eyes",
    "_Color_Stubble",
    "_Color_Scar",
    "_Color_BodyArt",
    "_Leaf_Noise_Color",
    "_Trunk_Noise_Color",
];

/// Numeric properties that actually hold booleans.
pub(crate) const BOOLEAN_NUMERIC_PROPERTIES: &[&str] = &[
    "_Enable_Breeze",
    "_Enable_Light_Wind",
    "_Enable_Strong_Wind",
    "_Enable_Wind_Twist",
    "_Enable_Frosting",
    "_Wind_Enabled",
    "_Leaves_Wave",
    "_Tree_Wave",
    "_Enable_Fresnel",
    "_Enable_Side_Fresnel",
    "_Enable_Depth",
    "_Enable_Refraction",
    "_Enable_Triplanar",
    "_Enable_Triplanar_Texture",
    "_Enable_Snow",
    "_Enable_Emission",
    "_Enable_Normals",
    "_AlphaClip",
    "_Enable_Hologram",
    "_Enable_Ghost",
    "_Use_Metallic_Map",
    "_Use_Weather_Controller",
    "_Use_Vertex_Color_Wind",
    "_Randomize_Flipbook_From_Location",
    "_Enable_UV_Distortion",
    "_Enable_Brightness_Breakup",
    "_Enable_Wave",
    "_Enable_Detail_Map",
    "_Enable_Parallax",
    "_Enable_AO",
    "_Enable_Shore_Wave_Foam",
    "_Enable_Shore_Foam",
    "_Enable_Shore_Waves",
    "_Enable_Ocean_Waves",
    "_Enable_Ocean_Wave",
    "_Enable_Caustics",
    "_Enable_Distortion",
    "_VertexOffset_Toggle",
    "_Enable_Soft_Particles",
    "_Enable_Camera_Fade",
    "_Enable_Scene_Fog",
    "_Enable_UV_Based",
    "_Use_Environment_Override",
    "_Enable_Fog",
    "_Enable_Scattering",
];

/// Numeric property selecting the source rendering mode.
///
/// Values `>= 1.0` (cutout, fade, transparent) make low alphas intentional.
pub const TRANSPARENCY_MODE_PROPERTY: &str = "_Mode";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quirk_sets_disjoint() {
        for name in ALPHA_FIX_PROPERTIES {
            assert!(!BOOLEAN_NUMERIC_PROPERTIES.contains(name));
        }
    }

    #[test]
    fn test_quirk_sets_unique() {
        let mut sorted = ALPHA_FIX_PROPERTIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALPHA_FIX_PROPERTIES.len());
    }
}
