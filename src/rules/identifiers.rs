//! Known source shader identifiers.
//!
//! Identifiers are the stable 32-character hex references a source material
//! uses to name its shader program. An identifier mapping to
//! [`TargetKind::Base`] is treated as uninformative by detection.

use super::TargetKind::{self, *};

/// Built-in identifier table, grouped by target kind.
pub(crate) const IDENTIFIERS: &[(&str, TargetKind)] = &[
    // Base
    ("0730dae39bc73f34796280af9875ce14", Base), // PolygonLit
    ("19e269a311c45cd4482cf0ac0e694503", Base), // Triplanar
    ("3b44a38ec6f81134ab0f820ac54d6a93", Base), // Generic_Standard
    ("0835602ed30128f4a88a652bf920fcaa", Base), // Polygon_UVScroll
    ("2b5804ffd3081d344bed894a653e3014", Base), // Hologram
    ("5c2ccdfe181d55b42bd5313305f194e4", Base), // SciFiHorror_Screens
    ("77e5bdd170fa4a4459dea431aba43e3c", Base), // SciFiHorror_Decals
    ("972cd3fede1c33342b0f52ad57f47d90", Base), // SciFiHorror_BlinkingLights
    ("325b924500ba5804aa4b407d80084502", Base), // Neon Shader
    ("0ecc70cac2c8895439f5094ba6660db8", Base), // GrungeTriplanar
    ("5d828b280155912429aa717d34cd8879", Base), // Ghost
    ("62e87ad08a1afa642830420bf8e0dd4d", Base), // CyberCity_Triplanar
    ("2a33a166317493947a7be330dcc78a05", Base), // Parallax_Full
    ("e9556606a5f42464fa7dd78d624dc180", Base), // Hologram_01
    ("a49be8e7504a48b4fba9b0c2a7fad57b", Base), // EmissiveScroll
    ("1f67b66c29dfd4f45aa8cc07bf5e901a", Base), // EmissiveColourChange
    ("a711ca3b984db6a4e81ec2d50ca4c0ca", Base), // Building
    ("5d014726978e80a43b6178cba929343b", Base), // FlipbookCutout
    ("a7331fc07349b124c8c15d545676f9ed", Base), // Zombies
    ("d0be6b296f23e8d459e94b4007017ea0", Base), // Magic Glow/Runes
    ("e8b857c3d7fea464e942e1c1f0940e96", Base), // Magical Portal
    ("e312e3877c798a44dba23093a3417a94", Base), // Liquid/Potion
    ("f3534f26c7b573c45a1346e0634d57fc", Base), // Generic_Basic_Bloody
    ("e17f8fe2503580447a3784d34b316d11", Base), // Triplanar_Basic
    ("933532a4fcc9baf4fa0491de14d08ed7", Base), // Unity URP Lit
    ("0000000000000000f000000000000000", Base), // Unity Built-in
    ("e854bc7dc0cde7044b9000faaf0c4e11", Base), // RockTriplanar
    ("df6b3a02955954d41bb15c534388ba14", Base), // NoFog
    ("ab6da834753539b4989259dbf4bcc39b", Base), // ProRacer_Standard
    ("22e3738818284144eb7ada0a62acca66", Base), // ProRacer_Decal
    ("da24369d453e6a547aaa57ebee28fc81", Base), // ProRacer_CutoutFlipbook
    ("8e5d248915e86014095ff0547bc0c755", Base), // ProRacerAdvanced
    ("1bf4a2dc982313347912f313ba25f563", Base), // RoadSHD
    ("e603b0446c7f2804db0c8dd0fb5c1af0", Base), // POLYGON_CustomCharacters
    // Vegetation
    ("9b98a126c8d4d7a4baeb81b16e4f7b97", Vegetation), // Foliage
    ("dfec08fb273e4674bb5398df25a5932c", Vegetation), // Leaf Card
    ("c48a4461fec61fc45a01e7d6a50e520f", Vegetation), // SciFiPlant
    ("a2cae5b0e99e16249b9a2163a7087bcb", Vegetation), // Wind Animation
    ("4b0390819f518774fa1a44198298459a", Vegetation), // Foliage - Nature 2021
    // Refractive
    ("5808064c5204e554c89f589a7059c558", Refractive), // Crystal
    ("fdea4239d29733541b44cd6960afefcd", Refractive), // Glass
    // Liquid
    ("436db39b4e2ae5e46a17e21865226b19", Liquid), // Water
    ("1ab581f9e0198304996581171522f458", Liquid), // Water - Nature 2021
    ("9b1e1d14d7778714391ae095571c3d4f", Liquid), // WaterFall
    ("903fe97c2d85c8147a64932806c92eb1", Liquid), // Waterfall variant
    // Particle
    ("0736e099ec10c9e46b9551b2337d0cc7", Particle), // Particles
    ("b83105300c9f7fb42a6e1b790fd2bd29", Particle), // ParticlesLit
    ("00eec7c5cd1f4c6429ffee9a690c3d16", Particle), // ParticlesUnlit
    ("56ef766d507df464fb2a1726a99c925f", Particle), // Heat Shimmer
    ("402ae1c33e4c28c45876b1bc945b77e6", Particle), // ProRacer_ParticlesUnlit
    // SkyGradient
    ("de1d86872962c37429cb628a7de53613", SkyGradient), // Skydome
    ("3d532bc2d70158948859b7839127e562", SkyGradient), // Skybox_Generic
    ("74fa94d128fe4f348889c6f5f182e0e1", SkyGradient), // Skydome variant
    ("d2820334f2975bb47ab3f2fffa1b4cbe", SkyGradient), // Aurora
    ("ca9b700964f37d84a90b00c70d981934", SkyGradient), // Aurora
    // Atmosphere
    ("4a6c8c23090929241b2a55476a46a9b1", Atmosphere), // Clouds
];
