//! Per-kind default values.
//!
//! Defaults fill target properties a source material omitted. They never
//! replace a value the mapper produced, including explicit zeros.

use super::TargetKind::{self, *};
use crate::material::Value::{self, *};
use crate::util::rgba;

/// Backfill table, keyed by target name.
pub(crate) const DEFAULTS: &[(TargetKind, &[(&str, Value)])] = &[
    (Refractive, &[("opacity", Number(0.7))]),
    (
        Vegetation,
        &[
            ("leaf_smoothness", Number(0.1)),
            ("trunk_smoothness", Number(0.15)),
            ("leaf_metallic", Number(0.0)),
            ("trunk_metallic", Number(0.0)),
        ],
    ),
    (Liquid, &[("smoothness", Number(0.95)), ("metallic", Number(0.0))]),
    (Base, &[("smoothness", Number(0.5)), ("metallic", Number(0.0))]),
];

/// Starter values for placeholders, on top of [`DEFAULTS`].
pub(crate) const PLACEHOLDER_PALETTE: &[(TargetKind, &[(&str, Value)])] = &[
    (
        Refractive,
        &[
            ("base_color", Color(rgba(0.5, 0.7, 1.0, 1.0))),
            ("enable_fresnel", Bool(true)),
        ],
    ),
    (
        Liquid,
        &[
            ("deep_color", Color(rgba(0.0, 0.2, 0.4, 1.0))),
            ("shallow_color", Color(rgba(0.2, 0.5, 0.7, 1.0))),
        ],
    ),
    (Vegetation, &[("leaf_base_color", Color(rgba(0.2, 0.5, 0.2, 1.0)))]),
];
