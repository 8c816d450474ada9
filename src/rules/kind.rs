//! Target shader kinds and per-kind storage.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::Error;

/// Closed set of target shader programs a material can be assigned to.
///
/// Declaration order is significant: it is the index order used by
/// [`PerKind`] and the order kinds are reported in summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// General-purpose surface (props, terrain, characters, triplanar).
    Base,
    /// Trees, ferns, grass with wind animation.
    Vegetation,
    /// Crystal, gems and glass.
    Refractive,
    /// Water surfaces.
    Liquid,
    /// Particle effects.
    Particle,
    /// Procedural sky gradient (skydome).
    SkyGradient,
    /// Clouds, fog and aurora.
    Atmosphere,
}

impl TargetKind {
    /// Number of kinds.
    pub const COUNT: usize = 7;

    /// All kinds in declaration order.
    pub const ALL: [TargetKind; Self::COUNT] = [
        TargetKind::Base,
        TargetKind::Vegetation,
        TargetKind::Refractive,
        TargetKind::Liquid,
        TargetKind::Particle,
        TargetKind::SkyGradient,
        TargetKind::Atmosphere,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name, as used in config files and JSON.
    pub const fn name(self) -> &'static str {
        match self {
            TargetKind::Base => "base",
            TargetKind::Vegetation => "vegetation",
            TargetKind::Refractive => "refractive",
            TargetKind::Liquid => "liquid",
            TargetKind::Particle => "particle",
            TargetKind::SkyGradient => "sky_gradient",
            TargetKind::Atmosphere => "atmosphere",
        }
    }

    /// File name of the target shader program for this kind.
    pub const fn shader_file(self) -> &'static str {
        match self {
            TargetKind::Base => "polygon.gdshader",
            TargetKind::Vegetation => "foliage.gdshader",
            TargetKind::Refractive => "crystal.gdshader",
            TargetKind::Liquid => "water.gdshader",
            TargetKind::Particle => "particles.gdshader",
            TargetKind::SkyGradient => "skydome.gdshader",
            TargetKind::Atmosphere => "clouds.gdshader",
        }
    }

    /// Whether this is the generic fallback kind.
    #[inline]
    pub const fn is_base(self) -> bool {
        matches!(self, TargetKind::Base)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    /// Accepts the snake-case name or the shader file name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TargetKind::ALL
            .into_iter()
            .find(|k| needle.eq_ignore_ascii_case(k.name()) || needle == k.shader_file())
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// Fixed-size storage with one slot per [`TargetKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerKind<T>([T; TargetKind::COUNT]);

impl<T> PerKind<T> {
    /// Build by calling `f` for every kind in declaration order.
    pub fn from_fn(mut f: impl FnMut(TargetKind) -> T) -> Self {
        Self(std::array::from_fn(|i| f(TargetKind::ALL[i])))
    }

    /// Iterate `(kind, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetKind, &T)> {
        TargetKind::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Default> Default for PerKind<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<TargetKind> for PerKind<T> {
    type Output = T;

    #[inline]
    fn index(&self, kind: TargetKind) -> &T {
        &self.0[kind.index()]
    }
}

impl<T> IndexMut<TargetKind> for PerKind<T> {
    #[inline]
    fn index_mut(&mut self, kind: TargetKind) -> &mut T {
        &mut self.0[kind.index()]
    }
}
