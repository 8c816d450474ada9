//! # matconv
//!
//! Shader classification and property mapping for material conversion.
//!
//! Given a source material record (a shader reference plus named texture,
//! numeric and color properties) the engine decides which of seven target
//! shader programs the material should use and rewrites its properties
//! into that program's naming scheme, correcting known source-format
//! quirks and backfilling sensible defaults.
//!
//! ## Modules
//!
//! - [`util`] - Error type and color helpers
//! - [`rules`] - Target kinds and the static rule tables
//! - [`material`] - Source records and mapped output
//! - [`detect`] - Three-tier shader kind detection
//! - [`mapping`] - Property translation, quirk correction, defaults
//! - [`cache`] - Cross-mesh consistency cache and group keys
//! - [`convert`] - Run orchestration, placeholders and statistics
//! - [`config`] - Engine configuration
//!
//! ## Example
//!
//! ```ignore
//! use matconv::prelude::*;
//!
//! let converter = Converter::default();
//! let record = MaterialRecord::new("Water_River_01", "unknown")
//!     .with_number("_Smoothness", 0.9);
//! let out = converter.convert(&ConversionRequest::from_record(record), &());
//!
//! assert_eq!(out.material.kind, TargetKind::Liquid);
//! assert_eq!(out.material.shader_file(), "water.gdshader");
//! ```

pub mod cache;
pub mod config;
pub mod convert;
pub mod detect;
pub mod mapping;
pub mod material;
pub mod rules;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use rules::{RuleTable, TargetKind};
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cache::{group_key_for_mesh, is_reference_mesh, ConsistencyCache};
    pub use crate::config::Config;
    pub use crate::convert::{Conversion, ConversionRequest, Converter, PlaceholderSynthesizer, RunStats};
    pub use crate::detect::{Detection, Detector, ShaderHint, Tier};
    pub use crate::mapping::{DefaultResolver, PropertyMapper, ResolveFn, TextureResolver};
    pub use crate::material::{MappedMaterial, MaterialRecord, TextureRef, Value};
    pub use crate::rules::{RuleTable, TargetKind};
    pub use crate::util::{rgba, Error, Result, Rgba};
}
