//! Material records and mapped materials.
//!
//! A [`MaterialRecord`] is the parsed source description handed in by the
//! upstream parser: a shader reference plus named texture, numeric and color
//! properties, all under source-side names. A [`MappedMaterial`] is the
//! result handed to the resource writer: a target kind plus property
//! buckets keyed exclusively by target-side names.
//!
//! ## Example
//!
//! ```ignore
//! use matconv::material::{MaterialRecord, TextureRef};
//!
//! let record = MaterialRecord::new("PolygonNature_Ground_01", "0730dae39bc73f34796280af9875ce14")
//!     .with_texture("_Base_Texture", TextureRef::new("4f1c..."))
//!     .with_number("_Smoothness", 0.5);
//! ```

mod mapped;
mod record;

pub use mapped::*;
pub use record::*;
