//! Source material records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::Rgba;

/// Reference to an external texture asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef {
    /// Opaque asset identifier, resolved to a file name by the caller.
    pub guid: String,
}

impl TextureRef {
    /// Create a reference from an asset identifier.
    pub fn new(guid: impl Into<String>) -> Self {
        Self { guid: guid.into() }
    }
}

/// Parsed description of one source material.
///
/// All property names are source-side names. Records are immutable once
/// built; the builder methods consume and return `self`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRecord {
    /// Free-form material name, often carrying domain hints ("Water_01").
    pub name: String,
    /// Identifier of the source shader program; may be unknown.
    pub shader_ref: String,
    /// Source texture property -> asset reference.
    pub textures: BTreeMap<String, TextureRef>,
    /// Source numeric property -> value.
    pub numbers: BTreeMap<String, f32>,
    /// Source color property -> RGBA.
    pub colors: BTreeMap<String, Rgba>,
}

impl MaterialRecord {
    /// Create an empty record.
    pub fn new(name: impl Into<String>, shader_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader_ref: shader_ref.into(),
            ..Default::default()
        }
    }

    /// Add a texture property.
    pub fn with_texture(mut self, name: impl Into<String>, texture: TextureRef) -> Self {
        self.textures.insert(name.into(), texture);
        self
    }

    /// Add a numeric property.
    pub fn with_number(mut self, name: impl Into<String>, value: f32) -> Self {
        self.numbers.insert(name.into(), value);
        self
    }

    /// Add a color property.
    pub fn with_color(mut self, name: impl Into<String>, color: Rgba) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// True if the record carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.numbers.is_empty() && self.colors.is_empty()
    }

    /// Total number of properties across buckets.
    pub fn property_count(&self) -> usize {
        self.textures.len() + self.numbers.len() + self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rgba;

    #[test]
    fn test_builder() {
        let rec = MaterialRecord::new("Rock_01", "abc")
            .with_texture("_Base_Texture", TextureRef::new("t1"))
            .with_number("_Smoothness", 0.3)
            .with_color("_Color", rgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(rec.property_count(), 3);
        assert!(!rec.is_empty());
        assert_eq!(rec.numbers["_Smoothness"], 0.3);
    }

    #[test]
    fn test_deserialize_partial() {
        let rec: MaterialRecord = serde_json::from_str(
            r#"{"name": "Water_01", "colors": {"_Deep_Color": [0.1, 0.2, 0.5, 0.0]}}"#,
        )
        .unwrap();
        assert_eq!(rec.name, "Water_01");
        assert!(rec.shader_ref.is_empty());
        assert_eq!(rec.colors["_Deep_Color"], rgba(0.1, 0.2, 0.5, 0.0));
        assert!(rec.textures.is_empty());
    }
}
