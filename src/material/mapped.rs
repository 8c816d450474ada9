//! Mapped (target-side) materials and property values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rules::TargetKind;
use crate::util::Rgba;

/// A typed property value, used by default and placeholder tables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f32),
    Color(Rgba),
}

/// Material translated into a target kind's vocabulary.
///
/// Every key in every bucket is a target-side name. Downstream writers treat
/// the buckets as the complete, final property set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappedMaterial {
    pub name: String,
    pub kind: TargetKind,
    /// Target texture uniform -> resolved file name.
    #[serde(default)]
    pub textures: BTreeMap<String, String>,
    #[serde(default)]
    pub numbers: BTreeMap<String, f32>,
    #[serde(default)]
    pub booleans: BTreeMap<String, bool>,
    #[serde(default)]
    pub colors: BTreeMap<String, Rgba>,
    /// Synthesized from a name alone, without a source record.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl MappedMaterial {
    /// Create a material with empty buckets.
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            textures: BTreeMap::new(),
            numbers: BTreeMap::new(),
            booleans: BTreeMap::new(),
            colors: BTreeMap::new(),
            placeholder: false,
        }
    }

    /// Target shader file this material binds.
    pub fn shader_file(&self) -> &'static str {
        self.kind.shader_file()
    }

    /// True if `name` is present in the numeric, boolean or color bucket.
    pub fn has_value(&self, name: &str) -> bool {
        self.numbers.contains_key(name)
            || self.booleans.contains_key(name)
            || self.colors.contains_key(name)
    }

    /// Look up a numeric, boolean or color value by target name.
    pub fn value(&self, name: &str) -> Option<Value> {
        if let Some(v) = self.numbers.get(name) {
            return Some(Value::Number(*v));
        }
        if let Some(v) = self.booleans.get(name) {
            return Some(Value::Bool(*v));
        }
        self.colors.get(name).map(|c| Value::Color(*c))
    }

    /// Insert into the bucket matching the value's type.
    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match value {
            Value::Bool(b) => {
                self.booleans.insert(name, b);
            }
            Value::Number(n) => {
                self.numbers.insert(name, n);
            }
            Value::Color(c) => {
                self.colors.insert(name, c);
            }
        }
    }

    /// Total number of properties across buckets.
    pub fn property_count(&self) -> usize {
        self.textures.len() + self.numbers.len() + self.booleans.len() + self.colors.len()
    }
}
