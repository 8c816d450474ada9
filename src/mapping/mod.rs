//! Property translation into a target kind's vocabulary.
//!
//! [`PropertyMapper`] walks a record's three source buckets, renames every
//! property it knows through the kind's [`PropertyMap`](crate::rules::PropertyMap)
//! and drops the rest. Two quirks are corrected on the way:
//!
//! - numbers registered as booleans move to the boolean bucket
//! - opaque colors stored with zero alpha get alpha 1.0
//!
//! Defaults are a separate pass ([`DefaultResolver`]) so callers can inspect
//! what the source actually carried.

mod defaults;
mod quirks;

pub use defaults::DefaultResolver;
pub use quirks::{derive_target_name, uses_transparent_mode, QuirkCorrector};

use std::collections::{BTreeMap, HashMap};

use crate::config::Config;
use crate::material::{MappedMaterial, MaterialRecord, TextureRef};
use crate::rules::{RuleTable, TargetKind};

/// Turns a texture reference into a file name.
///
/// Returning `None` drops the texture from the mapped output.
pub trait TextureResolver {
    fn resolve(&self, texture: &TextureRef) -> Option<String>;
}

/// Resolves nothing; every texture is dropped.
impl TextureResolver for () {
    fn resolve(&self, _texture: &TextureRef) -> Option<String> {
        None
    }
}

/// Guid -> file name table.
impl TextureResolver for HashMap<String, String> {
    fn resolve(&self, texture: &TextureRef) -> Option<String> {
        self.get(&texture.guid).cloned()
    }
}

/// Guid -> file name table.
impl TextureResolver for BTreeMap<String, String> {
    fn resolve(&self, texture: &TextureRef) -> Option<String> {
        self.get(&texture.guid).cloned()
    }
}

impl<T: TextureResolver + ?Sized> TextureResolver for &T {
    fn resolve(&self, texture: &TextureRef) -> Option<String> {
        (**self).resolve(texture)
    }
}

/// Adapts a closure into a [`TextureResolver`].
#[derive(Clone, Copy, Debug)]
pub struct ResolveFn<F>(pub F);

impl<F> TextureResolver for ResolveFn<F>
where
    F: Fn(&TextureRef) -> Option<String>,
{
    fn resolve(&self, texture: &TextureRef) -> Option<String> {
        (self.0)(texture)
    }
}

/// Source record -> [`MappedMaterial`] translator.
#[derive(Clone, Copy, Debug)]
pub struct PropertyMapper<'a> {
    rules: &'a RuleTable,
    quirks: QuirkCorrector<'a>,
    respect_transparency_mode: bool,
}

impl<'a> PropertyMapper<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            rules,
            quirks: QuirkCorrector::new(rules),
            respect_transparency_mode: true,
        }
    }

    pub fn with_config(rules: &'a RuleTable, config: &Config) -> Self {
        Self {
            respect_transparency_mode: config.respect_transparency_mode,
            ..Self::new(rules)
        }
    }

    /// Translate `record` for `kind`. Defaults are not applied.
    #[tracing::instrument(level = "debug", skip_all, fields(material = %record.name, kind = %kind))]
    pub fn map<R>(&self, record: &MaterialRecord, kind: TargetKind, resolver: &R) -> MappedMaterial
    where
        R: TextureResolver + ?Sized,
    {
        let table = self.rules.property_map(kind);
        let mut out = MappedMaterial::new(record.name.clone(), kind);

        for (src, texture) in &record.textures {
            let Some(target) = table.texture(src) else {
                continue;
            };
            match resolver.resolve(texture) {
                Some(file) => {
                    out.textures.insert(target.to_string(), file);
                }
                None => tracing::debug!(property = %src, guid = %texture.guid, "unresolved texture dropped"),
            }
        }

        for (src, value) in &record.numbers {
            if let Some(flag) = self.quirks.extract_bool(src, *value) {
                let target = table
                    .number(src)
                    .map_or_else(|| derive_target_name(src), str::to_string);
                tracing::debug!(property = %src, target = %target, flag, "boolean extracted");
                out.booleans.insert(target, flag);
            } else if let Some(target) = table.number(src) {
                out.numbers.insert(target.to_string(), *value);
            }
        }

        let fix_alpha = !(self.respect_transparency_mode && uses_transparent_mode(record));
        if !fix_alpha {
            tracing::debug!("transparent rendering mode, alpha left as authored");
        }
        for (src, color) in &record.colors {
            let Some(target) = table.color(src) else {
                continue;
            };
            let color = if fix_alpha {
                self.quirks.fix_alpha(*color, src)
            } else {
                *color
            };
            out.colors.insert(target.to_string(), color);
        }

        out
    }
}
