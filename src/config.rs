//! Engine configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! built-in default.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::TargetKind;
use crate::util::{Error, Result};

/// Default minimum score for a scored kind to be accepted.
pub const DEFAULT_PUBLISH_THRESHOLD: u32 = 20;

/// Default points per matching signature property.
pub const DEFAULT_SIGNATURE_WEIGHT: u32 = 10;

/// Tunables for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum winning score for tier-2 detection.
    pub publish_threshold: u32,
    /// Points each matching signature property adds.
    pub signature_weight: u32,
    /// Demote specialized kinds with no supporting property to `Base`.
    pub require_signature_evidence: bool,
    /// Skip alpha correction on records using a transparent rendering mode.
    pub respect_transparency_mode: bool,
    /// Identifier -> kind entries layered over the built-in identifier map.
    pub extra_identifiers: BTreeMap<String, TargetKind>,
    /// Emit a warning for every low-confidence classification.
    pub log_unmatched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            publish_threshold: DEFAULT_PUBLISH_THRESHOLD,
            signature_weight: DEFAULT_SIGNATURE_WEIGHT,
            require_signature_evidence: false,
            respect_transparency_mode: true,
            extra_identifiers: BTreeMap::new(),
            log_unmatched: true,
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values that would make detection meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.publish_threshold == 0 {
            return Err(Error::config("publish_threshold must be positive"));
        }
        if self.signature_weight == 0 {
            return Err(Error::config("signature_weight must be positive"));
        }
        if let Some(id) = self.extra_identifiers.keys().find(|id| id.trim().is_empty()) {
            return Err(Error::config(format!("empty identifier in extra_identifiers: {id:?}")));
        }
        Ok(())
    }
}
