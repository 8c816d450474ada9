//! Run-level orchestration.
//!
//! A [`Converter`] owns everything that lives for one run: the rule table,
//! the configuration, the consistency cache and the statistics. For each
//! [`ConversionRequest`] it
//!
//! 1. reuses the group's cached kind, if any
//! 2. otherwise decides a kind (hint, record detection or name only)
//! 3. maps the record, or synthesizes a placeholder when there is none
//! 4. backfills defaults
//! 5. stores the kind for the group if the request is the reference member
//!
//! [`Converter::convert_batch`] keeps every group on one worker and runs
//! the reference member first, so the ordering contract of the cache is
//! upheld even when groups are processed in parallel.

mod placeholder;
mod stats;

pub use placeholder::PlaceholderSynthesizer;
pub use stats::RunStats;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cache::{group_key_for_mesh, is_reference_mesh, ConsistencyCache};
use crate::config::Config;
use crate::detect::{Detection, Detector, ShaderHint, Tier};
use crate::mapping::{DefaultResolver, PropertyMapper, TextureResolver};
use crate::material::{MappedMaterial, MaterialRecord};
use crate::rules::{RuleTable, TargetKind};
use crate::util::Result;

/// Group membership of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub key: String,
    /// Whether this member's decision is stored for the group.
    #[serde(default)]
    pub reference: bool,
}

/// One material slot to convert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub material_name: String,
    #[serde(default)]
    pub record: Option<MaterialRecord>,
    #[serde(default)]
    pub hint: Option<ShaderHint>,
    #[serde(default)]
    pub group: Option<GroupMember>,
}

impl ConversionRequest {
    /// Request for a parsed record.
    pub fn from_record(record: MaterialRecord) -> Self {
        Self {
            material_name: record.name.clone(),
            record: Some(record),
            hint: None,
            group: None,
        }
    }

    /// Request for a name with no record.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            material_name: name.into(),
            record: None,
            hint: None,
            group: None,
        }
    }

    pub fn with_hint(mut self, hint: ShaderHint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_group(mut self, key: impl Into<String>, reference: bool) -> Self {
        self.group = Some(GroupMember { key: key.into(), reference });
        self
    }

    /// Group derived from a mesh name (`_LOD<n>` suffix stripped).
    pub fn with_mesh(self, mesh_name: &str) -> Self {
        let key = group_key_for_mesh(mesh_name).to_string();
        self.with_group(key, is_reference_mesh(mesh_name))
    }
}

/// Output of one conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub material: MappedMaterial,
    pub detection: Detection,
}

impl Conversion {
    /// Kind inherited from the group rather than decided here.
    pub fn is_cached(&self) -> bool {
        self.detection.tier == Tier::Cached
    }
}

/// Stateful converter for one run.
#[derive(Debug)]
pub struct Converter {
    rules: Arc<RuleTable>,
    config: Config,
    cache: ConsistencyCache,
    stats: Mutex<RunStats>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Arc::new(RuleTable::builtin()), Config::default())
    }
}

impl Converter {
    /// Converter over an existing rule table.
    pub fn new(rules: Arc<RuleTable>, config: Config) -> Self {
        Self {
            rules,
            config,
            cache: ConsistencyCache::new(),
            stats: Mutex::new(RunStats::default()),
        }
    }

    /// Build the rule table from `config` and wrap it.
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = RuleTable::with_config(&config)?;
        Ok(Self::new(Arc::new(rules), config))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ConsistencyCache {
        &self.cache
    }

    /// Snapshot of the counters so far.
    pub fn stats(&self) -> RunStats {
        self.stats.lock().clone()
    }

    pub fn detector(&self) -> Detector<'_> {
        Detector::with_config(&self.rules, &self.config)
    }

    pub fn placeholders(&self) -> PlaceholderSynthesizer<'_> {
        PlaceholderSynthesizer::with_config(&self.rules, &self.config)
    }

    /// Convert one request.
    #[tracing::instrument(level = "debug", skip_all, fields(material = %request.material_name))]
    pub fn convert<R>(&self, request: &ConversionRequest, resolver: &R) -> Conversion
    where
        R: TextureResolver + ?Sized,
    {
        let name = request.material_name.as_str();
        let cached = request
            .group
            .as_ref()
            .and_then(|g| self.cache.get(&g.key).map(|kind| (g, kind)));

        let detection = match cached {
            Some((group, kind)) => {
                tracing::debug!(group = %group.key, %kind, "kind inherited from group");
                Detection::confident(kind, Tier::Cached)
            }
            None => {
                let fresh = self.decide(request);
                self.publish(request, fresh)
            }
        };

        if !detection.matched && self.config.log_unmatched {
            tracing::warn!(material = name, score = detection.score, "no confident classification, using base shader; needs review");
        }

        let material = match &request.record {
            Some(record) => {
                let mapped = PropertyMapper::with_config(&self.rules, &self.config)
                    .map(record, detection.kind, resolver);
                DefaultResolver::new(&self.rules).apply_defaults(mapped, detection.kind)
            }
            None => self.placeholders().synthesize_as(name, detection.kind),
        };

        self.stats.lock().record(name, &detection, material.placeholder);
        Conversion { material, detection }
    }

    /// Convert many requests; results come back in input order.
    ///
    /// Requests sharing a group key are converted sequentially on one
    /// worker, reference members first. Distinct groups run in parallel.
    pub fn convert_batch<R>(&self, requests: &[ConversionRequest], resolver: &R) -> Vec<Conversion>
    where
        R: TextureResolver + Sync + ?Sized,
    {
        let groups = batch_groups(requests);
        let mut results: Vec<(usize, Conversion)> = groups
            .par_iter()
            .flat_map_iter(|members| {
                members
                    .iter()
                    .map(|&i| (i, self.convert(&requests[i], resolver)))
                    .collect::<Vec<_>>()
            })
            .collect();
        results.sort_unstable_by_key(|(i, _)| *i);

        let stats = self.stats();
        tracing::info!(
            converted = stats.converted,
            placeholders = stats.placeholders,
            cache_hits = stats.cache_hits,
            unmatched = stats.unmatched,
            groups = self.cache.len(),
            "batch converted"
        );
        results.into_iter().map(|(_, c)| c).collect()
    }

    fn decide(&self, request: &ConversionRequest) -> Detection {
        let detector = self.detector();
        match (&request.record, request.hint) {
            (_, Some(ShaderHint::Generic)) => Detection::confident(TargetKind::Base, Tier::Hint),
            (Some(record), _) => {
                let detection = detector.detect(record);
                self.validate_evidence(&detector, record, detection)
            }
            (None, _) => detector.determine_from_hint(&request.material_name, true),
        }
    }

    fn validate_evidence(
        &self,
        detector: &Detector<'_>,
        record: &MaterialRecord,
        detection: Detection,
    ) -> Detection {
        if !self.config.require_signature_evidence
            || detection.kind.is_base()
            || detector.has_evidence(record, detection.kind)
        {
            return detection;
        }
        tracing::debug!(material = %record.name, rejected = %detection.kind, "no supporting properties, using base");
        Detection { kind: TargetKind::Base, ..detection }
    }

    /// Store a reference member's decision, returning the group's
    /// authoritative detection.
    fn publish(&self, request: &ConversionRequest, detection: Detection) -> Detection {
        let Some(group) = request.group.as_ref().filter(|g| g.reference) else {
            return detection;
        };
        let kind = self.cache.record_decision(&group.key, detection.kind);
        if kind == detection.kind {
            detection
        } else {
            Detection::confident(kind, Tier::Cached)
        }
    }
}

/// Request indices grouped by key, each group ordered reference-first.
/// Ungrouped requests form groups of one.
fn batch_groups(requests: &[ConversionRequest]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut by_key: HashMap<&str, usize> = HashMap::new();
    for (i, request) in requests.iter().enumerate() {
        match &request.group {
            Some(group) => {
                let slot = *by_key.entry(group.key.as_str()).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                });
                groups[slot].push(i);
            }
            None => groups.push(vec![i]),
        }
    }
    for members in &mut groups {
        members.sort_by_key(|&i| !requests[i].group.as_ref().is_some_and(|g| g.reference));
    }
    groups
}
