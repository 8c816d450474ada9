//! Cross-mesh consistency cache.
//!
//! Every detail level of one asset must end up on the same shader. The
//! cache stores the first decision made for a group key and hands it to
//! every later member. Which member decides first is the caller's
//! business: process the reference member (highest detail) before its
//! dependents.

mod group;

pub use group::{group_key_for_mesh, is_reference_mesh, lod_level};

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::rules::TargetKind;

/// Per-group state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupState {
    Unset,
    Set(TargetKind),
}

/// Thread-safe group key -> kind store for one run.
///
/// Uses `parking_lot::RwLock` so lookups from many workers don't block
/// each other. Entries are never replaced or evicted. Inherited decisions
/// are counted by the converter (`RunStats::cache_hits`), not here.
#[derive(Debug, Default)]
pub struct ConsistencyCache {
    groups: RwLock<HashMap<String, TargetKind>>,
}

impl ConsistencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached kind for a group, `None` while the group is unset.
    #[inline]
    pub fn get(&self, group_key: &str) -> Option<TargetKind> {
        self.groups.read().get(group_key).copied()
    }

    /// State of a group.
    pub fn state(&self, group_key: &str) -> GroupState {
        match self.groups.read().get(group_key) {
            Some(kind) => GroupState::Set(*kind),
            None => GroupState::Unset,
        }
    }

    /// Record a decision. The first call per key wins; later calls are
    /// no-ops. Returns the kind now authoritative for the group.
    pub fn record_decision(&self, group_key: &str, kind: TargetKind) -> TargetKind {
        let mut groups = self.groups.write();
        if let Some(existing) = groups.get(group_key) {
            if *existing != kind {
                tracing::debug!(group = group_key, kept = %existing, ignored = %kind, "group already decided");
            }
            return *existing;
        }
        groups.insert(group_key.to_string(), kind);
        tracing::debug!(group = group_key, %kind, "group decided");
        kind
    }

    /// Number of decided groups.
    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.read().is_empty()
    }

    /// Sorted copy of all decisions.
    pub fn snapshot(&self) -> BTreeMap<String, TargetKind> {
        self.groups
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}
