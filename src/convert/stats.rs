//! Run statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::detect::Detection;
use crate::rules::TargetKind;

/// Counters accumulated over one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub converted: usize,
    pub placeholders: usize,
    pub cache_hits: usize,
    pub unmatched: usize,
    pub per_kind: BTreeMap<TargetKind, usize>,
    /// Materials whose classification should be checked by hand.
    pub review: BTreeSet<String>,
}

impl RunStats {
    pub(crate) fn record(&mut self, name: &str, detection: &Detection, placeholder: bool) {
        self.converted += 1;
        *self.per_kind.entry(detection.kind).or_insert(0) += 1;
        if placeholder {
            self.placeholders += 1;
        }
        if detection.tier == crate::detect::Tier::Cached {
            self.cache_hits += 1;
        }
        if !detection.matched {
            self.unmatched += 1;
            self.review.insert(name.to_string());
        }
    }

    /// Count for one kind.
    pub fn count(&self, kind: TargetKind) -> usize {
        self.per_kind.get(&kind).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Tier;

    #[test]
    fn test_record() {
        let mut s = RunStats::default();
        s.record("Rock", &Detection::confident(TargetKind::Base, Tier::Scoring), false);
        s.record("Mystery", &Detection::fallback(0), true);
        s.record("Mystery", &Detection::fallback(0), true);
        s.record("Tree_LOD1", &Detection::confident(TargetKind::Vegetation, Tier::Cached), false);
        assert_eq!(s.converted, 4);
        assert_eq!(s.placeholders, 2);
        assert_eq!(s.cache_hits, 1);
        assert_eq!(s.unmatched, 2);
        assert_eq!(s.count(TargetKind::Base), 3);
        assert_eq!(s.review.len(), 1);
    }
}
