//! Per-kind score accumulation.

use crate::rules::{PerKind, TargetKind};

/// Score vector for one detection, with tie-break bookkeeping.
///
/// Every kind is always present (zero when nothing contributed). Alongside
/// the score, each kind remembers the registration index of its earliest
/// contributing rule; ties on score go to the smaller index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    scores: PerKind<u32>,
    first_rule: PerKind<Option<usize>>,
}

impl Scoreboard {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `kind` on behalf of the rule at `rule_index`.
    pub fn add(&mut self, kind: TargetKind, points: u32, rule_index: usize) {
        if points == 0 {
            return;
        }
        self.scores[kind] = self.scores[kind].saturating_add(points);
        let first = &mut self.first_rule[kind];
        *first = Some(first.map_or(rule_index, |i| i.min(rule_index)));
    }

    /// Current score of `kind`.
    #[inline]
    pub fn score(&self, kind: TargetKind) -> u32 {
        self.scores[kind]
    }

    /// Iterate `(kind, score)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetKind, u32)> + '_ {
        self.scores.iter().map(|(k, s)| (k, *s))
    }

    /// True if no rule contributed.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, s)| s == 0)
    }

    /// Highest-scoring kind, ties broken by earliest contributing rule.
    pub fn best(&self) -> Option<(TargetKind, u32)> {
        let mut best: Option<(TargetKind, u32, usize)> = None;
        for kind in TargetKind::ALL {
            let score = self.scores[kind];
            let Some(first) = self.first_rule[kind] else {
                continue;
            };
            let better = match best {
                None => true,
                Some((_, s, f)) => score > s || (score == s && first < f),
            };
            if better {
                best = Some((kind, score, first));
            }
        }
        best.map(|(k, s, _)| (k, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let b = Scoreboard::new();
        assert!(b.is_empty());
        assert_eq!(b.best(), None);
    }

    #[test]
    fn test_accumulates() {
        let mut b = Scoreboard::new();
        b.add(TargetKind::Base, 60, 0);
        b.add(TargetKind::Vegetation, 20, 16);
        b.add(TargetKind::Base, 15, 18);
        assert_eq!(b.score(TargetKind::Base), 75);
        assert_eq!(b.best(), Some((TargetKind::Base, 75)));
    }

    #[test]
    fn test_tie_goes_to_earliest_rule() {
        let mut b = Scoreboard::new();
        b.add(TargetKind::Atmosphere, 45, 8);
        b.add(TargetKind::Liquid, 45, 6);
        assert_eq!(b.best(), Some((TargetKind::Liquid, 45)));

        // Declaration order of the kinds does not matter, only rule order.
        let mut b = Scoreboard::new();
        b.add(TargetKind::Refractive, 20, 25);
        b.add(TargetKind::Vegetation, 20, 26);
        assert_eq!(b.best(), Some((TargetKind::Refractive, 20)));
    }

    #[test]
    fn test_zero_points_ignored() {
        let mut b = Scoreboard::new();
        b.add(TargetKind::Particle, 0, 3);
        assert!(b.is_empty());
        assert_eq!(b.best(), None);
    }
}
