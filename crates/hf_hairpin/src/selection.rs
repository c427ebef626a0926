use std::cmp::Ordering;
use log::debug;

use crate::StemLoop;

/// The order in which candidates are offered to the greedy
/// non-overlap pass. Earlier candidates win conflicts.
pub trait SelectionPolicy {
    fn rank(&self, a: &StemLoop, b: &StemLoop) -> Ordering;
}

/// Most stable candidate first; ties go to the 5'-most span.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestEnergyFirst;

impl SelectionPolicy for LowestEnergyFirst {
    fn rank(&self, a: &StemLoop, b: &StemLoop) -> Ordering {
        a.energy.cmp(&b.energy)
            .then(a.start.cmp(&b.start))
            .then(a.end.cmp(&b.end))
    }
}

/// 5'-most candidate first; ties go to the more stable one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftmostFirst;

impl SelectionPolicy for LeftmostFirst {
    fn rank(&self, a: &StemLoop, b: &StemLoop) -> Ordering {
        a.start.cmp(&b.start)
            .then(a.energy.cmp(&b.energy))
            .then(a.end.cmp(&b.end))
    }
}

/// Greedily keep candidates that share no position with an already kept
/// one, visiting them in policy order. The result is ordered by position.
pub fn select_non_overlapping<P: SelectionPolicy>(
    mut candidates: Vec<StemLoop>,
    policy: &P,
) -> Vec<StemLoop> {
    let total = candidates.len();
    candidates.sort_by(|a, b| policy.rank(a, b));

    let mut selected: Vec<StemLoop> = Vec::new();
    for sl in candidates {
        if selected.iter().all(|kept| !kept.overlaps(&sl)) {
            selected.push(sl);
        }
    }
    selected.sort_by_key(|sl| sl.start);
    debug!("selected {} of {} stem-loops", selected.len(), total);
    selected
}
