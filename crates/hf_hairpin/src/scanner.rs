use log::debug;
use serde::{Serialize, Deserialize};

use hf_energy::Base;
use hf_energy::NucleotideVec;
use hf_energy::EnergyModel;
use hf_energy::can_pair;

use crate::StemLoop;

/// Bounds for the stem-loop scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanParameters {
    pub min_stem_length: usize,
    pub min_loop_size: usize,
    pub max_loop_size: usize,
    pub allow_wobble: bool,
}

impl Default for ScanParameters {
    fn default() -> Self {
        ScanParameters {
            min_stem_length: 3,
            min_loop_size: 3,
            max_loop_size: 30,
            allow_wobble: true,
        }
    }
}

impl ScanParameters {
    pub fn new(min_stem_length: usize, min_loop_size: usize, max_loop_size: usize) -> Self {
        ScanParameters {
            min_stem_length,
            min_loop_size,
            max_loop_size,
            ..Default::default()
        }
    }

    pub fn with_wobble(mut self, allow_wobble: bool) -> Self {
        self.allow_wobble = allow_wobble;
        self
    }

    /// A stem has at least one pair and a loop at least one position.
    fn effective_bounds(&self) -> (usize, usize) {
        (self.min_stem_length.max(1), self.min_loop_size.max(1))
    }
}

/// Count pairs `(i - k, j + k)` for `k = 0, 1, ...` until a position
/// cannot pair, the sequence ends, or `cap` pairs were found.
pub fn grow_stem_outward(sequence: &[Base], i: usize, j: usize, cap: usize, allow_wobble: bool) -> usize {
    let mut k = 0;
    while k < cap && k <= i && j + k < sequence.len()
        && can_pair(sequence[i - k], sequence[j + k], allow_wobble)
    {
        k += 1;
    }
    k
}

/// Count pairs `(i + k, j - k)` for `k = 0, 1, ...` until a position
/// cannot pair, the two ends meet, or `cap` pairs were found.
pub fn grow_stem_inward(sequence: &[Base], i: usize, j: usize, cap: usize, allow_wobble: bool) -> usize {
    let mut k = 0;
    while k < cap && k <= j && i + k < j - k && j < sequence.len()
        && can_pair(sequence[i + k], sequence[j - k], allow_wobble)
    {
        k += 1;
    }
    k
}

/// All stem-loop candidates of `sequence` (raw text, case and T/U
/// insensitive). See `scan_stem_loops`.
pub fn find_stem_loops<M: EnergyModel>(
    sequence: &str,
    params: &ScanParameters,
    model: &M,
) -> Vec<StemLoop> {
    let sequence = NucleotideVec::from_lossy(sequence);
    scan_stem_loops(&sequence, params, model)
}

/// For every loop placement with a size within the bounds, grow a stem
/// outward from the two positions flanking the loop and report it if it
/// has at least `min_stem_length` pairs. Candidates are ordered by loop
/// start, then loop size, and may overlap each other.
pub fn scan_stem_loops<M: EnergyModel>(
    sequence: &[Base],
    params: &ScanParameters,
    model: &M,
) -> Vec<StemLoop> {
    let n = sequence.len();
    let (min_stem, min_loop) = params.effective_bounds();
    let shortest = min_stem.checked_mul(2).and_then(|s| s.checked_add(min_loop));
    if shortest.is_none_or(|len| n < len) || params.max_loop_size < min_loop {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for loop_start in min_stem..n {
        for loop_size in min_loop..=params.max_loop_size {
            let loop_end = loop_start + loop_size - 1;
            if loop_end + min_stem >= n {
                break;
            }
            let stem_length = grow_stem_outward(sequence, 
                loop_start - 1, loop_end + 1, usize::MAX, params.allow_wobble);
            if stem_length < min_stem {
                continue;
            }
            if let Some(sl) = StemLoop::new(sequence, loop_start, loop_size, stem_length, model) {
                candidates.push(sl);
            }
        }
    }
    debug!("{} stem-loop candidates in {} nt", candidates.len(), n);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_energy::StackingModel;

    #[test]
    fn test_grow_stem_outward() {
        let seq = NucleotideVec::try_from("GGGAAAACCC").unwrap();
        assert_eq!(grow_stem_outward(&seq, 2, 7, usize::MAX, true), 3);
        assert_eq!(grow_stem_outward(&seq, 2, 7, 2, true), 2);
        assert_eq!(grow_stem_outward(&seq, 3, 6, usize::MAX, true), 0);

        let seq = NucleotideVec::try_from("GGAAAUC").unwrap();
        assert_eq!(grow_stem_outward(&seq, 1, 5, usize::MAX, true), 2);
        assert_eq!(grow_stem_outward(&seq, 1, 5, usize::MAX, false), 0);
    }

    #[test]
    fn test_grow_stem_inward() {
        let seq = NucleotideVec::try_from("GGGAAAACCC").unwrap();
        assert_eq!(grow_stem_inward(&seq, 0, 9, usize::MAX, true), 3);
        assert_eq!(grow_stem_inward(&seq, 0, 9, 1, true), 1);

        // growth stops where the two ends would meet
        let seq = NucleotideVec::try_from("GGCC").unwrap();
        assert_eq!(grow_stem_inward(&seq, 0, 3, usize::MAX, true), 2);
    }

    #[test]
    fn test_find_stem_loops_single() {
        let model = StackingModel::default();
        let params = ScanParameters::new(3, 4, 4);
        let sls = find_stem_loops("GGGAAAACCC", &params, &model);
        assert_eq!(sls.len(), 1);
        assert!(sls[0].stem.len() >= 3);
        assert_eq!(sls[0].hairpin.size(), 4);
        assert_eq!(sls[0].notation, "(((....)))");
    }

    #[test]
    fn test_find_stem_loops_normalizes_input() {
        let model = StackingModel::default();
        let params = ScanParameters::new(3, 4, 4);
        let sls = find_stem_loops("gggttttccc", &params, &model);
        assert_eq!(sls.len(), 1);
        assert_eq!(sls[0].hairpin.sequence, "UUUU");
    }

    #[test]
    fn test_find_stem_loops_degenerate() {
        let model = StackingModel::default();
        let params = ScanParameters::default();
        assert!(find_stem_loops("", &params, &model).is_empty());
        assert!(find_stem_loops("GGAC", &params, &model).is_empty());
        assert!(find_stem_loops("AAAAAAAAAAAAAAAAAAAA", &params, &model).is_empty());

        let contradiction = ScanParameters::new(3, 8, 4);
        assert!(find_stem_loops("GGGAAAACCC", &contradiction, &model).is_empty());
    }

    #[test]
    fn test_find_stem_loops_huge_bounds() {
        let model = StackingModel::default();
        let huge_loop = ScanParameters::new(3, usize::MAX, usize::MAX);
        assert!(find_stem_loops("GGGAAAACCC", &huge_loop, &model).is_empty());
        let huge_stem = ScanParameters::new(usize::MAX / 2 + 1, 4, 4);
        assert!(find_stem_loops("GGGAAAACCC", &huge_stem, &model).is_empty());
        let huge_max = ScanParameters::new(3, 4, usize::MAX);
        assert_eq!(find_stem_loops("GGGAAAACCC", &huge_max, &model).len(), 1);
    }

    #[test]
    fn test_find_stem_loops_two_regions() {
        let model = StackingModel::default();
        let params = ScanParameters::new(4, 4, 4).with_wobble(false);
        let seq = "GGGGAAAACCCCAAAAAAAAAACCCCAAAAGGGG";
        let sls = find_stem_loops(seq, &params, &model);
        assert_eq!(sls.len(), 2);
        assert_eq!((sls[0].start, sls[0].end), (0, 11));
        assert_eq!((sls[1].start, sls[1].end), (22, 33));
        assert!(!sls[0].overlaps(&sls[1]));
    }

    #[test]
    fn test_find_stem_loops_wobble() {
        let model = StackingModel::default();
        let seq = "GGGAAAAUUU";
        let with = find_stem_loops(seq, &ScanParameters::new(3, 4, 4), &model);
        let without = find_stem_loops(seq, &ScanParameters::new(3, 4, 4).with_wobble(false), &model);
        assert_eq!(with.len(), 1);
        assert!(without.is_empty());
    }

    #[test]
    fn test_find_stem_loops_bounds_hold() {
        let model = StackingModel::default();
        let params = ScanParameters::new(2, 3, 6);
        let seq = "GCGCAUAUGCGCAAGCUUGCGCUAGCAUGC";
        for sl in find_stem_loops(seq, &params, &model) {
            assert!(sl.stem.len() >= 2);
            assert!((3..=6).contains(&sl.hairpin.size()));
            assert_eq!(sl.notation.len(), sl.span_length());
            assert_eq!(sl.span_length(), 2 * sl.stem.len() + sl.hairpin.size());
        }
    }
}

