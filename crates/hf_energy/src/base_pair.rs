use std::fmt;
use serde::Serialize;
use hf_structure::Span;

use crate::Base;
use crate::PairKind;
use crate::pair_type;

/// A base pair `(i, j)` with `i < j`, its two residues and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BasePair {
    pub i: usize,
    pub j: usize,
    pub five: Base,
    pub three: Base,
    pub kind: PairKind,
}

impl BasePair {
    /// Returns `None` if `i >= j`, an index is out of range, or the two
    /// residues do not form a Watson-Crick or wobble pair.
    pub fn new(sequence: &[Base], i: usize, j: usize) -> Option<Self> {
        if i >= j || j >= sequence.len() {
            return None;
        }
        let (five, three) = (sequence[i], sequence[j]);
        pair_type(five, three).map(|kind| BasePair { i, j, five, three, kind })
    }

    /// True if `other` is the next pair inside this one: `(i+1, j-1)`.
    pub fn stacks_on(&self, other: &BasePair) -> bool {
        other.i == self.i + 1 && other.j + 1 == self.j
    }
}

impl Span for BasePair {
    fn span(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>3}, {:>3}) {}-{}", self.i, self.j, self.five, self.three)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NucleotideVec;

    #[test]
    fn test_base_pair_new() {
        let seq = NucleotideVec::try_from("GAAAUC").unwrap();
        let bp = BasePair::new(&seq, 0, 5).unwrap();
        assert_eq!((bp.five, bp.three, bp.kind), (Base::G, Base::C, PairKind::WatsonCrick));

        let wobble = BasePair::new(&seq, 0, 4).unwrap();
        assert_eq!(wobble.kind, PairKind::Wobble);

        assert!(BasePair::new(&seq, 1, 2).is_none());
        assert!(BasePair::new(&seq, 5, 0).is_none());
        assert!(BasePair::new(&seq, 0, 6).is_none());
    }

    #[test]
    fn test_base_pair_stacking() {
        let seq = NucleotideVec::try_from("GGAACC").unwrap();
        let outer = BasePair::new(&seq, 0, 5).unwrap();
        let inner = BasePair::new(&seq, 1, 4).unwrap();
        assert!(outer.stacks_on(&inner));
        assert!(!inner.stacks_on(&outer));
        assert!(!outer.crosses(&inner));
    }
}

