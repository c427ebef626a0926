//! Pair and PairList definitions.
//!
//! They can be used as alternative to PairTable representations. 
//! Positions are 0-based, `i < j` always holds.

use crate::PairTable;

/// Anything that covers a closed interval `[i, j]` of sequence positions
/// with `i < j`, i.e. a base pair.
pub trait Span {
    fn span(&self) -> (usize, usize);

    /// True if the two spans cross: `i < k < j < l` or the symmetric case.
    fn crosses<S: Span>(&self, other: &S) -> bool {
        let (i, j) = self.span();
        let (k, l) = other.span();
        (i < k && k < j && j < l) || (k < i && i < l && l < j)
    }
}

impl Span for (usize, usize) {
    fn span(&self) -> (usize, usize) {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair { i: usize, j: usize }

impl Pair {
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    pub fn i(&self) -> usize {
        self.i
    }

    pub fn j(&self) -> usize {
        self.j
    }
}

impl Span for Pair {
    fn span(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}

impl From<&PairTable> for PairList {
    fn from(pt: &PairTable) -> Self {
        PairList {
            length: pt.len(),
            pairs: pt.pairs().map(|(i, j)| Pair::new(i, j)).collect(),
        }
    }
}
