use std::ops::{Deref, DerefMut};
use std::convert::TryFrom;

use crate::Span;
use crate::StructureError;
use crate::{DotBracket, DotBracketVec, BRACKET_KINDS};

/// Position -> partner lookup. Unlike a nested-only table, this one
/// may hold crossing pairs (e.g. parsed from `[` `]` brackets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl PairTable {
    /// Build a table from a list of pairs. Every position may be used
    /// at most once, pairs must not be self-pairs and must fit into `len`.
    pub fn from_pairs<P: Span>(len: usize, pairs: &[P]) -> Result<Self, StructureError> {
        let mut table = vec![None; len];
        for p in pairs {
            let (i, j) = p.span();
            if i == j {
                return Err(StructureError::InvalidPairTable(i));
            }
            for (k, l) in [(i, j), (j, i)] {
                match table.get(k) {
                    None => return Err(StructureError::InvalidPairTable(k)),
                    Some(Some(_)) => return Err(StructureError::InvalidPairTable(k)),
                    Some(None) => table[k] = Some(l),
                }
            }
        }
        Ok(PairTable(table))
    }

    /// All pairs `(i, j)` with `i < j`, in 5' to 3' order of `i`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate()
            .filter_map(|(i, &partner)| match partner {
                Some(j) if j > i => Some((i, j)),
                _ => None,
            })
    }
}

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PairTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairTable::try_from(&DotBracketVec::try_from(s)?)
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    /// One stack per bracket kind: a closing symbol pairs with the
    /// nearest unmatched opening symbol of the same kind.
    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stacks: Vec<Vec<usize>> = vec![Vec::new(); BRACKET_KINDS.len()];
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open(kind) => stacks[*kind as usize].push(i),
                DotBracket::Close(kind) => {
                    let j = stacks[*kind as usize].pop()
                        .ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired => (),
            }
        }

        if let Some(i) = stacks.iter().filter_map(|s| s.first()).min() {
            return Err(StructureError::UnmatchedOpen(*i));
        }
        Ok(PairTable(table))
    }
}
