use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;
use serde::{Serialize, Deserialize};


#[derive(Debug)]
pub enum SequenceError {
    InvalidChar(char),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// RNA bases. DNA thymine is read as uracil, anything
/// unknown may be read as `N`, which never pairs.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Base { A, C, G, U, N }
pub const BCOUNT: usize = 5; // 5 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            'N' => Ok(Base::N),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::N => 'N',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Base {
    /// Strict Watson-Crick complement. `N` has none.
    pub fn complement(&self) -> Option<Base> {
        match self {
            Base::A => Some(Base::U),
            Base::U => Some(Base::A),
            Base::G => Some(Base::C),
            Base::C => Some(Base::G),
            Base::N => None,
        }
    }

    pub fn is_purine(&self) -> bool {
        matches!(self, Base::A | Base::G)
    }
}


#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

/// Render a slice of bases, e.g. a window of a `NucleotideVec`.
pub fn bases_to_string(bases: &[Base]) -> String {
    bases.iter().map(|&b| char::from(b)).collect()
}

impl NucleotideVec {
    /// Uppercase, T -> U, and anything else -> N (with a warning).
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().map(|c| {
            Base::try_from(c).unwrap_or_else(|e| {
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }
}

const PAIR_LOOKUP: [[PairTypeRNA; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairTypeRNA::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[U as usize][A as usize] = UA;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table[G as usize][U as usize] = GU;
    table[U as usize][G as usize] = UG;
    table
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairTypeRNA { AU, UA, CG, GC, GU, UG, NN }

impl From<(Base, Base)> for PairTypeRNA {
    fn from(pair: (Base, Base)) -> Self {
        PAIR_LOOKUP[pair.0 as usize][pair.1 as usize]
    }
}

impl PairTypeRNA {
    pub fn is_wcf(&self) -> bool {
       matches!(self
            , PairTypeRNA::GC | PairTypeRNA::CG 
            | PairTypeRNA::AU | PairTypeRNA::UA)
    }

    pub fn is_wobble(&self) -> bool {
       matches!(self, PairTypeRNA::GU | PairTypeRNA::UG)
    }

    pub fn is_gc(&self) -> bool {
       matches!(self, PairTypeRNA::GC | PairTypeRNA::CG)
    }

    pub fn kind(&self) -> Option<PairKind> {
        if self.is_wcf() {
            Some(PairKind::WatsonCrick)
        } else if self.is_wobble() {
            Some(PairKind::Wobble)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairKind {
    WatsonCrick,
    Wobble,
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairKind::WatsonCrick => write!(f, "Watson-Crick"),
            PairKind::Wobble => write!(f, "wobble"),
        }
    }
}

/// A-U, U-A, G-C and C-G always pair; G-U and U-G only if `allow_wobble`.
pub fn can_pair(a: Base, b: Base, allow_wobble: bool) -> bool {
    match pair_type(a, b) {
        Some(PairKind::WatsonCrick) => true,
        Some(PairKind::Wobble) => allow_wobble,
        None => false,
    }
}

pub fn pair_type(a: Base, b: Base) -> Option<PairKind> {
    PairTypeRNA::from((a, b)).kind()
}

pub fn complement(a: Base) -> Option<Base> {
    a.complement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_from_char_normalizes() {
        assert_eq!(Base::try_from('a').unwrap(), A);
        assert_eq!(Base::try_from('T').unwrap(), U);
        assert_eq!(Base::try_from('t').unwrap(), U);
        assert!(matches!(Base::try_from('x'), Err(SequenceError::InvalidChar('x'))));
    }

    #[test]
    fn test_nucleotide_vec() {
        let seq = NucleotideVec::try_from("acgtN").unwrap();
        assert_eq!(seq.to_string(), "ACGUN");
        assert!(NucleotideVec::try_from("AC-G").is_err());

        let lossy = NucleotideVec::from_lossy("ac-g");
        assert_eq!(lossy.to_string(), "ACNG");
        assert_eq!(bases_to_string(&lossy[1..3]), "CN");
    }

    #[test]
    fn test_can_pair() {
        for (a, b) in [(A, U), (U, A), (G, C), (C, G)] {
            assert!(can_pair(a, b, false));
            assert!(can_pair(a, b, true));
        }
        assert!(can_pair(G, U, true));
        assert!(can_pair(U, G, true));
        assert!(!can_pair(G, U, false));
        assert!(!can_pair(A, G, true));
        for b in [A, C, G, U, N] {
            assert!(!can_pair(b, b, true));
        }
        assert!(!can_pair(N, U, true));
    }

    #[test]
    fn test_pair_type() {
        assert_eq!(pair_type(A, U), Some(PairKind::WatsonCrick));
        assert_eq!(pair_type(C, G), Some(PairKind::WatsonCrick));
        assert_eq!(pair_type(U, G), Some(PairKind::Wobble));
        assert_eq!(pair_type(A, C), None);
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(A), Some(U));
        assert_eq!(complement(U), Some(A));
        assert_eq!(complement(G), Some(C));
        assert_eq!(complement(C), Some(G));
        assert_eq!(complement(N), None);
    }

    #[test]
    fn test_pair_type_rna() {
        assert_eq!(PairTypeRNA::from((G, C)), PairTypeRNA::GC);
        assert_eq!(PairTypeRNA::from((C, G)), PairTypeRNA::CG);
        assert!(PairTypeRNA::from((C, G)).is_gc());
        assert_eq!(PairTypeRNA::from((A, A)), PairTypeRNA::NN);
    }
}

