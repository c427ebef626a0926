use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;
use std::convert::TryFrom;

use crate::Span;
use crate::PairTable;
use crate::StructureError;

/// The bracket families of extended dot-bracket notation. Each family is
/// matched independently, which is how crossing pairs get written down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BracketKind {
    Round,  // ()
    Square, // []
    Curly,  // {}
    Angle,  // <>
}

pub const BRACKET_KINDS: [BracketKind; 4] = [
    BracketKind::Round,
    BracketKind::Square,
    BracketKind::Curly,
    BracketKind::Angle,
];

impl BracketKind {
    pub fn open(&self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
            BracketKind::Angle => '<',
        }
    }

    pub fn close(&self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
            BracketKind::Angle => '>',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,           // '.'
    Open(BracketKind),  // '(', '[', '{', '<'
    Close(BracketKind), // ')', ']', '}', '>'
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open(BracketKind::Round)),
            ')' => Ok(DotBracket::Close(BracketKind::Round)),
            '[' => Ok(DotBracket::Open(BracketKind::Square)),
            ']' => Ok(DotBracket::Close(BracketKind::Square)),
            '{' => Ok(DotBracket::Open(BracketKind::Curly)),
            '}' => Ok(DotBracket::Close(BracketKind::Curly)),
            '<' => Ok(DotBracket::Open(BracketKind::Angle)),
            '>' => Ok(DotBracket::Close(BracketKind::Angle)),
            _ => Err(StructureError::InvalidToken(format!("character '{}'", c), "dot-bracket".into(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open(kind) => kind.open(),
            DotBracket::Close(kind) => kind.close(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// The open chain of length `len`.
    pub fn unpaired(len: usize) -> Self {
        DotBracketVec(vec![DotBracket::Unpaired; len])
    }

    /// A single hairpin: `stem` opening brackets, `loop_size` dots and
    /// `stem` closing brackets.
    pub fn hairpin(stem: usize, loop_size: usize) -> Self {
        let mut vec = Vec::with_capacity(2 * stem + loop_size);
        vec.extend(std::iter::repeat_n(DotBracket::Open(BracketKind::Round), stem));
        vec.extend(std::iter::repeat_n(DotBracket::Unpaired, loop_size));
        vec.extend(std::iter::repeat_n(DotBracket::Close(BracketKind::Round), stem));
        DotBracketVec(vec)
    }

    /// Number of (open, close) symbols for one bracket kind.
    pub fn bracket_counts(&self, kind: BracketKind) -> (usize, usize) {
        self.iter().fold((0, 0), |(o, c), db| match db {
            DotBracket::Open(k) if *k == kind => (o + 1, c),
            DotBracket::Close(k) if *k == kind => (o, c + 1),
            _ => (o, c),
        })
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DotBracketVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, src, _)) => {
                    return Err(StructureError::InvalidToken(tok, src, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

impl From<&PairTable> for DotBracketVec {
    /// Nested pairs are written with round brackets. A pair that crosses an
    /// already written pair moves on to the next bracket kind that it does
    /// not cross.
    fn from(pt: &PairTable) -> Self {
        let mut result = DotBracketVec::unpaired(pt.len());
        let mut written: Vec<Vec<(usize, usize)>> = vec![Vec::new(); BRACKET_KINDS.len()];

        for (i, j) in pt.pairs() {
            let slot = written.iter()
                .position(|pairs| pairs.iter().all(|p| !p.crosses(&(i, j))))
                .unwrap_or(BRACKET_KINDS.len() - 1);
            written[slot].push((i, j));
            result[i] = DotBracket::Open(BRACKET_KINDS[slot]);
            result[j] = DotBracket::Close(BRACKET_KINDS[slot]);
        }
        result
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_bracket_from_char() {
        assert_eq!(DotBracket::try_from('.').unwrap(), DotBracket::Unpaired);
        assert_eq!(DotBracket::try_from('(').unwrap(), DotBracket::Open(BracketKind::Round));
        assert_eq!(DotBracket::try_from(')').unwrap(), DotBracket::Close(BracketKind::Round));
        assert_eq!(DotBracket::try_from('[').unwrap(), DotBracket::Open(BracketKind::Square));
        assert_eq!(DotBracket::try_from('>').unwrap(), DotBracket::Close(BracketKind::Angle));
    }

    #[test]
    fn test_char_from_dot_bracket() {
        assert_eq!(char::from(DotBracket::Unpaired), '.');
        assert_eq!(char::from(DotBracket::Open(BracketKind::Curly)), '{');
        assert_eq!(char::from(DotBracket::Close(BracketKind::Square)), ']');
    }

    #[test]
    fn test_dot_bracket_from_invalid_char() {
        let res = DotBracket::try_from('x');
        assert!(matches!(res, Err(StructureError::InvalidToken(_, src, _)) if src == "dot-bracket"));
        let res = DotBracketVec::try_from("((x))");
        assert!(matches!(res, Err(StructureError::InvalidToken(_, _, 2))));
    }

    #[test]
    fn test_dot_bracket_vec_from_str() {
        let dbv = DotBracketVec::try_from("(.)[.]").unwrap();
        assert_eq!(format!("{}", dbv), "(.)[.]");
        assert_eq!(dbv.len(), 6);
        assert_eq!(dbv[0], DotBracket::Open(BracketKind::Round));
        assert_eq!(dbv[1], DotBracket::Unpaired);
        assert_eq!(dbv[5], DotBracket::Close(BracketKind::Square));
    }

    #[test]
    fn test_hairpin_notation() {
        let hp = DotBracketVec::hairpin(3, 4);
        assert_eq!(hp.to_string(), "(((....)))");
        assert_eq!(hp.bracket_counts(BracketKind::Round), (3, 3));
        assert_eq!(hp.bracket_counts(BracketKind::Square), (0, 0));
        assert_eq!(DotBracketVec::unpaired(3).to_string(), "...");
    }

    #[test]
    fn test_dot_bracket_vec_from_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        let dbv = DotBracketVec::from(&pt);
        assert_eq!(format!("{}", dbv), "((..))");
    }

    #[test]
    fn test_dot_bracket_vec_from_crossing_pair_table() {
        let pt = PairTable::try_from("((..[[..))..]]").unwrap();
        let dbv = DotBracketVec::from(&pt);
        assert_eq!(format!("{}", dbv), "((..[[..))..]]");
    }
}

