use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum StructureError {
    UnmatchedOpen(usize),                // opening bracket at this position was never closed
    UnmatchedClose(usize),               // closing bracket at this position has no opener
    InvalidToken(String, String, usize), // invalid token, source and position
    InvalidPairTable(usize),             // inconsistent pair table entry
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched opening bracket at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched closing bracket at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::InvalidPairTable(i) => {
                write!(f, "Invalid entry at pair table position {}", i)
            }
        }
    }
}

impl std::error::Error for StructureError {}

