//! Parsing and validation of (extended) dot-bracket strings.

use crate::PairTable;
use crate::DotBracketVec;
use crate::StructureError;

/// Parse a notation string into `(open, close)` position pairs, sorted by
/// the opening position. Round, square, curly and angle brackets are each
/// matched on their own stack, so `"(.[.).]"` yields two crossing pairs.
pub fn parse_notation(notation: &str) -> Result<Vec<(usize, usize)>, StructureError> {
    let dbv = DotBracketVec::try_from(notation)?;
    let pt = PairTable::try_from(&dbv)?;
    Ok(pt.pairs().collect())
}

/// True iff the notation contains only known symbols and every bracket
/// kind is balanced on its own. The empty string is valid.
pub fn validate_notation(notation: &str) -> bool {
    parse_notation(notation).is_ok()
}
