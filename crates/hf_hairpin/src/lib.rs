//! Hairpin discovery on single RNA strands.
//!
//! Every stem in this crate is a *perfect* antiparallel run: pairs are
//! grown one position at a time from a fixed starting pair and growth
//! stops at the first position that cannot pair. Mismatches, bulges and
//! interior loops are never modelled, so a stem is fully described by its
//! outermost pair and its length.

/// Stem, Loop and StemLoop.
mod stem_loop;

/// Candidate enumeration.
mod scanner;

/// Non-overlapping selection of candidates.
mod selection;

/// Whole-sequence structures and minimum free energy.
mod structure;

/// Small RNA precursor hairpins.
mod precursor;

pub use stem_loop::*;
pub use scanner::*;
pub use selection::*;
pub use structure::*;
pub use precursor::*;

