//! Precursor (pre-miRNA like) hairpins.
//!
//! A window of the input is accepted if a perfect stem grown inward from
//! both window ends reaches `PRECURSOR_MIN_STEM` pairs and leaves a loop
//! within `PRECURSOR_LOOP_RANGE`. Real precursors usually carry mismatches
//! and bulges in their stems; those are not detected here.

use std::ops::RangeInclusive;
use log::debug;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use hf_structure::DotBracketVec;
use hf_energy::Base;
use hf_energy::NucleotideVec;
use hf_energy::bases_to_string;

use crate::grow_stem_inward;

/// Windows shorter than this are never considered, even if the caller
/// asks for a smaller `min_length`.
pub const PRECURSOR_MIN_LENGTH_FLOOR: usize = 55;
pub const PRECURSOR_MIN_STEM: usize = 18;
pub const PRECURSOR_LOOP_RANGE: RangeInclusive<usize> = 3..=25;
/// Stem growth stops at `window / 2 - PRECURSOR_LOOP_RESERVE` pairs.
pub const PRECURSOR_LOOP_RESERVE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecursorParameters {
    pub min_length: usize,
    pub max_length: usize,
    pub mature_length: usize,
}

impl Default for PrecursorParameters {
    fn default() -> Self {
        PrecursorParameters {
            min_length: 55,
            max_length: 120,
            mature_length: 22,
        }
    }
}

impl PrecursorParameters {
    /// `max(min_length, PRECURSOR_MIN_LENGTH_FLOOR)`.
    pub fn effective_min_length(&self) -> usize {
        self.min_length.max(PRECURSOR_MIN_LENGTH_FLOOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecursorHairpin {
    /// Window `[start, end]` in the input sequence.
    pub start: usize,
    pub end: usize,
    pub sequence: String,
    pub notation: String,
    /// 5' arm.
    pub mature_sequence: String,
    /// 3' arm, as long as the mature arm.
    pub star_sequence: String,
    pub stem_length: usize,
    pub loop_size: usize,
    /// `-1.5 * stem + 0.5 * loop` kcal/mol, stored in dcal/mol.
    pub free_energy: i32,
}

impl PrecursorHairpin {
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

fn precursor_energy(stem_length: usize, loop_size: usize) -> i32 {
    -150 * stem_length as i32 + 50 * loop_size as i32
}

/// Evaluate the window `[start, start + len)`.
fn evaluate_window(
    sequence: &[Base],
    start: usize,
    len: usize,
    params: &PrecursorParameters,
) -> Option<PrecursorHairpin> {
    if len < params.min_length || len > params.max_length || start + len > sequence.len() {
        return None;
    }
    let end = start + len - 1;
    let cap = (len / 2).saturating_sub(PRECURSOR_LOOP_RESERVE);
    let stem_length = grow_stem_inward(sequence, start, end, cap, true);
    let loop_size = len - 2 * stem_length;
    if stem_length < PRECURSOR_MIN_STEM || !PRECURSOR_LOOP_RANGE.contains(&loop_size) {
        return None;
    }

    let window = &sequence[start..=end];
    let arm = params.mature_length.min(len);
    Some(PrecursorHairpin {
        start,
        end,
        sequence: bases_to_string(window),
        notation: DotBracketVec::hairpin(stem_length, loop_size).to_string(),
        mature_sequence: bases_to_string(&window[..arm]),
        star_sequence: bases_to_string(&window[len - arm..]),
        stem_length,
        loop_size,
        free_energy: precursor_energy(stem_length, loop_size),
    })
}

/// Slide windows of every length in `[max(min_length, 55), max_length]`
/// over `sequence` and report all accepted ones, ordered by window start,
/// then length. Window starts are evaluated in parallel.
pub fn find_precursor_hairpins(
    sequence: &str,
    params: &PrecursorParameters,
) -> Vec<PrecursorHairpin> {
    let sequence = NucleotideVec::from_lossy(sequence);
    let n = sequence.len();
    let min_length = params.effective_min_length();
    if n < min_length || params.max_length < min_length {
        return Vec::new();
    }

    let seq = &sequence[..];
    let hits: Vec<PrecursorHairpin> = (0..=n - min_length)
        .into_par_iter()
        .flat_map_iter(|start| {
            let max_length = params.max_length.min(n - start);
            (min_length..=max_length)
                .filter_map(move |len| evaluate_window(seq, start, len, params))
        })
        .collect();
    debug!("{} precursor hairpins in {} nt", hits.len(), n);
    hits
}
