use std::fmt;
use serde::Serialize;

use hf_structure::DotBracketVec;
use hf_energy::Base;
use hf_energy::BasePair;
use hf_energy::EnergyModel;
use hf_energy::bases_to_string;

/// A perfect stem: pairs ordered from the outermost inwards, each pair
/// directly stacked on the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stem {
    pub pairs: Vec<BasePair>,
    pub energy: i32,
}

impl Stem {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn outer(&self) -> Option<&BasePair> {
        self.pairs.first()
    }

    pub fn inner(&self) -> Option<&BasePair> {
        self.pairs.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoopType {
    Hairpin,
}

/// The unpaired span `[start, end]` closed by a stem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loop {
    pub start: usize,
    pub end: usize,
    pub kind: LoopType,
    pub sequence: String,
    pub energy: i32,
}

impl Loop {
    pub fn size(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// A stem plus the hairpin loop it closes, spanning `[start, end]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemLoop {
    pub start: usize,
    pub end: usize,
    pub stem: Stem,
    pub hairpin: Loop,
    /// Stem energy plus loop energy (dcal/mol).
    pub energy: i32,
    /// Local notation, as long as the span.
    pub notation: String,
}

impl StemLoop {
    /// Assemble a stem-loop from a loop `[loop_start, loop_start + loop_size)`
    /// and the number of pairs stacked around it. Returns `None` if any of
    /// those pairs is not a valid base pair or does not fit the sequence.
    pub fn new<M: EnergyModel>(
        sequence: &[Base],
        loop_start: usize,
        loop_size: usize,
        stem_length: usize,
        model: &M,
    ) -> Option<Self> {
        if stem_length == 0 || loop_size == 0 || loop_start < stem_length {
            return None;
        }
        let loop_end = loop_start + loop_size - 1;
        let start = loop_start - stem_length;
        let end = loop_end + stem_length;
        if end >= sequence.len() {
            return None;
        }

        let pairs = (0..stem_length)
            .map(|t| BasePair::new(sequence, start + t, end - t))
            .collect::<Option<Vec<_>>>()?;
        let stem_energy = model.energy_of_stem(sequence, &pairs);

        let loop_seq = &sequence[loop_start..=loop_end];
        let closing = (sequence[loop_start - 1], sequence[loop_end + 1]);
        let loop_energy = model.energy_of_hairpin(loop_seq, closing);

        Some(StemLoop {
            start,
            end,
            stem: Stem { pairs, energy: stem_energy },
            hairpin: Loop {
                start: loop_start,
                end: loop_end,
                kind: LoopType::Hairpin,
                sequence: bases_to_string(loop_seq),
                energy: loop_energy,
            },
            energy: stem_energy + loop_energy,
            notation: DotBracketVec::hairpin(stem_length, loop_size).to_string(),
        })
    }

    /// Number of positions covered: 5' stem, loop and 3' stem.
    pub fn span_length(&self) -> usize {
        self.end + 1 - self.start
    }

    /// True if the two spans share at least one position.
    pub fn overlaps(&self, other: &StemLoop) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for StemLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>4}, {:>4}] {} stem {:>2} loop {:>2} {:>7.2}",
            self.start, self.end, self.notation,
            self.stem.len(), self.hairpin.size(),
            self.energy as f64 / 100.0)
    }
}
