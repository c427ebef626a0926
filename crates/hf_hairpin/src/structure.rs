use log::debug;
use serde::Serialize;

use hf_structure::BracketKind;
use hf_structure::DotBracket;
use hf_structure::DotBracketVec;
use hf_structure::PairTable;
use hf_structure::StructureError;
use hf_energy::BasePair;
use hf_energy::EnergyModel;
use hf_energy::NucleotideVec;

use crate::StemLoop;
use crate::ScanParameters;
use crate::SelectionPolicy;
use crate::LowestEnergyFirst;
use crate::scan_stem_loops;
use crate::select_non_overlapping;

/// A coherent set of non-overlapping stem-loops on one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    /// The normalized (uppercase, U instead of T) sequence.
    pub sequence: String,
    pub notation: String,
    /// Pairs of all stem-loops, in stem-loop order.
    pub base_pairs: Vec<BasePair>,
    /// Ordered by position.
    pub stem_loops: Vec<StemLoop>,
}

impl Structure {
    pub fn empty() -> Self {
        Structure {
            sequence: String::new(),
            notation: String::new(),
            base_pairs: Vec::new(),
            stem_loops: Vec::new(),
        }
    }

    /// Assemble the structure of `sequence` from stem-loops that must not
    /// overlap each other.
    pub(crate) fn from_stem_loops(sequence: &NucleotideVec, stem_loops: Vec<StemLoop>) -> Self {
        debug_assert!(
            stem_loops.iter().enumerate()
                .all(|(n, a)| stem_loops[n + 1..].iter().all(|b| !a.overlaps(b))),
            "overlapping stem-loops"
        );
        let mut notation = DotBracketVec::unpaired(sequence.len());
        let base_pairs: Vec<BasePair> = stem_loops.iter()
            .flat_map(|sl| sl.stem.pairs.iter().copied())
            .collect();
        for bp in &base_pairs {
            notation[bp.i] = DotBracket::Open(BracketKind::Round);
            notation[bp.j] = DotBracket::Close(BracketKind::Round);
        }
        Structure {
            sequence: sequence.to_string(),
            notation: notation.to_string(),
            base_pairs,
            stem_loops,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sum of all stem-loop energies (dcal/mol); 0 for the open chain.
    pub fn energy(&self) -> i32 {
        self.stem_loops.iter().map(|sl| sl.energy).sum()
    }

    pub fn pair_table(&self) -> Result<PairTable, StructureError> {
        PairTable::from_pairs(self.sequence.len(), &self.base_pairs)
    }
}

/// Predict a structure for raw sequence text: scan for stem-loop
/// candidates, then keep a non-overlapping subset, most stable first.
pub fn predict_structure<M: EnergyModel>(
    sequence: &str,
    params: &ScanParameters,
    model: &M,
) -> Structure {
    predict_structure_with(sequence, params, model, &LowestEnergyFirst)
}

/// Like `predict_structure`, with a custom selection policy.
pub fn predict_structure_with<M: EnergyModel, P: SelectionPolicy>(
    sequence: &str,
    params: &ScanParameters,
    model: &M,
    policy: &P,
) -> Structure {
    if sequence.is_empty() {
        return Structure::empty();
    }
    let sequence = NucleotideVec::from_lossy(sequence);
    let candidates = scan_stem_loops(&sequence, params, model);
    let selected = select_non_overlapping(candidates, policy);
    Structure::from_stem_loops(&sequence, selected)
}

/// Energy of the most stable stem-loop under default scan bounds. The
/// open chain scores 0, so the result is never positive, and it is 0 for
/// empty input or if no candidate beats the open chain.
pub fn minimum_free_energy<M: EnergyModel>(sequence: &str, model: &M) -> i32 {
    if sequence.is_empty() {
        return 0;
    }
    let sequence = NucleotideVec::from_lossy(sequence);
    let best = scan_stem_loops(&sequence, &ScanParameters::default(), model)
        .iter()
        .map(|sl| sl.energy)
        .min();
    debug!("best stem-loop energy: {:?}", best);
    best.map_or(0, |en| en.min(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_energy::StackingModel;
    use hf_structure::validate_notation;
    use hf_structure::parse_notation;

    #[test]
    fn test_predict_structure_empty() {
        let model = StackingModel::default();
        let s = predict_structure("", &ScanParameters::default(), &model);
        assert_eq!(s, Structure::empty());
        assert!(s.is_empty());
        assert_eq!(s.energy(), 0);
    }

    #[test]
    fn test_predict_structure_single_hairpin() {
        let model = StackingModel::default();
        let s = predict_structure("GGGAAAACCC", &ScanParameters::new(3, 4, 4), &model);
        assert_eq!(s.sequence, "GGGAAAACCC");
        assert_eq!(s.notation, "(((....)))");
        assert_eq!(s.stem_loops.len(), 1);
        assert_eq!(s.base_pairs.len(), 3);
        assert_eq!(s.energy(), s.stem_loops[0].energy);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overlapping stem-loops")]
    fn test_from_stem_loops_rejects_overlap() {
        let model = StackingModel::default();
        let seq = NucleotideVec::try_from("GGGGAAAACCCC").unwrap();
        let params = ScanParameters::new(3, 3, 8).with_wobble(false);
        let candidates = scan_stem_loops(&seq, &params, &model);
        assert!(candidates.len() > 1);
        Structure::from_stem_loops(&seq, candidates);
    }

    #[test]
    fn test_predict_structure_no_pairs() {
        let model = StackingModel::default();
        let s = predict_structure("acgtacgtac", &ScanParameters::new(3, 4, 4), &model);
        assert_eq!(s.sequence, "ACGUACGUAC");
        assert_eq!(s.notation, "..........");
        assert!(s.base_pairs.is_empty());
        assert!(s.stem_loops.is_empty());
    }

    #[test]
    fn test_predict_structure_two_hairpins() {
        let model = StackingModel::default();
        let params = ScanParameters::new(4, 4, 4).with_wobble(false);
        let s = predict_structure("GGGGAAAACCCCAAAAAAAAAACCCCAAAAGGGG", &params, &model);
        assert_eq!(s.notation, "((((....))))..........((((....))))");
        assert_eq!(s.stem_loops.len(), 2);
        assert_eq!(s.base_pairs.len(), 8);
        assert_eq!(s.base_pairs[0].i, 0);
        assert_eq!(s.base_pairs[4].i, 22);
    }

    #[test]
    fn test_predicted_notation_round_trips() {
        let model = StackingModel::default();
        let seq = "GCGCAUAUGCGCAAGCUUGCGCUAGCAUGCAUGCAAAGCAUGGGAAACCC";
        let s = predict_structure(seq, &ScanParameters::new(2, 3, 10), &model);
        assert_eq!(s.notation.len(), s.sequence.len());
        assert!(validate_notation(&s.notation));

        let mut pairs: Vec<(usize, usize)> = s.base_pairs.iter().map(|bp| (bp.i, bp.j)).collect();
        pairs.sort();
        assert_eq!(parse_notation(&s.notation).unwrap(), pairs);
        assert!(s.pair_table().is_ok());
    }

    #[test]
    fn test_minimum_free_energy() {
        let model = StackingModel::default();
        assert_eq!(minimum_free_energy("", &model), 0);
        assert_eq!(minimum_free_energy("AAAAAAAAAAAAAAAAAAAA", &model), 0);
        assert_eq!(minimum_free_energy("GGGAAAACCC", &model), -549);
        assert!(minimum_free_energy("GGGAAAACCC", &model) < 0);
    }

    #[test]
    fn test_minimum_free_energy_decreases_with_stem_length() {
        let model = StackingModel::default();
        let mut last = 0;
        for stem in 3..8 {
            let seq = format!("{}AAAA{}", "G".repeat(stem), "C".repeat(stem));
            let mfe = minimum_free_energy(&seq, &model);
            assert!(mfe < last, "stem {}: {} !< {}", stem, mfe, last);
            last = mfe;
        }
    }
}

