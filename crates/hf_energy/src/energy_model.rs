use crate::Base;
use crate::BasePair;

pub const K0: f64 = 273.15;
pub const KB: f64 = 0.001987204285; // kcal/(mol*K)

/// Free energies are in dcal/mol throughout.
pub trait EnergyModel {
    fn temperature(&self) -> f64;

    fn min_hairpin_size(&self) -> usize;

    /// Sum of stacking contributions over adjacent pairs of a stem.
    /// A stem of a single pair has nothing to stack on and scores 0.
    fn energy_of_stem(&self,
        sequence: &[Base],
        pairs: &[BasePair]
    ) -> i32;

    /// Hairpin loop penalty for the unpaired `loop_seq`, closed by the
    /// pair `closing.0 - closing.1`.
    fn energy_of_hairpin(&self,
        loop_seq: &[Base],
        closing: (Base, Base)
    ) -> i32;

    /// A relative stability score in `[0, 1]` (not a partition function).
    fn structure_probability(&self,
        structure_energy: i32,
        ensemble_energy: i32
    ) -> f64 {
        structure_probability(structure_energy, ensemble_energy, self.temperature())
    }
}

/// Boltzmann weight of a structure relative to the ensemble minimum,
/// clamped to `[0, 1]`. Equal energies give 1.
pub fn structure_probability(structure_energy: i32, ensemble_energy: i32, celsius: f64) -> f64 {
    let kt = KB * (celsius + K0);
    let delta = (structure_energy as f64 - ensemble_energy as f64) / 100.;
    (-delta / kt).exp().clamp(0., 1.)
}
