//! # hairfold
//!
//! Stem-loop scanning, simplified hairpin free energies and precursor
//! hairpin detection for single RNA strands.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod energy_parsers;
pub mod hairpin_parsers;
pub mod logging;

pub mod structure {
    pub use ::hf_structure::*;
}

pub mod energy {
    pub use ::hf_energy::*;
}

pub mod hairpin {
    pub use ::hf_hairpin::*;
}

