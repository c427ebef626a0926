/// Base, NucleotideVec, PairTypeRNA, PairKind, ....
mod nucleotides;

/// Base pairs with residues and pair kind.
mod base_pair;

/// The energy model trait.
mod energy_model;

/// The simplified stacking model and its parameter file.
mod stacking_model;

pub use nucleotides::*;
pub use base_pair::*;
pub use energy_model::*;
pub use stacking_model::*;

