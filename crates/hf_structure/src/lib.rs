mod error;
mod dotbracket;
mod pair_table;
mod pair_list;
mod notation;
mod pseudoknots;

pub use error::*;
pub use dotbracket::*;
pub use pair_table::*;
pub use pair_list::*;
pub use notation::*;
pub use pseudoknots::*;

