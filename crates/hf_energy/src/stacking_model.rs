use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Serialize, Deserialize};

use crate::K0;
use crate::Base;
use crate::BasePair;
use crate::PairTypeRNA;
use crate::EnergyModel;

#[derive(Debug)]
pub enum ParamError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Io(e) => write!(f, "I/O error: {}", e),
            ParamError::Json(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for ParamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamError::Io(e) => Some(e),
            ParamError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ParamError {
    fn from(e: std::io::Error) -> Self {
        ParamError::Io(e)
    }
}

impl From<serde_json::Error> for ParamError {
    fn from(e: serde_json::Error) -> Self {
        ParamError::Json(e)
    }
}

/// All energies in dcal/mol at 37 °C. Missing fields in a
/// parameter file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackingParameters {
    /// Strength of a G-C or C-G pair in a stack.
    pub gc_strength: i32,
    /// Strength of an A-U or U-A pair in a stack.
    pub au_strength: i32,
    /// Strength of a G-U or U-G pair in a stack.
    pub gu_strength: i32,
    /// Initiation penalty of a hairpin with the minimum loop size.
    pub hairpin_initiation: i32,
    /// Flat penalty for loops below the minimum loop size.
    pub hairpin_too_small: i32,
    /// Jacobson-Stockmayer loop extrapolation coefficient.
    pub lxc37: f64,
    /// GNRA tetraloop closed by G-C or C-G.
    pub gnra_bonus: i32,
    /// All-C loop of three.
    pub poly_c_triloop: i32,
    /// All-C loops longer than three: slope * n + intercept.
    pub poly_c_slope: i32,
    pub poly_c_intercept: i32,
}

impl Default for StackingParameters {
    fn default() -> Self {
        StackingParameters {
            gc_strength: -340,
            au_strength: -210,
            gu_strength: -130,
            hairpin_initiation: 100,
            hairpin_too_small: 500,
            lxc37: 107.856,
            gnra_bonus: -150,
            poly_c_triloop: 150,
            poly_c_slope: 30,
            poly_c_intercept: 160,
        }
    }
}

impl StackingParameters {
    fn strength(&self, pt: PairTypeRNA) -> i32 {
        match pt {
            PairTypeRNA::GC | PairTypeRNA::CG => self.gc_strength,
            PairTypeRNA::AU | PairTypeRNA::UA => self.au_strength,
            PairTypeRNA::GU | PairTypeRNA::UG => self.gu_strength,
            PairTypeRNA::NN => 0,
        }
    }
}

/// A deliberately small free energy model: stacking between adjacent
/// pairs of a perfect stem and a hairpin loop term with two sequence
/// dependent corrections (GNRA tetraloops, poly-C loops). There are no
/// interior loops, bulges or dangles.
#[derive(Debug, Clone)]
pub struct StackingModel {
    min_hp_size: usize,
    temperature: f64,
    params: StackingParameters,
}

impl Default for StackingModel {
    fn default() -> Self {
        StackingModel::with_parameters(StackingParameters::default())
    }
}

impl StackingModel {
    pub fn with_parameters(params: StackingParameters) -> Self {
        StackingModel {
            min_hp_size: 3,
            temperature: 37.0,
            params,
        }
    }

    /// Load parameters from a JSON file (see `StackingParameters`).
    pub fn from_parameter_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamError> {
        let data = fs::read_to_string(path)?;
        let params: StackingParameters = serde_json::from_str(&data)?;
        Ok(StackingModel::with_parameters(params))
    }

    pub fn parameters(&self) -> &StackingParameters {
        &self.params
    }

    /// Only the loop extrapolation term depends on temperature.
    pub fn set_temperature(&mut self, temperature: f64) {
        debug!("Temperature: {} °C", temperature);
        self.temperature = temperature;
    }

    fn lxc(&self) -> f64 {
        self.params.lxc37 * (self.temperature + K0) / (37. + K0)
    }

    fn stack(&self, outer: &BasePair, inner: &BasePair) -> i32 {
        let pt = |bp: &BasePair| PairTypeRNA::from((bp.five, bp.three));
        (self.params.strength(pt(outer)) + self.params.strength(pt(inner))) / 2
    }
}

/// G, any, purine, A.
fn is_gnra(loop_seq: &[Base]) -> bool {
    matches!(loop_seq, [Base::G, _, r, Base::A] if r.is_purine())
}

impl EnergyModel for StackingModel {
    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn min_hairpin_size(&self) -> usize {
        self.min_hp_size
    }

    fn energy_of_stem(&self, _sequence: &[Base], pairs: &[BasePair]) -> i32 {
        pairs.windows(2)
            .filter(|w| w[0].stacks_on(&w[1]))
            .map(|w| self.stack(&w[0], &w[1]))
            .sum()
    }

    fn energy_of_hairpin(&self, loop_seq: &[Base], closing: (Base, Base)) -> i32 {
        let p = &self.params;
        let n = loop_seq.len();
        if n < self.min_hp_size {
            return p.hairpin_too_small;
        }

        let mut en = p.hairpin_initiation
            + (self.lxc() * (n as f64 / self.min_hp_size as f64).ln()).round() as i32;

        if is_gnra(loop_seq) && PairTypeRNA::from(closing).is_gc() {
            en += p.gnra_bonus;
        }

        if loop_seq.iter().all(|&b| b == Base::C) {
            en += if n == 3 {
                p.poly_c_triloop
            } else {
                p.poly_c_slope * n as i32 + p.poly_c_intercept
            };
        }
        en
    }
}
