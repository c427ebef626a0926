use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use hf_energy::StackingModel;

/// Free energy evaluation parameters.
#[derive(Debug, Args)]
pub struct EnergyModelArguments {
    /// Temperature in Celsius
    #[arg(short, long, default_value = "37.0")]
    pub temperature: f64,

    /// Parameter file in JSON (defaults to the built-in stacking parameters)
    #[arg(short, long, value_name = "FILE")]
    pub model_parameters: Option<PathBuf>,
}

impl EnergyModelArguments {
    pub fn build_model(&self) -> Result<StackingModel> {
        debug!("Using parameter file: {:?}", self.model_parameters);
        let mut model = if let Some(path) = &self.model_parameters {
            StackingModel::from_parameter_file(path)
                .with_context(|| format!("Failed to load parameter file {}", path.display()))?
        } else {
            StackingModel::default()
        };
        model.set_temperature(self.temperature);
        Ok(model)
    }
}
