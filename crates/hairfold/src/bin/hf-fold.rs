use log::info;
use colored::*;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use serde::Serialize;

use hf_energy::EnergyModel;
use hf_hairpin::Structure;
use hf_hairpin::predict_structure;
use hf_hairpin::minimum_free_energy;

use hairfold::logging::init_logging;
use hairfold::input_parsers::kcal;
use hairfold::input_parsers::ruler;
use hairfold::input_parsers::read_fasta_records_input;
use hairfold::energy_parsers::EnergyModelArguments;
use hairfold::hairpin_parsers::ScanArguments;


#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// List the selected stem-loops of every structure.
    #[arg(short, long)]
    pub stem_loops: bool,

    /// Print all results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "hf-fold")]
#[command(author, version, about = "Predict non-overlapping hairpin structures")]
pub struct Cli {
    #[command(flatten)]
    pub fold: FoldInput,

    #[command(flatten, next_help_heading = "Scan parameters")]
    pub scan: ScanArguments,

    #[command(flatten, next_help_heading = "Energy model parameters")]
    pub energy: EnergyModelArguments,
}

#[derive(Serialize)]
struct FoldOutput<'a> {
    name: &'a str,
    energy: i32,
    minimum_free_energy: i32,
    structure: Structure,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.fold.verbose);

    let model = cli.energy.build_model()?;
    let params = cli.scan.parameters();
    info!("Scan parameters: {:?}", params);

    let records = read_fasta_records_input(&cli.fold.input)?;
    let mut outputs = Vec::with_capacity(records.len());

    for record in &records {
        let structure = predict_structure(&record.sequence, &params, &model);
        let mfe = minimum_free_energy(&record.sequence, &model);

        if cli.fold.json {
            outputs.push(FoldOutput {
                name: record.name(),
                energy: structure.energy(),
                minimum_free_energy: mfe,
                structure,
            });
            continue;
        }

        if let Some(h) = &record.header {
            println!("{}", h.yellow())
        }
        info!("{}", ruler(structure.sequence.len().saturating_sub(1)).magenta());
        println!("{}\n{} {}", structure.sequence, structure.notation, kcal(structure.energy()).green());
        info!("{}", ruler(structure.sequence.len().saturating_sub(1)).magenta());

        if cli.fold.stem_loops {
            for sl in &structure.stem_loops {
                let p = model.structure_probability(sl.energy, mfe);
                println!("  {} {}", sl, format!("p={:.3}", p).cyan());
            }
        }
    }

    if cli.fold.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    }
    Ok(())
}
