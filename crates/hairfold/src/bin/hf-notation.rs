use log::info;
use colored::*;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use hf_structure::PairList;
use hf_structure::PairTable;
use hf_structure::detect_pseudoknots;

use hairfold::logging::init_logging;
use hairfold::input_parsers::ruler;
use hairfold::input_parsers::read_notations_input;

#[derive(Debug, Parser)]
#[command(name = "hf-notation")]
#[command(version, about = "Validate dot-bracket notation and report crossing pairs")]
pub struct Cli {
    /// Input file with one notation per line, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Also list every base pair.
    #[arg(short, long)]
    pairs: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let notations = read_notations_input(&cli.input)?;
    info!("{} notation(s)", notations.len());

    for notation in &notations {
        info!("{}", ruler(notation.len().saturating_sub(1)).magenta());
        let pairs = match PairTable::try_from(notation.as_str()) {
            Ok(pt) => PairList::from(&pt),
            Err(e) => {
                println!("{} {} {}", notation, "invalid".red(), e);
                continue;
            }
        };

        let knots = detect_pseudoknots(pairs.pairs());
        let status = if knots.is_empty() {
            "valid".green()
        } else {
            "valid, pseudoknotted".yellow()
        };
        println!("{} {} ({} pairs)", notation, status, pairs.pairs().len());

        if cli.pairs {
            for p in pairs.pairs() {
                println!("  {:>4} {:>4}", p.i(), p.j());
            }
        }
        for (a, b) in knots {
            println!("  {} ({}, {}) x ({}, {})", "crossing".yellow(), a.i(), a.j(), b.i(), b.j());
        }
    }
    Ok(())
}
