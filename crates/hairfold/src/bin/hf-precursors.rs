use log::info;
use colored::*;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use serde::Serialize;
use rayon::prelude::*;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

use hf_hairpin::PrecursorHairpin;
use hf_hairpin::find_precursor_hairpins;

use hairfold::logging::init_logging;
use hairfold::input_parsers::kcal;
use hairfold::input_parsers::read_fasta_records_input;
use hairfold::hairpin_parsers::PrecursorArguments;

#[derive(Debug, Parser)]
#[command(name = "hf-precursors")]
#[command(version, about = "Find small RNA precursor hairpins")]
pub struct Cli {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Print all results as JSON.
    #[arg(long)]
    json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten, next_help_heading = "Precursor parameters")]
    precursor: PrecursorArguments,
}

#[derive(Serialize)]
struct RecordHits<'a> {
    name: &'a str,
    hairpins: Vec<PrecursorHairpin>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.precursor.validate()?;

    let params = cli.precursor.parameters();
    info!("Precursor parameters: {:?}", params);
    let records = read_fasta_records_input(&cli.input)?;

    let pb = if records.len() > 1 {
        ProgressBar::new(records.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
        .progress_chars("#>-"),
    );

    let results: Vec<RecordHits> = records
        .par_iter()
        .map_init(
            || pb.clone(),
            |pb, record| {
                let hairpins = find_precursor_hairpins(&record.sequence, &params);
                pb.inc(1);
                RecordHits { name: record.name(), hairpins }
            },
        ).collect();
    pb.finish_and_clear();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (record, hits) in records.iter().zip(&results) {
        if let Some(h) = &record.header {
            println!("{}", h.yellow());
        }
        if hits.hairpins.is_empty() {
            println!("{}", "no precursor hairpins".red());
            continue;
        }
        for hp in &hits.hairpins {
            println!("{:>6} {:>6} {} {}", hp.start, hp.end, hp.notation, kcal(hp.free_energy).green());
            println!("{:>13} {}", "", hp.sequence);
            println!("{:>13} mature {}  star {}", "", hp.mature_sequence.cyan(), hp.star_sequence.cyan());
        }
    }
    Ok(())
}
