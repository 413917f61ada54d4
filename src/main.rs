//! fincalc CLI
//!
//! Evaluates calculator requests stored as JSON files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fincalc::{evaluate, write_schedule, BatchRunner, CalculationRecord, CalculationRequest, CalculatorKind};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Financial calculators: SIP, EMI, CAGR, SWP, XIRR and more")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List calculator kinds accepted in the `kind` field of a request
    Kinds,

    /// Evaluate one request (`{"kind": ..., "input": {...}}`) and print the result
    Run {
        /// Path to the request JSON file
        request: PathBuf,

        /// Also write the calculator's schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print a timestamped record envelope instead of the bare result
        #[arg(long)]
        record: bool,

        /// Label stored with the record
        #[arg(long, requires = "record")]
        label: Option<String>,
    },

    /// Evaluate a JSON array of requests in parallel
    Batch {
        /// Path to the JSON array of requests
        requests: PathBuf,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn run_one(path: &Path, csv: Option<&Path>, record: bool, label: Option<String>) -> Result<()> {
    let request: CalculationRequest = read_json(path)?;
    let kind = request.kind();

    let (result, output) = if record {
        let mut rec = CalculationRecord::evaluate(request).with_context(|| format!("evaluating {}", kind))?;
        if let Some(label) = label {
            rec = rec.labelled(label);
        }
        let json = rec.to_json()?;
        (rec.result, json)
    } else {
        let result = evaluate(&request).with_context(|| format!("evaluating {}", kind))?;
        let json = serde_json::to_string_pretty(&result)?;
        (result, json)
    };

    if let Some(csv_path) = csv {
        let file = File::create(csv_path).with_context(|| format!("creating {}", csv_path.display()))?;
        let rows = write_schedule(&result, BufWriter::new(file))
            .with_context(|| format!("writing schedule to {}", csv_path.display()))?;
        info!("Wrote {} schedule rows to {}", rows, csv_path.display());
    }

    println!("{}", output);
    Ok(())
}

fn run_batch(path: &Path) -> Result<()> {
    let requests: Vec<CalculationRequest> = read_json(path)?;
    info!("Loaded {} requests from {}", requests.len(), path.display());

    let outcomes = BatchRunner::new().verbose(true).run(&requests);
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Kinds => {
            for kind in CalculatorKind::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
        Command::Run { request, csv, record, label } => run_one(&request, csv.as_deref(), record, label),
        Command::Batch { requests } => run_batch(&requests),
    }
}
