//! Telephone game experiments
//!
//! Runs the plain, verified and group-verified chains and prints one report
//! block per experiment.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tg_core::{ExperimentConfig, SimRng, Variant, report, run_all, run_selected};

/// Pass a message along a chain and measure how far it drifts
#[derive(Parser, Debug)]
#[command(name = "telephone")]
#[command(author, version, about = "Telephone game: message drift with and without verification", long_about = None)]
struct Args {
    /// Experiment to run (plain, verified, group-verified); repeatable, defaults to all
    #[arg(long = "variant")]
    variants: Vec<Variant>,

    /// Seed for reproducible runs
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file overriding the experiment parameters
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the reports as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "experiment failed");
            eprintln!("telephone: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only the reports.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ExperimentConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = config.seed.map(SimRng::new).unwrap_or_else(SimRng::from_entropy);
    tracing::info!(seed = rng.seed(), "starting experiments");

    let reports = if args.variants.is_empty() {
        run_all(&config, &mut rng)?
    } else {
        run_selected(&config, &args.variants, &mut rng)?
    };

    if args.json {
        println!("{}", report::to_json(&reports).context("serializing reports")?);
    } else {
        for r in &reports {
            print!("{}", report::render(&config, r));
        }
    }
    Ok(())
}
