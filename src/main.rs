use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use evoline::{
    breeding::TruncationStrategy,
    dataset::Dataset,
    error::{RegressionError, Result, ResultExt},
    evolution::{SearchLauncher, SearchOptions, SearchOutcome},
    fitness::AbsoluteResidual,
    rng::RandomNumberGenerator,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: evoline <dataset>");
            return ExitCode::FAILURE;
        }
    };

    match run(&path) {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("evoline: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<SearchOutcome> {
    let dataset = Dataset::from_path(path)?;
    if dataset.is_empty() {
        return Err(RegressionError::Parse(
            "dataset contains no samples".to_string(),
        ));
    }

    // EVOLINE_SEED makes a run reproducible; otherwise seed from entropy.
    let mut rng = match env::var("EVOLINE_SEED") {
        Ok(raw) => {
            let seed: u64 = raw.parse().context("invalid EVOLINE_SEED")?;
            RandomNumberGenerator::from_seed(seed)
        }
        Err(_) => RandomNumberGenerator::new(),
    };

    let options = SearchOptions::default();
    let challenge = AbsoluteResidual::new(&dataset);
    let launcher = SearchLauncher::new(TruncationStrategy::default(), challenge);

    launcher.search(&options, &mut rng)
}
