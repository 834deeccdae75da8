// Badge Access Simulator - Main Entry Point
//
// Run the built-in reference scenario:
//
// ```console
// $ cargo build --release
// $ ./target/release/badge-access-simulator
// ```
//
// Or with a custom dataset and JSON output:
//
// ```console
// $ ./target/release/badge-access-simulator --dataset swipes.json --output-format json --verbose
// ```

use anyhow::{Context, Result};
use badge_access_simulator::events::RequestGenerator;
use badge_access_simulator::simulation::{Dataset, LoggingConfig, SimulationReport};
use badge_access_simulator::types::config::CliArgs;
use badge_access_simulator::types::{OutputFormat, SimulationConfig};
use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Held until exit so file logs are flushed
    let _log_guard = match LoggingConfig::for_run(&config, args.verbose, args.debug).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config, args.dry_run) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Load inputs, run the engine once, and emit the report
fn run(config: &SimulationConfig, dry_run: bool) -> Result<()> {
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format()?;

    let dataset = load_dataset(config)?;
    dataset.validate().context("Dataset validation failed")?;
    info!(
        requests = dataset.requests.len(),
        rooms = dataset.policies.len(),
        "Dataset ready"
    );

    if dry_run {
        eprintln!("Configuration and dataset validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        eprintln!(
            "  Requests: {}  Rooms: {}",
            dataset.requests.len(),
            dataset.policies.len()
        );
        return Ok(());
    }

    let outcome = dataset.simulate().context("Simulation run failed")?;
    let report = SimulationReport::new(&dataset.policies, outcome);
    info!(run_id = %report.run_id, "{}", report.stats.summary());

    report
        .write(format, config.output.as_deref().map(Path::new))
        .context("Failed to write report")?;

    if format == OutputFormat::Json && config.output.is_none() {
        // Keep stdout pure JSON; the summary goes to stderr
        eprintln!("{}", report.stats.summary());
    }
    Ok(())
}

/// Pick the dataset named by the configuration, optionally swapping in synthetic requests
fn load_dataset(config: &SimulationConfig) -> Result<Dataset> {
    let mut dataset = match &config.dataset {
        Some(path) => Dataset::from_file(path)
            .with_context(|| format!("Failed to load dataset from '{}'", path))?,
        None => Dataset::reference().context("Failed to build reference dataset")?,
    };

    if let Some(count) = config.generate {
        let mut generator = match config.seed {
            Some(seed) => RequestGenerator::with_seed(seed),
            None => RequestGenerator::new(),
        };
        dataset.requests = generator
            .generate(count, &dataset.policies)
            .context("Failed to generate synthetic requests")?;
        info!(count, seed = ?config.seed, "Using synthetic requests");
    } else if config.seed.is_some() {
        warn!("--seed has no effect without --generate");
    }

    Ok(dataset)
}
