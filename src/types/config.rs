//! Configuration structures for the badge access simulator
//!
//! Settings come from three layers: built-in defaults, an optional JSON config
//! file, and command line flags. Later layers win.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line flags for one simulation run
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "badge-access-simulator",
    version,
    about = "Badge Access Simulator - Grants or denies badge swipes against room policies",
    long_about = "Evaluates a batch of badge swipe requests against room access policies (minimum clearance, open hours, re-entry cooldown) in chronological order and reports a verdict for every request plus summary statistics.

EXAMPLES:
    # Run the built-in reference scenario
    badge-access-simulator

    # Evaluate your own dataset and emit JSON
    badge-access-simulator --dataset swipes.json --output-format json

    # Stress the engine with 500 reproducible synthetic swipes
    badge-access-simulator --generate 500 --seed 42

    # Validate a dataset without running it
    badge-access-simulator --dataset swipes.json --dry-run

SETTINGS:
    Flags override values from the --config JSON file, which override the
    built-in defaults. --print-config writes a starting template."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "JSON settings file",
        long_help = "JSON file with any of: dataset, generate, seed, output_format, output, log_json, log_directory. Flags given on the command line take precedence."
    )]
    pub config: Option<String>,

    /// Dataset file with requests and room policies
    #[arg(
        long,
        help = "Dataset file (JSON) with requests and room policies",
        long_help = "Path to a JSON dataset with a `requests` array and a `rooms` object. Defaults to the built-in reference scenario."
    )]
    pub dataset: Option<String>,

    /// Replace the dataset's requests with this many synthetic ones
    #[arg(long, help = "Generate N synthetic requests over the dataset's rooms")]
    pub generate: Option<usize>,

    /// Random seed for reproducible synthetic requests
    #[arg(long, help = "Seed for --generate, making the synthetic batch reproducible")]
    pub seed: Option<u64>,

    /// Report output format
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the report. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Report output path
    #[arg(short, long, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Log dataset loading and the run summary (INFO)")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging (one line per decision)")]
    pub debug: bool,

    /// Emit log lines as JSON
    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,

    /// Directory for rolling log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration and dataset without running
    #[arg(long, help = "Validate configuration and dataset without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print the default settings as JSON and exit")]
    pub print_config: bool,
}

/// On-disk JSON settings; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Dataset file path
    pub dataset: Option<String>,

    /// Number of synthetic requests to generate
    pub generate: Option<usize>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Report output format
    pub output_format: Option<String>,

    /// Report output path
    pub output: Option<String>,

    /// Emit log lines as JSON
    pub log_json: Option<bool>,

    /// Directory for rolling log files
    pub log_directory: Option<String>,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Dataset file path; the reference scenario is used when absent
    pub dataset: Option<String>,

    /// Number of synthetic requests to generate instead of the dataset's own
    pub generate: Option<usize>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Report output format
    pub output_format: String,

    /// Report output path; stdout when absent
    pub output: Option<String>,

    /// Emit log lines as JSON
    pub log_json: bool,

    /// Directory for rolling log files
    pub log_directory: Option<String>,
}

/// Failures while reading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Setting values that cannot be run
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),

    /// Synthetic request count is zero
    #[error("Generated request count must be greater than 0, got {0}")]
    InvalidGenerateCount(usize),

    /// A path setting is present but empty
    #[error("Path for {field} must not be empty")]
    EmptyPath {
        /// Name of the field with the empty path
        field: String,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            generate: None,
            seed: None,
            output_format: "text".to_string(),
            output: None,
            log_json: false,
            log_directory: None,
        }
    }
}

impl SimulationConfig {
    /// Defaults, then the `--config` file if given, then explicit flags
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Fill whatever the file leaves out with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            dataset: config_file.dataset.or(defaults.dataset),
            generate: config_file.generate.or(defaults.generate),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            output: config_file.output.or(defaults.output),
            log_json: config_file.log_json.unwrap_or(defaults.log_json),
            log_directory: config_file.log_directory.or(defaults.log_directory),
        }
    }

    /// Flags given on the command line replace file values
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.dataset {
            config.dataset = Some(value);
        }
        if let Some(value) = args.generate {
            config.generate = Some(value);
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.output {
            config.output = Some(value);
        }
        if let Some(value) = args.log_dir {
            config.log_directory = Some(value);
        }
        // A bare flag can only switch JSON logging on
        if args.log_json {
            config.log_json = true;
        }
    }

    /// Write the configuration as a JSON template
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Pretty JSON, as shown by `--print-config`
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings a run cannot use
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.get_output_format()?;

        if let Some(0) = self.generate {
            return Err(ConfigValidationError::InvalidGenerateCount(0));
        }

        Self::validate_path("dataset", self.dataset.as_deref())?;
        Self::validate_path("output", self.output.as_deref())?;
        Self::validate_path("log_directory", self.log_directory.as_deref())?;

        Ok(())
    }

    fn validate_path(field: &str, value: Option<&str>) -> Result<(), ConfigValidationError> {
        match value {
            Some(path) if path.trim().is_empty() => {
                Err(ConfigValidationError::EmptyPath { field: field.to_string() })
            }
            _ => Ok(()),
        }
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }

    /// Whether the run uses synthetic requests
    pub fn uses_synthetic_requests(&self) -> bool {
        self.generate.is_some()
    }
}
