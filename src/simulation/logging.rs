//! Logging and tracing setup
//!
//! Console output always goes to stderr so that reports written to stdout stay
//! machine-readable. With a log directory configured, every event is also
//! appended as a JSON line to a daily-rolling file.

use std::io;
use tracing::{debug, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::types::SimulationConfig;

/// Boxed error returned by subscriber initialization
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync>;

/// Prefix of the rolling log files, e.g. `badge-access-simulator.2024-05-01`
const LOG_FILE_PREFIX: &str = "badge-access-simulator";

/// How the process-wide tracing subscriber is set up
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level emitted for this crate
    pub level: Level,
    /// JSON lines on the console instead of compact text
    pub json_format: bool,
    /// Directory for daily-rolling JSON log files
    pub log_directory: Option<String>,
    /// Emit span close events with timings (engine runs are instrumented)
    pub span_timings: bool,
    /// Filter directives overriding `level`, in `RUST_LOG` syntax
    pub directives: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_directory: None,
            span_timings: false,
            directives: None,
        }
    }
}

impl LoggingConfig {
    /// Default setup: warnings and errors only, compact console output
    pub fn new() -> Self {
        Self::default()
    }

    /// Setup for one CLI invocation.
    ///
    /// `debug` wins over `verbose`; debug also turns on span timings so the
    /// duration of each engine run is logged.
    pub fn for_run(config: &SimulationConfig, verbose: bool, debug: bool) -> Self {
        let level = match (debug, verbose) {
            (true, _) => Level::DEBUG,
            (false, true) => Level::INFO,
            (false, false) => Level::WARN,
        };

        let mut logging = Self::new().with_level(level);
        logging.span_timings = debug;
        logging.json_format = config.log_json;
        logging.log_directory = config.log_directory.clone();
        logging
    }

    /// Set the level for this crate's targets
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Use explicit filter directives instead of the level
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Whether events are also written to rolling files
    pub fn logs_to_file(&self) -> bool {
        self.log_directory.is_some()
    }

    /// Directive used when neither explicit directives nor `RUST_LOG` are set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn filter(&self) -> Result<EnvFilter, LoggingInitError> {
        match &self.directives {
            Some(directives) => Ok(EnvFilter::try_new(directives)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Install the global subscriber.
    ///
    /// Hold the returned guard until exit; dropping it flushes the file writer.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingInitError> {
        let subscriber = Registry::default().with(self.filter()?);

        let (file_layer, guard) = match &self.log_directory {
            Some(dir) => {
                let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(self.span_events());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        // The two console formats are different layer types, hence two branches
        if self.json_format {
            let console = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events());
            subscriber.with(file_layer).with(console).try_init()?;
        } else {
            let console = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_span_events(self.span_events());
            subscriber.with(file_layer).with(console).try_init()?;
        }

        debug!(level = %self.level, json = self.json_format, to_file = self.logs_to_file(), "Logging ready");
        Ok(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        let logging = LoggingConfig::for_run(&SimulationConfig::default(), false, false);
        assert_eq!(logging.level, Level::WARN);
        assert!(!logging.json_format);
        assert!(!logging.span_timings);
        assert!(!logging.logs_to_file());
        assert!(logging.directives.is_none());
    }

    #[test]
    fn test_debug_wins_over_verbose() {
        let config = SimulationConfig::default();
        assert_eq!(LoggingConfig::for_run(&config, true, false).level, Level::INFO);

        let logging = LoggingConfig::for_run(&config, true, true);
        assert_eq!(logging.level, Level::DEBUG);
        assert!(logging.span_timings);
    }

    #[test]
    fn test_run_settings_carry_over() {
        let config = SimulationConfig {
            log_json: true,
            log_directory: Some("logs".to_string()),
            ..SimulationConfig::default()
        };
        let logging = LoggingConfig::for_run(&config, false, false);
        assert!(logging.json_format);
        assert_eq!(logging.log_directory.as_deref(), Some("logs"));
        assert!(logging.logs_to_file());
    }

    #[test]
    fn test_default_directive_targets_this_crate() {
        let logging = LoggingConfig::new().with_level(Level::INFO);
        assert_eq!(logging.default_directive(), "badge_access_simulator=INFO");

        let logging = logging.with_directives("badge_access_simulator::simulation=trace");
        assert_eq!(
            logging.directives.as_deref(),
            Some("badge_access_simulator::simulation=trace")
        );
    }
}
