//! Simulation engine and supporting services
//!
//! # Overview
//!
//! - **AccessSimulator**: evaluates requests in chronological order against a policy table
//! - **AccessLog**: grants recorded during a run, used for cooldown checks
//! - **SimulationStats**: totals, success rate, and breakdowns over the verdicts
//! - **Dataset**: the reference scenario and JSON dataset loading
//! - **SimulationReport**: text and JSON rendering of a finished run
//! - **SimulationError**: precondition and loading failures
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_simulator::simulation::*;
//!
//! let dataset = Dataset::reference().unwrap();
//! let outcome = AccessSimulator::new(&dataset.policies).run(&dataset.requests).unwrap();
//! let stats = outcome.stats();
//! assert_eq!(stats.total, 10);
//! assert_eq!(stats.success_rate_percent, 70);
//! ```

pub mod access_log;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;
pub mod statistics;

// Re-export all public types for convenience
pub use access_log::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use report::*;
pub use statistics::*;
