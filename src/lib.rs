//! Badge Access Simulator
//!
//! Decides whether each badge swipe in a batch opens the door, given per-room
//! access policies, and summarises the outcome.
//!
//! # Overview
//!
//! Each room has a policy: a minimum clearance level, an open window, and a
//! re-entry cooldown. Requests are processed in chronological order (ties keep
//! their input order) and every request gets exactly one verdict, decided by the
//! first rule that applies:
//!
//! 1. **Clearance**: the badge level is below the room minimum
//! 2. **Open hours**: the swipe falls outside the open window (close time inclusive)
//! 3. **Cooldown**: the same employee was let into the same room too recently
//! 4. Otherwise the request is **granted**
//!
//! Only granted requests count towards later cooldowns. A run is a pure
//! computation over its inputs; running the same inputs twice gives the same
//! verdicts.
//!
//! ## Quick Start
//!
//! ```rust
//! use badge_access_simulator::*;
//!
//! let policies = PolicyTable::new().with_room(
//!     "Vault",
//!     RoomPolicy::new(3, ClockTime::parse("09:00")?, ClockTime::parse("10:00")?, 30),
//! );
//! let requests = vec![
//!     AccessRequest::parse("EMP002", 1, "09:30", "Vault")?,
//!     AccessRequest::parse("EMP004", 3, "09:45", "Vault")?,
//! ];
//!
//! let outcome = AccessSimulator::new(&policies).run(&requests)?;
//! assert_eq!(outcome.verdicts[0].reason, "Denied: Access level 1 below required level 3");
//! assert!(outcome.verdicts[1].granted);
//! assert_eq!(outcome.stats().success_rate_percent, 50);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, clock times, enums, and configuration
//! - [`facility`]: Room policies and the policy table
//! - [`events`]: Requests, decisions, verdicts, and synthetic generation
//! - [`simulation`]: The engine, statistics, datasets, reports, and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod events;
pub mod facility;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    time_to_minutes, ClockTime, ConfigError, ConfigValidationError, DecisionKind, EmployeeId,
    OutputFormat, RoomName, RunId, SimulationConfig,
};

// Rooms and policies
pub use facility::{PolicyTable, RoomPolicy};

// Requests and verdicts
pub use events::{AccessDecision, AccessRequest, RequestGenerator, Verdict};

// Engine and supporting services
pub use simulation::{
    simulate_access, AccessLog, AccessSimulator, Dataset, LoggingConfig, RoomStats,
    SimulationError, SimulationOutcome, SimulationReport, SimulationResult, SimulationStats,
};
