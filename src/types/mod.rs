//! Core types and identifiers for the badge access simulator
//!
//! This module contains the fundamental value types shared by the rest of the
//! crate:
//!
//! - **Identifiers**: employee IDs, room names, and run IDs
//! - **Time**: "HH:MM" clock times and the minutes-since-midnight conversion
//! - **Enums**: decision categories and report output formats
//! - **Configuration**: CLI arguments, config files, and validation
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_simulator::types::*;
//!
//! let employee = EmployeeId::new("EMP001");
//! let opens = ClockTime::parse("09:00").unwrap();
//! assert_eq!(opens.minutes(), 540);
//! assert_eq!(time_to_minutes("10:15").unwrap(), 615);
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! assert!(config.validate().is_ok());
//! # let _ = employee;
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod time;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use time::*;
