//! Rooms and their access policies
//!
//! # Overview
//!
//! - **RoomPolicy**: minimum clearance, open window, and re-entry cooldown for one room
//! - **PolicyTable**: the keyed set of policies a run is evaluated against
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_simulator::facility::*;
//! use badge_access_simulator::types::ClockTime;
//!
//! let vault = RoomPolicy::new(
//!     3,
//!     ClockTime::parse("09:00").unwrap(),
//!     ClockTime::parse("10:00").unwrap(),
//!     30,
//! );
//! let policies = PolicyTable::new().with_room("Vault", vault);
//! assert!(policies.contains("Vault"));
//! ```

pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use registry::PolicyTable;
pub use room::RoomPolicy;
