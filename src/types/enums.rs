//! Enumeration types for the badge access simulator
//!
//! This module contains the decision categories produced by the engine and the
//! report output formats understood by the command line front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Access was granted
    Granted,
    /// Employee clearance is below the room minimum
    InsufficientClearance,
    /// Request falls outside the room's open hours
    RoomClosed,
    /// Employee re-entered the room before the cooldown elapsed
    CooldownActive,
}

impl DecisionKind {
    /// All denial categories, in rule evaluation order
    pub const DENIALS: [DecisionKind; 3] = [
        DecisionKind::InsufficientClearance,
        DecisionKind::RoomClosed,
        DecisionKind::CooldownActive,
    ];

    /// Whether this decision grants access
    pub fn is_granted(&self) -> bool {
        matches!(self, DecisionKind::Granted)
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionKind::Granted => write!(f, "Granted"),
            DecisionKind::InsufficientClearance => write!(f, "Insufficient Clearance"),
            DecisionKind::RoomClosed => write!(f, "Room Closed"),
            DecisionKind::CooldownActive => write!(f, "Cooldown Active"),
        }
    }
}

/// Output formats for simulation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
