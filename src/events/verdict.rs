//! Access verdicts
//!
//! This module contains the decision attached to each processed request and the
//! Verdict record handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::events::access_request::AccessRequest;
use crate::types::{ClockTime, DecisionKind, RoomName};

/// Outcome of evaluating one request against its room policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// All checks passed
    Granted {
        /// Room entered
        room: RoomName,
    },
    /// Clearance below the room minimum
    InsufficientClearance {
        /// Level on the badge
        access_level: u32,
        /// Level the room requires
        required_level: u32,
    },
    /// Outside the room's open window
    RoomClosed {
        /// Window start
        open_time: ClockTime,
        /// Window end (inclusive)
        close_time: ClockTime,
    },
    /// Re-entry before the cooldown elapsed
    CooldownActive {
        /// Minutes until re-entry is allowed
        remaining_minutes: u32,
    },
}

impl AccessDecision {
    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted { .. })
    }

    /// Category of the decision
    pub fn kind(&self) -> DecisionKind {
        match self {
            AccessDecision::Granted { .. } => DecisionKind::Granted,
            AccessDecision::InsufficientClearance { .. } => DecisionKind::InsufficientClearance,
            AccessDecision::RoomClosed { .. } => DecisionKind::RoomClosed,
            AccessDecision::CooldownActive { .. } => DecisionKind::CooldownActive,
        }
    }

    /// Human-readable reason shown next to the verdict
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted { room } => write!(f, "Access granted to {}", room),
            AccessDecision::InsufficientClearance { access_level, required_level } => write!(
                f,
                "Denied: Access level {} below required level {}",
                access_level, required_level
            ),
            AccessDecision::RoomClosed { open_time, close_time } => {
                write!(f, "Denied: Room closed (open {}-{})", open_time, close_time)
            }
            AccessDecision::CooldownActive { remaining_minutes } => {
                write!(f, "Denied: Cooldown active ({} min remaining)", remaining_minutes)
            }
        }
    }
}

/// A processed request with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The originating request
    #[serde(flatten)]
    pub request: AccessRequest,
    /// Whether the door opened
    pub granted: bool,
    /// Human-readable reason
    pub reason: String,
    /// Decision category
    pub decision: DecisionKind,
    /// 1-based position in chronological processing order
    #[serde(alias = "index")]
    pub sequence_index: usize,
}

impl Verdict {
    /// Build a verdict from a request, its decision, and its processing position
    pub fn new(request: AccessRequest, decision: &AccessDecision, sequence_index: usize) -> Self {
        Self {
            request,
            granted: decision.is_granted(),
            reason: decision.reason(),
            decision: decision.kind(),
            sequence_index,
        }
    }

    /// Badge holder
    pub fn employee_id(&self) -> &str {
        self.request.employee_id.as_str()
    }

    /// Room requested
    pub fn room(&self) -> &str {
        self.request.room.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        let granted = AccessDecision::Granted { room: RoomName::new("R&D Lab") };
        assert_eq!(granted.reason(), "Access granted to R&D Lab");

        let clearance = AccessDecision::InsufficientClearance { access_level: 1, required_level: 3 };
        assert_eq!(clearance.reason(), "Denied: Access level 1 below required level 3");

        let closed = AccessDecision::RoomClosed {
            open_time: ClockTime::parse("09:00").unwrap(),
            close_time: ClockTime::parse("10:00").unwrap(),
        };
        assert_eq!(closed.reason(), "Denied: Room closed (open 09:00-10:00)");

        let cooldown = AccessDecision::CooldownActive { remaining_minutes: 2 };
        assert_eq!(cooldown.reason(), "Denied: Cooldown active (2 min remaining)");
    }

    #[test]
    fn test_decision_kinds() {
        assert_eq!(AccessDecision::Granted { room: "Vault".into() }.kind(), DecisionKind::Granted);
        assert_eq!(
            AccessDecision::CooldownActive { remaining_minutes: 1 }.kind(),
            DecisionKind::CooldownActive
        );
        assert!(!AccessDecision::CooldownActive { remaining_minutes: 1 }.is_granted());
    }

    #[test]
    fn test_verdict_json_flattens_request() {
        let request = AccessRequest::parse("EMP004", 3, "09:45", "Vault").unwrap();
        let decision = AccessDecision::Granted { room: "Vault".into() };
        let verdict = Verdict::new(request, &decision, 5);

        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["id"], "EMP004");
        assert_eq!(json["access_level"], 3);
        assert_eq!(json["request_time"], "09:45");
        assert_eq!(json["room"], "Vault");
        assert_eq!(json["granted"], true);
        assert_eq!(json["reason"], "Access granted to Vault");
        assert_eq!(json["decision"], "granted");
        assert_eq!(json["sequence_index"], 5);
    }
}
