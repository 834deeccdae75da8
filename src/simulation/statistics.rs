//! Statistics collection and reporting
//!
//! This module aggregates a run's verdicts into the summary shown under the
//! verdict table, with per-reason and per-room breakdowns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::events::Verdict;
use crate::types::{DecisionKind, RoomName};

/// Granted/denied counts for a single room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    /// Requests granted for the room
    pub granted: usize,
    /// Requests denied for the room
    pub denied: usize,
}

impl RoomStats {
    /// Total requests for the room
    pub fn total(&self) -> usize {
        self.granted + self.denied
    }
}

/// Summary statistics derived from a run's verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of requests processed
    pub total: usize,
    /// Number of requests granted
    pub granted: usize,
    /// Number of requests denied
    pub denied: usize,
    /// Granted share of all requests, rounded to a whole percent (0 when there were no requests)
    pub success_rate_percent: u32,
    /// Denied requests by the rule that denied them
    pub denials_by_kind: BTreeMap<DecisionKind, usize>,
    /// Counts per room
    pub by_room: BTreeMap<RoomName, RoomStats>,
}

impl SimulationStats {
    /// Aggregate a verdict sequence
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let total = verdicts.len();
        let granted = verdicts.iter().filter(|v| v.granted).count();
        let denied = total - granted;

        let mut denials_by_kind = BTreeMap::new();
        let mut by_room: BTreeMap<RoomName, RoomStats> = BTreeMap::new();

        for verdict in verdicts {
            let room = by_room.entry(verdict.request.room.clone()).or_default();
            if verdict.granted {
                room.granted += 1;
            } else {
                room.denied += 1;
                *denials_by_kind.entry(verdict.decision).or_insert(0) += 1;
            }
        }

        Self {
            total,
            granted,
            denied,
            success_rate_percent: success_rate_percent(granted, total),
            denials_by_kind,
            by_room,
        }
    }

    /// Denied requests for one denial category
    pub fn denials_for(&self, kind: DecisionKind) -> usize {
        self.denials_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Counts for one room
    pub fn room(&self, room: &str) -> Option<&RoomStats> {
        self.by_room.get(room)
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Granted: {} | Denied: {} | Success Rate: {}%",
            self.total, self.granted, self.denied, self.success_rate_percent
        )
    }

    /// Multi-line breakdown by denial reason and by room
    pub fn detailed_breakdown(&self) -> String {
        let mut breakdown = String::new();
        breakdown.push_str("Denials by reason:\n");
        for kind in DecisionKind::DENIALS {
            breakdown.push_str(&format!("  - {}: {}\n", kind, self.denials_for(kind)));
        }

        breakdown.push_str("Requests by room:\n");
        for (room, stats) in &self.by_room {
            breakdown.push_str(&format!(
                "  - {}: {} granted, {} denied\n",
                room, stats.granted, stats.denied
            ));
        }
        breakdown
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// round(granted / total * 100), with halves rounding up and 0 for an empty run
pub fn success_rate_percent(granted: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((granted as f64 / total as f64) * 100.0).round() as u32
}
