//! Room access policies
//!
//! A policy fixes the minimum clearance, the open window, and the re-entry
//! cooldown for one room.

use serde::{Deserialize, Serialize};

use crate::types::ClockTime;

/// Access policy for a single room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPolicy {
    /// Lowest clearance level allowed in
    #[serde(alias = "minAccessLevel")]
    pub min_access_level: u32,
    /// First minute the room accepts badges
    #[serde(alias = "openTime")]
    pub open_time: ClockTime,
    /// Last minute the room accepts badges (inclusive)
    #[serde(alias = "closeTime")]
    pub close_time: ClockTime,
    /// Minutes an employee must wait after a granted entry before re-entering
    #[serde(alias = "cooldownMinutes")]
    pub cooldown_minutes: u32,
}

impl RoomPolicy {
    /// Create a new room policy
    pub fn new(
        min_access_level: u32,
        open_time: ClockTime,
        close_time: ClockTime,
        cooldown_minutes: u32,
    ) -> Self {
        Self { min_access_level, open_time, close_time, cooldown_minutes }
    }

    /// Whether the clearance level meets the room minimum
    pub fn admits_level(&self, access_level: u32) -> bool {
        access_level >= self.min_access_level
    }

    /// Whether the room accepts badges at the given time. Both ends are inclusive.
    pub fn is_open_at(&self, time: ClockTime) -> bool {
        time >= self.open_time && time <= self.close_time
    }

    /// Whether the open window is empty (open after close)
    pub fn has_empty_window(&self) -> bool {
        self.open_time > self.close_time
    }
}
