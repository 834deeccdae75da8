//! Room policy registry
//!
//! This module contains the PolicyTable, the keyed collection of room policies
//! a simulation run is evaluated against.

use crate::facility::room::RoomPolicy;
use crate::types::RoomName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Mapping from room name to its access policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    policies: BTreeMap<RoomName, RoomPolicy>,
}

impl PolicyTable {
    /// Create a new empty policy table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the policy for a room
    pub fn insert(&mut self, room: impl Into<RoomName>, policy: RoomPolicy) -> Option<RoomPolicy> {
        self.policies.insert(room.into(), policy)
    }

    /// Builder-style insert
    pub fn with_room(mut self, room: impl Into<RoomName>, policy: RoomPolicy) -> Self {
        self.insert(room, policy);
        self
    }

    /// Look up the policy for a room
    pub fn get(&self, room: &str) -> Option<&RoomPolicy> {
        self.policies.get(room)
    }

    /// Whether a policy exists for the room
    pub fn contains(&self, room: &str) -> bool {
        self.policies.contains_key(room)
    }

    /// Room names in table order
    pub fn room_names(&self) -> impl Iterator<Item = &RoomName> {
        self.policies.keys()
    }

    /// Iterate over (room, policy) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&RoomName, &RoomPolicy)> {
        self.policies.iter()
    }

    /// Number of rooms with a policy
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Highest minimum clearance across all rooms
    pub fn max_required_level(&self) -> u32 {
        self.policies.values().map(|p| p.min_access_level).max().unwrap_or(0)
    }

    /// Log a warning for every room that can never be open. Returns the offending rooms.
    pub fn warn_on_empty_windows(&self) -> Vec<&RoomName> {
        let rooms: Vec<&RoomName> = self
            .policies
            .iter()
            .filter(|(_, policy)| policy.has_empty_window())
            .map(|(room, _)| room)
            .collect();

        for room in &rooms {
            if let Some(policy) = self.policies.get(room.as_str()) {
                warn!(
                    room = %room,
                    open_time = %policy.open_time,
                    close_time = %policy.close_time,
                    "Room opens after it closes; every request will be denied as closed"
                );
            }
        }
        rooms
    }
}

impl FromIterator<(RoomName, RoomPolicy)> for PolicyTable {
    fn from_iter<I: IntoIterator<Item = (RoomName, RoomPolicy)>>(iter: I) -> Self {
        Self { policies: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClockTime;

    fn policy(level: u32, open: &str, close: &str, cooldown: u32) -> RoomPolicy {
        RoomPolicy::new(level, ClockTime::parse(open).unwrap(), ClockTime::parse(close).unwrap(), cooldown)
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut table = PolicyTable::new();
        assert!(table.is_empty());

        table.insert("Vault", policy(3, "09:00", "10:00", 30));
        assert_eq!(table.len(), 1);
        assert!(table.contains("Vault"));
        assert!(!table.contains("vault"));
        assert_eq!(table.get("Vault").map(|p| p.min_access_level), Some(3));

        let replaced = table.insert("Vault", policy(4, "09:00", "10:00", 30));
        assert_eq!(replaced.map(|p| p.min_access_level), Some(3));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rooms_are_ordered_by_name() {
        let table = PolicyTable::new()
            .with_room("Vault", policy(3, "09:00", "10:00", 30))
            .with_room("R&D Lab", policy(1, "08:00", "12:00", 10))
            .with_room("ServerRoom", policy(2, "09:00", "11:00", 15));

        let names: Vec<&str> = table.room_names().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["R&D Lab", "ServerRoom", "Vault"]);
        assert_eq!(table.max_required_level(), 3);
    }

    #[test]
    fn test_warn_on_empty_windows() {
        let table = PolicyTable::new()
            .with_room("Night Desk", policy(1, "22:00", "06:00", 0))
            .with_room("Vault", policy(3, "09:00", "10:00", 30));

        let flagged = table.warn_on_empty_windows();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].as_str(), "Night Desk");
    }

    #[test]
    fn test_json_is_a_plain_object() {
        let json = r#"{"Vault": {"min_access_level": 3, "open_time": "09:00", "close_time": "10:00", "cooldown_minutes": 30}}"#;
        let table: PolicyTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get("Vault").map(|p| p.cooldown_minutes), Some(30));
    }
}
