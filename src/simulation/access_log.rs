//! Per-run record of granted entries
//!
//! The log maps each employee to the rooms they were let into and the minute of
//! their most recent granted entry. Only grants are ever recorded.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{ClockTime, EmployeeId, RoomName};

/// Last granted entry time per (employee, room)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessLog {
    entries: BTreeMap<EmployeeId, BTreeMap<RoomName, ClockTime>>,
}

impl AccessLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent granted entry for the employee into the room
    pub fn last_grant(&self, employee_id: &str, room: &str) -> Option<ClockTime> {
        self.entries.get(employee_id).and_then(|rooms| rooms.get(room)).copied()
    }

    /// Record a granted entry, replacing any earlier one for the same room
    pub fn record_grant(&mut self, employee_id: &EmployeeId, room: &RoomName, time: ClockTime) {
        self.entries
            .entry(employee_id.clone())
            .or_default()
            .insert(room.clone(), time);
    }

    /// Rooms the employee has been granted into, with the latest entry time
    pub fn rooms_for(&self, employee_id: &str) -> Option<&BTreeMap<RoomName, ClockTime>> {
        self.entries.get(employee_id)
    }

    /// Number of employees with at least one grant
    pub fn employee_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct (employee, room) pairs with a grant
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether nothing has been granted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn test_empty_log() {
        let log = AccessLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last_grant("EMP001", "Vault"), None);
    }

    #[test]
    fn test_record_and_overwrite() {
        let mut log = AccessLog::new();
        let emp = EmployeeId::new("EMP001");
        let room = RoomName::new("ServerRoom");

        log.record_grant(&emp, &room, t("09:15"));
        assert_eq!(log.last_grant("EMP001", "ServerRoom"), Some(t("09:15")));

        log.record_grant(&emp, &room, t("09:45"));
        assert_eq!(log.last_grant("EMP001", "ServerRoom"), Some(t("09:45")));
        assert_eq!(log.entry_count(), 1);
    }

    #[test]
    fn test_rooms_are_tracked_separately() {
        let mut log = AccessLog::new();
        let emp = EmployeeId::new("EMP001");
        log.record_grant(&emp, &RoomName::new("ServerRoom"), t("09:15"));
        log.record_grant(&emp, &RoomName::new("Vault"), t("09:20"));

        assert_eq!(log.employee_count(), 1);
        assert_eq!(log.entry_count(), 2);
        assert_eq!(log.rooms_for("EMP001").map(BTreeMap::len), Some(2));
        assert_eq!(log.last_grant("EMP002", "Vault"), None);
    }

    #[test]
    fn test_midnight_grant_is_recorded() {
        let mut log = AccessLog::new();
        log.record_grant(&EmployeeId::new("EMP009"), &RoomName::new("Lobby"), t("00:00"));
        assert_eq!(log.last_grant("EMP009", "Lobby"), Some(t("00:00")));
    }
}
