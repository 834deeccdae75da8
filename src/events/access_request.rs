//! Badge swipe requests
//!
//! This module contains the AccessRequest input record.

use serde::{Deserialize, Serialize};

use crate::simulation::error::SimulationResult;
use crate::types::{ClockTime, EmployeeId, RoomName};

/// A single badge swipe at a room door
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Badge holder
    #[serde(rename = "id", alias = "employee_id")]
    pub employee_id: EmployeeId,
    /// Clearance level carried by the badge
    pub access_level: u32,
    /// Time of the swipe
    pub request_time: ClockTime,
    /// Room being entered
    pub room: RoomName,
}

impl AccessRequest {
    /// Create a new access request
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        access_level: u32,
        request_time: ClockTime,
        room: impl Into<RoomName>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            access_level,
            request_time,
            room: room.into(),
        }
    }

    /// Create a request from an "HH:MM" time string
    pub fn parse(
        employee_id: &str,
        access_level: u32,
        request_time: &str,
        room: &str,
    ) -> SimulationResult<Self> {
        Ok(Self::new(employee_id, access_level, ClockTime::parse(request_time)?, room))
    }

    /// Request time as minutes since midnight
    pub fn minutes(&self) -> u32 {
        self.request_time.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::error::SimulationError;

    #[test]
    fn test_parse_request() {
        let request = AccessRequest::parse("EMP001", 2, "09:15", "ServerRoom").unwrap();
        assert_eq!(request.employee_id.as_str(), "EMP001");
        assert_eq!(request.access_level, 2);
        assert_eq!(request.minutes(), 555);
        assert_eq!(request.room.as_str(), "ServerRoom");
    }

    #[test]
    fn test_parse_rejects_bad_time() {
        let err = AccessRequest::parse("EMP001", 2, "9.15", "ServerRoom").unwrap_err();
        assert!(matches!(err, SimulationError::MalformedTime { .. }));
    }

    #[test]
    fn test_json_uses_original_field_names() {
        let json = r#"{"id": "EMP002", "access_level": 1, "request_time": "09:30", "room": "Vault"}"#;
        let request: AccessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_str(), "EMP002");

        let out = serde_json::to_value(&request).unwrap();
        assert_eq!(out["id"], "EMP002");
        assert_eq!(out["request_time"], "09:30");
    }

    #[test]
    fn test_json_accepts_employee_id_alias() {
        let json = r#"{"employee_id": "EMP003", "access_level": 3, "request_time": "10:05", "room": "ServerRoom"}"#;
        let request: AccessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_str(), "EMP003");
    }
}
