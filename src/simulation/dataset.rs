//! Simulation input datasets
//!
//! A dataset bundles the badge requests with the room policies they are judged
//! against. The built-in reference dataset is the ten-swipe, three-room scenario
//! the simulator has always shipped with; other datasets load from JSON:
//!
//! ```json
//! {
//!   "requests": [{ "id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom" }],
//!   "rooms": { "ServerRoom": { "min_access_level": 2, "open_time": "09:00", "close_time": "11:00", "cooldown_minutes": 15 } }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::events::AccessRequest;
use crate::facility::{PolicyTable, RoomPolicy};
use crate::simulation::engine::{AccessSimulator, SimulationOutcome};
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::types::ClockTime;

/// Requests plus the policies they are evaluated against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Badge swipes in input order
    pub requests: Vec<AccessRequest>,
    /// Room policies keyed by room name
    #[serde(rename = "rooms", alias = "policies")]
    pub policies: PolicyTable,
}

impl Dataset {
    /// Create a dataset from parts
    pub fn new(requests: Vec<AccessRequest>, policies: PolicyTable) -> Self {
        Self { requests, policies }
    }

    /// The built-in reference scenario
    pub fn reference() -> SimulationResult<Self> {
        const REQUESTS: [(&str, u32, &str, &str); 10] = [
            ("EMP001", 2, "09:15", "ServerRoom"),
            ("EMP002", 1, "09:30", "Vault"),
            ("EMP003", 3, "10:05", "ServerRoom"),
            ("EMP004", 3, "09:45", "Vault"),
            ("EMP005", 2, "08:50", "R&D Lab"),
            ("EMP006", 1, "10:10", "R&D Lab"),
            ("EMP007", 2, "10:18", "ServerRoom"),
            ("EMP008", 3, "09:55", "Vault"),
            ("EMP001", 2, "09:28", "ServerRoom"),
            ("EMP006", 1, "10:15", "R&D Lab"),
        ];
        const ROOMS: [(&str, u32, &str, &str, u32); 3] = [
            ("ServerRoom", 2, "09:00", "11:00", 15),
            ("Vault", 3, "09:00", "10:00", 30),
            ("R&D Lab", 1, "08:00", "12:00", 10),
        ];

        let requests = REQUESTS
            .iter()
            .map(|&(id, level, time, room)| AccessRequest::parse(id, level, time, room))
            .collect::<SimulationResult<Vec<_>>>()?;

        let mut policies = PolicyTable::new();
        for &(room, level, open, close, cooldown) in ROOMS.iter() {
            policies.insert(
                room,
                RoomPolicy::new(level, ClockTime::parse(open)?, ClockTime::parse(close)?, cooldown),
            );
        }

        Ok(Self { requests, policies })
    }

    /// Load a dataset from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SimulationError::dataset_error(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let dataset = Self::from_json(&content)?;
                info!(
                    path = %path.display(),
                    requests = dataset.requests.len(),
                    rooms = dataset.policies.len(),
                    "Loaded dataset"
                );
                Ok(dataset)
            }
            Some(ext) => Err(SimulationError::dataset_error(format!(
                "Unsupported dataset file format: {} (supported: .json)",
                ext
            ))),
            None => Err(SimulationError::dataset_error(
                "Unsupported dataset file format: no extension (supported: .json)",
            )),
        }
    }

    /// Parse a dataset from a JSON string
    pub fn from_json(content: &str) -> SimulationResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the dataset as pretty JSON
    pub fn to_json(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the engine preconditions and warn about suspicious policies
    pub fn validate(&self) -> SimulationResult<()> {
        if self.policies.is_empty() && !self.requests.is_empty() {
            return Err(SimulationError::dataset_error("Dataset has requests but no room policies"));
        }
        AccessSimulator::new(&self.policies).check_rooms(&self.requests)?;
        self.policies.warn_on_empty_windows();
        debug!(requests = self.requests.len(), rooms = self.policies.len(), "Dataset validated");
        Ok(())
    }

    /// Run the simulation over this dataset
    pub fn simulate(&self) -> SimulationResult<SimulationOutcome> {
        AccessSimulator::new(&self.policies).run(&self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_reference_dataset_shape() {
        let dataset = Dataset::reference().unwrap();
        assert_eq!(dataset.requests.len(), 10);
        assert_eq!(dataset.policies.len(), 3);
        assert!(dataset.policies.contains("R&D Lab"));
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_keeps_requests_in_order() {
        let dataset = Dataset::reference().unwrap();
        let json = dataset.to_json().unwrap();
        let parsed = Dataset::from_json(&json).unwrap();
        assert_eq!(parsed, dataset);
        assert_eq!(parsed.requests[4].employee_id.as_str(), "EMP005");
    }

    #[test]
    fn test_from_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        let json = r#"{
            "requests": [
                {"id": "EMP100", "access_level": 2, "request_time": "12:00", "room": "Lab"}
            ],
            "rooms": {
                "Lab": {"minAccessLevel": 1, "openTime": "08:00", "closeTime": "12:00", "cooldownMinutes": 5}
            }
        }"#;
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();

        let dataset = Dataset::from_file(file.path()).unwrap();
        assert_eq!(dataset.requests.len(), 1);
        let outcome = dataset.simulate().unwrap();
        assert!(outcome.verdicts[0].granted);
    }

    #[test]
    fn test_from_file_rejects_other_extensions() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        match Dataset::from_file(file.path()) {
            Err(SimulationError::Dataset(msg)) => assert!(msg.contains("yaml")),
            other => panic!("expected Dataset error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dataset::from_file("/nonexistent/dataset.json").unwrap_err();
        assert_eq!(err.category(), "Dataset");
    }

    #[test]
    fn test_malformed_time_in_json_is_rejected() {
        let json = r#"{"requests": [{"id": "E", "access_level": 1, "request_time": "9:75", "room": "Lab"}], "rooms": {}}"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert_eq!(err.category(), "Serialization");
        assert!(err.to_string().contains("9:75"));
    }

    #[test]
    fn test_validate_unknown_room() {
        let mut dataset = Dataset::reference().unwrap();
        dataset.requests.push(AccessRequest::parse("EMP009", 3, "09:00", "Attic").unwrap());
        assert!(matches!(dataset.validate(), Err(SimulationError::UnknownRoom { .. })));
    }

    #[test]
    fn test_validate_requests_without_policies() {
        let dataset = Dataset::new(
            vec![AccessRequest::parse("EMP001", 1, "09:00", "Lab").unwrap()],
            PolicyTable::new(),
        );
        assert!(matches!(dataset.validate(), Err(SimulationError::Dataset(_))));
    }
}
