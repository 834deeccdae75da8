//! Error types and handling
//!
//! This module contains the error taxonomy for the access simulation. The engine
//! itself never fails on well-formed input; every variant here describes a
//! violated precondition or a problem loading the data the engine is fed.

use thiserror::Error;

/// Errors that can occur while preparing or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A time string was not a valid "HH:MM" value
    #[error("Malformed time '{value}': {reason}")]
    MalformedTime {
        /// The offending input
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A request referenced a room with no policy entry
    #[error("Unknown room '{room}' requested by {employee_id}")]
    UnknownRoom {
        /// Employee that issued the request
        employee_id: String,
        /// Room name that has no policy
        room: String,
    },

    /// The dataset file could not be used
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create a malformed time error
    pub fn malformed_time(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTime { value: value.into(), reason: reason.into() }
    }

    /// Create an unknown room error
    pub fn unknown_room(employee_id: impl Into<String>, room: impl Into<String>) -> Self {
        Self::UnknownRoom { employee_id: employee_id.into(), room: room.into() }
    }

    /// Create a dataset error
    pub fn dataset_error(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Whether the error is a violated engine precondition rather than an I/O problem
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, SimulationError::MalformedTime { .. } | SimulationError::UnknownRoom { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::MalformedTime { .. } => "Time Format",
            SimulationError::UnknownRoom { .. } => "Room Policy",
            SimulationError::Dataset(_) => "Dataset",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimulationError::unknown_room("EMP001", "Attic");
        assert_eq!(err.to_string(), "Unknown room 'Attic' requested by EMP001");

        let err = SimulationError::malformed_time("9h15", "expected HH:MM");
        assert_eq!(err.to_string(), "Malformed time '9h15': expected HH:MM");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SimulationError::unknown_room("E", "R").category(), "Room Policy");
        assert_eq!(SimulationError::malformed_time("x", "y").category(), "Time Format");
        assert_eq!(SimulationError::dataset_error("bad").category(), "Dataset");

        let io = SimulationError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), "IO");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(SimulationError::unknown_room("E", "R").is_precondition_violation());
        assert!(SimulationError::malformed_time("x", "y").is_precondition_violation());
        assert!(!SimulationError::dataset_error("bad").is_precondition_violation());
    }
}
