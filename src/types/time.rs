//! Wall-clock times of day
//!
//! Requests and room policies carry "HH:MM" strings. Everything downstream
//! compares minutes since midnight, so the string is parsed exactly once at the
//! boundary and malformed values are rejected there.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::simulation::error::{SimulationError, SimulationResult};

const MINUTES_PER_HOUR: u32 = 60;

/// A time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Parse an "HH:MM" string
    pub fn parse(value: &str) -> SimulationResult<Self> {
        let trimmed = value.trim();
        if !trimmed.contains(':') {
            return Err(SimulationError::malformed_time(value, "expected HH:MM"));
        }
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map_err(|e| SimulationError::malformed_time(value, e.to_string()))?;
        Ok(Self { minutes: time.hour() * MINUTES_PER_HOUR + time.minute() })
    }

    /// Build a time from hour and minute components
    pub fn from_hm(hour: u32, minute: u32) -> SimulationResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SimulationError::malformed_time(
                format!("{}:{}", hour, minute),
                "hour must be 0-23 and minute 0-59",
            ));
        }
        Ok(Self { minutes: hour * MINUTES_PER_HOUR + minute })
    }

    /// Minutes elapsed since midnight
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Hour component
    pub fn hour(&self) -> u32 {
        self.minutes / MINUTES_PER_HOUR
    }

    /// Minute component
    pub fn minute(&self) -> u32 {
        self.minutes % MINUTES_PER_HOUR
    }
}

/// Convert an "HH:MM" string to minutes since midnight
pub fn time_to_minutes(value: &str) -> SimulationResult<u32> {
    ClockTime::parse(value).map(|t| t.minutes())
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("09:15").unwrap(), 555);
        assert_eq!(time_to_minutes("10:00").unwrap(), 600);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_malformed_times_are_rejected() {
        for bad in ["", "0915", "9h15", "24:00", "12:60", "ab:cd", "10:"] {
            match time_to_minutes(bad) {
                Err(SimulationError::MalformedTime { value, .. }) => assert_eq!(value, bad),
                other => panic!("expected MalformedTime for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ClockTime::from_hm(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(ClockTime::parse("11:00").unwrap().to_string(), "11:00");
    }

    #[test]
    fn test_from_hm_range() {
        assert!(ClockTime::from_hm(23, 59).is_ok());
        assert!(ClockTime::from_hm(24, 0).is_err());
        assert!(ClockTime::from_hm(0, 60).is_err());
    }

    #[test]
    fn test_ordering_follows_minutes() {
        let early = ClockTime::parse("08:50").unwrap();
        let late = ClockTime::parse("10:18").unwrap();
        assert!(early < late);
        assert_eq!(late.hour(), 10);
        assert_eq!(late.minute(), 18);
    }

    #[test]
    fn test_serde_uses_hh_mm_string() {
        let t: ClockTime = serde_json::from_str("\"09:30\"").unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:30\"");
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
