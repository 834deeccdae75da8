//! Synthetic request generation
//!
//! This module produces batches of plausible badge swipes over an existing
//! policy table, for exercising the engine on data larger than the reference
//! scenario. Seeded generators are fully reproducible.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

use crate::events::AccessRequest;
use crate::facility::PolicyTable;
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::types::{ClockTime, EmployeeId};

/// Earliest generated swipe (07:00)
const EARLIEST_MINUTE: u32 = 7 * 60;
/// Latest generated swipe (13:00)
const LATEST_MINUTE: u32 = 13 * 60;

/// Generator for synthetic access requests
pub struct RequestGenerator {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for RequestGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestGenerator").finish()
    }
}

impl Default for RequestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGenerator {
    /// Create a generator seeded from the thread RNG
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Generate `count` requests against rooms in `policies`.
    ///
    /// Employees are drawn from a pool about half the size of the batch so that
    /// repeat visits (and therefore cooldowns) actually occur. Each employee keeps
    /// one clearance level across all of their swipes.
    pub fn generate(&mut self, count: usize, policies: &PolicyTable) -> SimulationResult<Vec<AccessRequest>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if policies.is_empty() {
            return Err(SimulationError::dataset_error(
                "Cannot generate requests without any room policies",
            ));
        }

        // One level above the strictest room, so some employees clear every door
        let max_level = policies.max_required_level().saturating_add(1);
        let pool_size = (count / 2).max(1);
        let employees: Vec<(EmployeeId, u32)> = (1..=pool_size)
            .map(|n| (EmployeeId::new(format!("EMP{:03}", n)), self.rng.gen_range(1..=max_level)))
            .collect();

        let mut requests = Vec::with_capacity(count);
        for _ in 0..count {
            let (employee_id, access_level) = employees
                .choose(&mut *self.rng)
                .cloned()
                .ok_or_else(|| SimulationError::dataset_error("Employee pool is empty"))?;
            let room = policies
                .room_names()
                .choose(&mut *self.rng)
                .cloned()
                .ok_or_else(|| SimulationError::dataset_error("Policy table is empty"))?;
            let minute = self.rng.gen_range(EARLIEST_MINUTE..=LATEST_MINUTE);
            let request_time = ClockTime::from_hm(minute / 60, minute % 60)?;

            requests.push(AccessRequest::new(employee_id, access_level, request_time, room));
        }

        debug!(count, employees = pool_size, rooms = policies.len(), "Generated synthetic requests");
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::dataset::Dataset;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let policies = Dataset::reference().unwrap().policies;
        let first = RequestGenerator::with_seed(42).generate(50, &policies).unwrap();
        let second = RequestGenerator::with_seed(42).generate(50, &policies).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn test_generated_requests_reference_known_rooms() {
        let policies = Dataset::reference().unwrap().policies;
        let requests = RequestGenerator::with_seed(7).generate(100, &policies).unwrap();

        for request in &requests {
            assert!(policies.contains(request.room.as_str()));
            assert!(request.minutes() >= EARLIEST_MINUTE && request.minutes() <= LATEST_MINUTE);
            assert!(request.access_level >= 1 && request.access_level <= 4);
        }
    }

    #[test]
    fn test_employee_level_is_stable() {
        let policies = Dataset::reference().unwrap().policies;
        let requests = RequestGenerator::with_seed(3).generate(80, &policies).unwrap();

        let mut levels = std::collections::HashMap::new();
        for request in &requests {
            let level = levels.entry(request.employee_id.clone()).or_insert(request.access_level);
            assert_eq!(*level, request.access_level);
        }
    }

    #[test]
    fn test_highest_possible_clearance_requirement() {
        let policies = PolicyTable::new().with_room(
            "Core",
            crate::facility::RoomPolicy::new(
                u32::MAX,
                ClockTime::parse("00:00").unwrap(),
                ClockTime::parse("23:59").unwrap(),
                0,
            ),
        );
        let requests = RequestGenerator::with_seed(1).generate(3, &policies).unwrap();

        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.access_level >= 1));
    }

    #[test]
    fn test_zero_count_and_empty_table() {
        let policies = Dataset::reference().unwrap().policies;
        assert!(RequestGenerator::new().generate(0, &policies).unwrap().is_empty());
        assert!(RequestGenerator::new().generate(5, &PolicyTable::new()).is_err());
    }
}
