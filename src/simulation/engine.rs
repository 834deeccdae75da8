//! Access decision engine
//!
//! Requests are processed in chronological order (stable on equal times) and
//! each one is checked against its room policy with these rules, first match wins:
//!
//! 1. clearance below the room minimum
//! 2. outside the open window (both ends inclusive)
//! 3. re-entry to the same room before the cooldown elapsed
//! 4. otherwise granted
//!
//! Grants are threaded through the fold as an [`AccessLog`] so later decisions
//! see earlier ones. Every run starts from an empty log.

use tracing::{debug, info, instrument};

use crate::events::{AccessDecision, AccessRequest, Verdict};
use crate::facility::{PolicyTable, RoomPolicy};
use crate::simulation::access_log::AccessLog;
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::statistics::SimulationStats;

/// Verdicts of one run plus the grants recorded along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Verdicts in processing order
    pub verdicts: Vec<Verdict>,
    /// Final state of the access log
    pub access_log: AccessLog,
}

impl SimulationOutcome {
    /// Aggregate statistics over the verdicts
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_verdicts(&self.verdicts)
    }
}

/// Evaluates access requests against a fixed policy table
#[derive(Debug, Clone, Copy)]
pub struct AccessSimulator<'a> {
    policies: &'a PolicyTable,
}

impl<'a> AccessSimulator<'a> {
    /// Create a simulator over the given policies
    pub fn new(policies: &'a PolicyTable) -> Self {
        Self { policies }
    }

    /// Fail on the first request (in input order) whose room has no policy
    pub fn check_rooms(&self, requests: &[AccessRequest]) -> SimulationResult<()> {
        match requests.iter().find(|r| !self.policies.contains(r.room.as_str())) {
            Some(request) => Err(SimulationError::unknown_room(
                request.employee_id.as_str(),
                request.room.as_str(),
            )),
            None => Ok(()),
        }
    }

    /// Process every request and return the ordered verdicts with the final log
    #[instrument(skip_all, fields(requests = requests.len(), rooms = self.policies.len()))]
    pub fn run(&self, requests: &[AccessRequest]) -> SimulationResult<SimulationOutcome> {
        self.check_rooms(requests)?;

        let mut ordered: Vec<&AccessRequest> = requests.iter().collect();
        ordered.sort_by_key(|request| request.request_time);

        let (access_log, verdicts) = ordered.into_iter().enumerate().try_fold(
            (AccessLog::new(), Vec::with_capacity(requests.len())),
            |(log, mut verdicts), (position, request)| {
                let policy = self.policy_for(request)?;
                let (decision, log) = step(log, request, policy);

                debug!(
                    sequence = position + 1,
                    employee = %request.employee_id,
                    room = %request.room,
                    time = %request.request_time,
                    granted = decision.is_granted(),
                    "{}",
                    decision
                );

                verdicts.push(Verdict::new(request.clone(), &decision, position + 1));
                Ok::<_, SimulationError>((log, verdicts))
            },
        )?;

        let outcome = SimulationOutcome { verdicts, access_log };
        let stats = outcome.stats();
        info!(
            total = stats.total,
            granted = stats.granted,
            denied = stats.denied,
            success_rate = stats.success_rate_percent,
            "Access simulation completed"
        );
        Ok(outcome)
    }

    fn policy_for(&self, request: &AccessRequest) -> SimulationResult<&'a RoomPolicy> {
        self.policies.get(request.room.as_str()).ok_or_else(|| {
            SimulationError::unknown_room(request.employee_id.as_str(), request.room.as_str())
        })
    }
}

/// Run a simulation with a fresh simulator over `policies`
pub fn simulate_access(
    requests: &[AccessRequest],
    policies: &PolicyTable,
) -> SimulationResult<SimulationOutcome> {
    AccessSimulator::new(policies).run(requests)
}

/// Decide one request given the grants so far
pub fn evaluate(request: &AccessRequest, policy: &RoomPolicy, log: &AccessLog) -> AccessDecision {
    if !policy.admits_level(request.access_level) {
        return AccessDecision::InsufficientClearance {
            access_level: request.access_level,
            required_level: policy.min_access_level,
        };
    }

    if !policy.is_open_at(request.request_time) {
        return AccessDecision::RoomClosed {
            open_time: policy.open_time,
            close_time: policy.close_time,
        };
    }

    if let Some(last) = log.last_grant(request.employee_id.as_str(), request.room.as_str()) {
        let elapsed = request.minutes().saturating_sub(last.minutes());
        if elapsed < policy.cooldown_minutes {
            return AccessDecision::CooldownActive {
                remaining_minutes: policy.cooldown_minutes - elapsed,
            };
        }
    }

    AccessDecision::Granted { room: request.room.clone() }
}

/// Fold step: decide the request and record it in the log if granted
fn step(mut log: AccessLog, request: &AccessRequest, policy: &RoomPolicy) -> (AccessDecision, AccessLog) {
    let decision = evaluate(request, policy, &log);
    if decision.is_granted() {
        log.record_grant(&request.employee_id, &request.room, request.request_time);
    }
    (decision, log)
}
