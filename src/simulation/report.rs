//! Simulation reports
//!
//! This module packages a run's policies, verdicts, and statistics for output,
//! either as aligned text tables or as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::events::Verdict;
use crate::facility::PolicyTable;
use crate::simulation::engine::SimulationOutcome;
use crate::simulation::error::SimulationResult;
use crate::simulation::statistics::SimulationStats;
use crate::types::{OutputFormat, RunId};

/// Everything produced by one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Identifier of this run
    pub run_id: RunId,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Policies the run was evaluated against
    pub rooms: PolicyTable,
    /// Verdicts in processing order
    pub verdicts: Vec<Verdict>,
    /// Aggregate statistics
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Build a report from a finished run
    pub fn new(policies: &PolicyTable, outcome: SimulationOutcome) -> Self {
        let stats = outcome.stats();
        Self {
            run_id: RunId::new(),
            generated_at: Utc::now(),
            rooms: policies.clone(),
            verdicts: outcome.verdicts,
            stats,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> SimulationResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render the policy table, the verdict table, and the statistics as text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&render_policy_table(&self.rooms));
        out.push('\n');
        out.push_str(&render_verdict_table(&self.verdicts));
        out.push('\n');
        let _ = writeln!(out, "Statistics");
        let _ = writeln!(out, "==========");
        let _ = writeln!(out, "{}", self.stats.summary());
        out.push_str(&self.stats.detailed_breakdown());
        out
    }

    /// Write the rendered report to a file, or to stdout when no path is given
    pub fn write(&self, format: OutputFormat, path: Option<&Path>) -> SimulationResult<()> {
        let rendered = self.render(format)?;
        match path {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                writer.write_all(rendered.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
                info!(path = %path.display(), format = %format, "Report written");
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", rendered)?;
            }
        }
        Ok(())
    }
}

/// Render room policies as an aligned table
pub fn render_policy_table(policies: &PolicyTable) -> String {
    let width = policies
        .room_names()
        .map(|r| r.as_str().chars().count())
        .chain(std::iter::once("Room".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = writeln!(out, "Room Policies");
    let _ = writeln!(out, "=============");
    let _ = writeln!(out, "{:<width$}  {:>9}  {:<11}  {:>8}", "Room", "Min Level", "Open Hours", "Cooldown");
    for (room, policy) in policies.iter() {
        let _ = writeln!(
            out,
            "{:<width$}  {:>9}  {}-{}  {:>4} min",
            room.as_str(),
            policy.min_access_level,
            policy.open_time,
            policy.close_time,
            policy.cooldown_minutes
        );
    }
    out
}

/// Render verdicts as an aligned table
pub fn render_verdict_table(verdicts: &[Verdict]) -> String {
    let room_width = verdicts
        .iter()
        .map(|v| v.room().chars().count())
        .chain(std::iter::once("Room".len()))
        .max()
        .unwrap_or(4);
    let id_width = verdicts
        .iter()
        .map(|v| v.employee_id().chars().count())
        .chain(std::iter::once("Employee".len()))
        .max()
        .unwrap_or(8);

    let mut out = String::new();
    let _ = writeln!(out, "Access Results");
    let _ = writeln!(out, "==============");
    let _ = writeln!(
        out,
        "{:>3}  {:<id_width$}  {:>5}  {:<5}  {:<room_width$}  {:<7}  Reason",
        "#", "Employee", "Level", "Time", "Room", "Result"
    );
    for verdict in verdicts {
        let _ = writeln!(
            out,
            "{:>3}  {:<id_width$}  {:>5}  {:<5}  {:<room_width$}  {:<7}  {}",
            verdict.sequence_index,
            verdict.employee_id(),
            verdict.request.access_level,
            verdict.request.request_time.to_string(),
            verdict.room(),
            if verdict.granted { "GRANTED" } else { "DENIED" },
            verdict.reason
        );
    }
    out
}
