//! The report service shared by every entry point.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::error::ReportResult;
use crate::models::{
    DeadlineReport, DeadlineRequest, EntityId, ProjectPeriodReport, WorkingShiftReport,
};
use crate::ports::ReadPorts;

use super::deadline::resolve_deadlines;
use super::project_period::build_project_period_report;
use super::working_shift::build_working_shift_report;

/// Builds reports over a set of read ports.
///
/// The service holds no mutable state; one instance can serve concurrent
/// requests.
#[derive(Clone)]
pub struct ReportService {
    ports: ReadPorts,
}

impl ReportService {
    /// Creates a service over the given ports.
    pub fn new(ports: ReadPorts) -> Self {
        Self { ports }
    }

    /// Builds the deadline cross-reference report.
    pub fn report_deadlines(&self, request: &DeadlineRequest) -> ReportResult<DeadlineReport> {
        let start_time = Instant::now();
        let result = resolve_deadlines(request, self.ports.operations.as_ref());
        match &result {
            Ok(report) => info!(
                first = %request.first_parameter,
                second = %request.second_parameter,
                third = %request.third_parameter,
                entries = report.second_values.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Deadline report built"
            ),
            Err(err) => warn!(
                first = %request.first_parameter,
                second = %request.second_parameter,
                third = %request.third_parameter,
                error = %err,
                "Deadline report failed"
            ),
        }
        result
    }

    /// Builds the working shift report for `start..=end`.
    pub fn report_working_shifts(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_ids: Option<&BTreeSet<EntityId>>,
    ) -> ReportResult<WorkingShiftReport> {
        let start_time = Instant::now();
        let result = build_working_shift_report(
            start,
            end,
            employee_ids,
            self.ports.shifts.as_ref(),
            self.ports.employees.as_ref(),
        );
        match &result {
            Ok(report) => info!(
                start = %start,
                end = %end,
                records = report.shift_records.len(),
                employees = report.employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Working shift report built"
            ),
            Err(err) => warn!(start = %start, end = %end, error = %err, "Working shift report failed"),
        }
        result
    }

    /// Builds the project report for `start..=end`, stamped with the current time.
    pub fn report_projects_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReportResult<ProjectPeriodReport> {
        self.report_projects_for_period_at(start, end, Utc::now())
    }

    /// Builds the project report for `start..=end`, stamped with `generated_at`.
    pub fn report_projects_for_period_at(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> ReportResult<ProjectPeriodReport> {
        let start_time = Instant::now();
        let result =
            build_project_period_report(start, end, generated_at, self.ports.projects.as_ref());
        match &result {
            Ok(report) => info!(
                start = %start,
                end = %end,
                projects = report.projects.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Project period report built"
            ),
            Err(err) => warn!(start = %start, end = %end, error = %err, "Project period report failed"),
        }
        result
    }
}
