//! Report output structures.
//!
//! These are the values returned by the report service. They carry no
//! behaviour and serialize directly to JSON at the API boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EmployeeShortInfo, EmployeeTotalParts, EntityId, ShiftRecord};

/// A deadline cross-reference report.
///
/// The first axis is resolved to one labelled entity; each second-axis entry
/// carries the third-axis leaves that hold the schedule data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineReport {
    /// The id requested for the first axis.
    pub first_id: EntityId,
    /// Label of the first-axis entity (project number, operation name or last name).
    pub first_label: String,
    /// One entry per requested second-axis id.
    pub second_values: Vec<SecondLevelEntry>,
}

/// A second-axis entry of a [`DeadlineReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondLevelEntry {
    /// The entity id.
    pub id: EntityId,
    /// The entity label.
    pub label: String,
    /// Third-axis leaves for this entry.
    pub third_values: Vec<DeadlineLeaf>,
}

/// The innermost entry of a [`DeadlineReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineLeaf {
    /// The entity id.
    pub id: EntityId,
    /// The entity label.
    pub label: String,
    /// Planned end date of the operation linking the three axes.
    pub planned_end_date: NaiveDate,
    /// Actual end date of that operation, if finished.
    pub real_end_date: Option<NaiveDate>,
}

/// Shift participation over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingShiftReport {
    /// Start of the period (inclusive).
    pub start_period: NaiveDate,
    /// End of the period (inclusive).
    pub end_period: NaiveDate,
    /// Distinct employees appearing in the period, in order of first appearance.
    pub employees: Vec<EmployeeShortInfo>,
    /// The raw participation records.
    pub shift_records: Vec<ShiftRecord>,
    /// Per-employee totals, ordered by ascending employee id.
    pub total_parts: Vec<EmployeeTotalParts>,
}

/// Projects registered over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPeriodReport {
    /// Start of the period (inclusive).
    pub start_period: NaiveDate,
    /// End of the period (inclusive).
    pub end_period: NaiveDate,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per project, ordered by registration time then number.
    pub projects: Vec<ProjectReportRow>,
}

/// A flat summary of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReportRow {
    /// The project id.
    pub project_id: EntityId,
    /// The business number.
    pub number: u32,
    /// What is being produced.
    pub name: String,
    /// Who ordered it.
    pub customer: String,
    /// When the project was registered.
    pub registered_at: NaiveDateTime,
    /// Planned end date of the project.
    pub planned_end_date: NaiveDate,
    /// Actual end date, if finished.
    pub real_end_date: Option<NaiveDate>,
    /// Whether the project is finished.
    pub is_ended: bool,
    /// Number of operations in the project.
    pub operations_total: usize,
    /// Number of finished operations.
    pub operations_ended: usize,
    /// Name of the first unfinished operation in priority order.
    pub current_operation: Option<String>,
}
