//! Core data models for the production report engine.
//!
//! This module contains the read-only domain entities consumed by the reports
//! and the report structures they produce.

mod axis;
mod deadline_request;
mod employee;
mod operation;
mod project;
mod report;
mod working_shift;

/// Identifier shared by every entity.
pub type EntityId = i64;

pub use axis::Axis;
pub use deadline_request::DeadlineRequest;
pub use employee::{Employee, EmployeeShortInfo};
pub use operation::{EmployeeRef, Operation, ProjectRef};
pub use project::Project;
pub use report::{
    DeadlineLeaf, DeadlineReport, ProjectPeriodReport, ProjectReportRow, SecondLevelEntry,
    WorkingShiftReport,
};
pub use working_shift::{EmployeeTotalParts, ShiftRecord};
