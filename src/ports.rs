//! Read ports consumed by the report engine.
//!
//! The engine never owns persistence. It reads through these traits, which a
//! database, cache or the bundled [`InMemoryStore`](crate::store::InMemoryStore)
//! implement. Implementations must be safe to share across request handlers.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::ReportResult;
use crate::models::{EmployeeShortInfo, EntityId, Operation, Project, ShiftRecord};

/// Looks up operations.
pub trait OperationReader: Send + Sync {
    /// Returns the operations whose ids are in `ids`. Unknown ids are ignored.
    fn operations_by_ids(&self, ids: &BTreeSet<EntityId>) -> ReportResult<Vec<Operation>>;
}

/// Looks up projects.
pub trait ProjectReader: Send + Sync {
    /// Returns the projects registered within `start..=end`.
    fn projects_in_range(&self, start: NaiveDate, end: NaiveDate) -> ReportResult<Vec<Project>>;
}

/// Looks up employees.
pub trait EmployeeReader: Send + Sync {
    /// Returns the short identity of each known employee in `ids`.
    fn employee_short_info(&self, ids: &[EntityId]) -> ReportResult<Vec<EmployeeShortInfo>>;
}

/// Looks up working shift participation.
pub trait WorkingShiftReader: Send + Sync {
    /// Returns the records of shifts dated within `start..=end`.
    ///
    /// When `employee_ids` is `Some`, only records of those employees are returned.
    fn shift_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_ids: Option<&BTreeSet<EntityId>>,
    ) -> ReportResult<Vec<ShiftRecord>>;
}

/// The set of read ports a [`ReportService`](crate::reports::ReportService) depends on.
#[derive(Clone)]
pub struct ReadPorts {
    /// Operation lookup.
    pub operations: Arc<dyn OperationReader>,
    /// Project lookup.
    pub projects: Arc<dyn ProjectReader>,
    /// Employee lookup.
    pub employees: Arc<dyn EmployeeReader>,
    /// Working shift lookup.
    pub shifts: Arc<dyn WorkingShiftReader>,
}

impl ReadPorts {
    /// Creates a port set from individual readers.
    pub fn new(
        operations: Arc<dyn OperationReader>,
        projects: Arc<dyn ProjectReader>,
        employees: Arc<dyn EmployeeReader>,
        shifts: Arc<dyn WorkingShiftReader>,
    ) -> Self {
        Self {
            operations,
            projects,
            employees,
            shifts,
        }
    }

    /// Creates a port set where one store serves every lookup.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: OperationReader + ProjectReader + EmployeeReader + WorkingShiftReader + 'static,
    {
        Self {
            operations: store.clone(),
            projects: store.clone(),
            employees: store.clone(),
            shifts: store,
        }
    }
}
