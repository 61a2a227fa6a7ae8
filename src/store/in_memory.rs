//! An immutable in-memory implementation of every read port.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{Employee, EmployeeShortInfo, EntityId, Operation, Project, ShiftRecord};
use crate::ports::{EmployeeReader, OperationReader, ProjectReader, WorkingShiftReader};

/// A read store holding employees, projects and shift records in memory.
///
/// The store is built once and never mutated, so it can be shared between
/// request handlers behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: BTreeMap<EntityId, Employee>,
    projects: Vec<Project>,
    operations: BTreeMap<EntityId, Operation>,
    shift_records: Vec<ShiftRecord>,
}

impl InMemoryStore {
    /// Builds a store, checking that the data is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DataIntegrity`] if:
    /// - employee, project or operation ids are duplicated
    /// - an operation's project reference does not point at its owning project
    /// - an operation or shift record references an unknown employee
    /// - a `part_of_shift` lies outside `(0, 1]`
    pub fn new(
        employees: Vec<Employee>,
        projects: Vec<Project>,
        shift_records: Vec<ShiftRecord>,
    ) -> ReportResult<Self> {
        let mut employee_map = BTreeMap::new();
        for employee in employees {
            let id = employee.id;
            if employee_map.insert(id, employee).is_some() {
                return Err(integrity(format!("duplicate employee id {}", id)));
            }
        }

        let mut project_ids = HashSet::new();
        let mut operations = BTreeMap::new();
        for project in &projects {
            if !project_ids.insert(project.id) {
                return Err(integrity(format!("duplicate project id {}", project.id)));
            }
            for op in &project.operations {
                if op.project != project.reference() {
                    return Err(integrity(format!(
                        "operation {} does not reference its project {}",
                        op.id, project.id
                    )));
                }
                if let Some(employee) = &op.employee {
                    if !employee_map.contains_key(&employee.id) {
                        return Err(integrity(format!(
                            "operation {} references unknown employee {}",
                            op.id, employee.id
                        )));
                    }
                }
                if operations.insert(op.id, op.clone()).is_some() {
                    return Err(integrity(format!("duplicate operation id {}", op.id)));
                }
            }
        }

        for record in &shift_records {
            if !employee_map.contains_key(&record.employee_id) {
                return Err(integrity(format!(
                    "working shift {} references unknown employee {}",
                    record.working_shift_id, record.employee_id
                )));
            }
            if !(record.part_of_shift > 0.0 && record.part_of_shift <= 1.0) {
                return Err(integrity(format!(
                    "working shift {} has part_of_shift {} for employee {}, expected (0, 1]",
                    record.working_shift_id, record.part_of_shift, record.employee_id
                )));
            }
        }

        let mut projects = projects;
        projects.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then(a.number.cmp(&b.number))
        });
        for project in &mut projects {
            project.operations.sort_by_key(|o| (o.priority, o.id));
        }

        let mut shift_records = shift_records;
        shift_records.sort_by_key(|r| (r.shift_date, r.working_shift_id, r.employee_id));

        debug!(
            employees = employee_map.len(),
            projects = projects.len(),
            operations = operations.len(),
            shift_records = shift_records.len(),
            "In-memory store built"
        );

        Ok(Self {
            employees: employee_map,
            projects,
            operations,
            shift_records,
        })
    }

    /// Returns all projects ordered by registration time.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the number of operations across all projects.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Returns the number of shift participation records.
    pub fn shift_record_count(&self) -> usize {
        self.shift_records.len()
    }
}

fn integrity(message: String) -> ReportError {
    ReportError::DataIntegrity { message }
}

impl OperationReader for InMemoryStore {
    fn operations_by_ids(&self, ids: &BTreeSet<EntityId>) -> ReportResult<Vec<Operation>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.operations.get(id))
            .cloned()
            .collect())
    }
}

impl ProjectReader for InMemoryStore {
    fn projects_in_range(&self, start: NaiveDate, end: NaiveDate) -> ReportResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.registered_within(start, end))
            .cloned()
            .collect())
    }
}

impl EmployeeReader for InMemoryStore {
    fn employee_short_info(&self, ids: &[EntityId]) -> ReportResult<Vec<EmployeeShortInfo>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.employees.get(id))
            .map(Employee::short_info)
            .collect())
    }
}

impl WorkingShiftReader for InMemoryStore {
    fn shift_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_ids: Option<&BTreeSet<EntityId>>,
    ) -> ReportResult<Vec<ShiftRecord>> {
        Ok(self
            .shift_records
            .iter()
            .filter(|r| r.shift_date >= start && r.shift_date <= end)
            .filter(|r| employee_ids.is_none_or(|ids| ids.contains(&r.employee_id)))
            .cloned()
            .collect())
    }
}
