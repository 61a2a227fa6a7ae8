//! Loading the in-memory store from YAML seed files.
//!
//! # Directory Structure
//!
//! ```text
//! data/seed/
//! ├── employees.yaml       # Employees
//! ├── projects.yaml        # Projects with their operations
//! └── working_shifts.yaml  # Working shifts with per-employee participation
//! ```
//!
//! Operations name their employee by id; the loader resolves those ids into
//! the references carried by [`Operation`].

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use crate::config::load_yaml;
use crate::error::{ReportError, ReportResult};
use crate::models::{Employee, EmployeeRef, EntityId, Operation, Project, ShiftRecord};

use super::in_memory::InMemoryStore;

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<SeedProject>,
}

#[derive(Debug, Deserialize)]
struct SeedProject {
    id: EntityId,
    number: u32,
    name: String,
    customer: String,
    #[serde(default)]
    comment: Option<String>,
    registered_at: NaiveDateTime,
    planned_end_date: NaiveDate,
    #[serde(default)]
    real_end_date: Option<NaiveDate>,
    #[serde(default)]
    operations: Vec<SeedOperation>,
}

#[derive(Debug, Deserialize)]
struct SeedOperation {
    id: EntityId,
    name: String,
    priority: u32,
    #[serde(default)]
    employee_id: Option<EntityId>,
    planned_end_date: NaiveDate,
    #[serde(default)]
    real_end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct WorkingShiftsFile {
    working_shifts: Vec<SeedWorkingShift>,
}

#[derive(Debug, Deserialize)]
struct SeedWorkingShift {
    id: EntityId,
    shift_date: NaiveDate,
    #[serde(default)]
    participants: Vec<SeedParticipant>,
}

#[derive(Debug, Deserialize)]
struct SeedParticipant {
    employee_id: EntityId,
    part_of_shift: f64,
}

/// Loads an [`InMemoryStore`] from a seed directory.
///
/// # Example
///
/// ```no_run
/// use production_reports::store::SeedLoader;
///
/// let store = SeedLoader::load("./data/seed")?;
/// println!("{} projects loaded", store.projects().len());
/// # Ok::<(), production_reports::error::ReportError>(())
/// ```
pub struct SeedLoader;

impl SeedLoader {
    /// Reads the three seed files and builds the store.
    ///
    /// Missing or malformed files surface as `ConfigNotFound` or
    /// `ConfigParseError`; inconsistent data as `DataIntegrity`.
    pub fn load<P: AsRef<Path>>(dir: P) -> ReportResult<InMemoryStore> {
        let dir = dir.as_ref();

        let employees = load_yaml::<EmployeesFile>(&dir.join("employees.yaml"))?.employees;
        let projects = load_yaml::<ProjectsFile>(&dir.join("projects.yaml"))?.projects;
        let shifts = load_yaml::<WorkingShiftsFile>(&dir.join("working_shifts.yaml"))?;

        let by_id: HashMap<EntityId, &Employee> = employees.iter().map(|e| (e.id, e)).collect();

        let projects = projects
            .into_iter()
            .map(|p| build_project(p, &by_id))
            .collect::<ReportResult<Vec<_>>>()?;

        let shift_records: Vec<ShiftRecord> = shifts
            .working_shifts
            .into_iter()
            .flat_map(|shift| {
                shift.participants.into_iter().map(move |p| ShiftRecord {
                    working_shift_id: shift.id,
                    shift_date: shift.shift_date,
                    employee_id: p.employee_id,
                    part_of_shift: p.part_of_shift,
                })
            })
            .collect();

        let store = InMemoryStore::new(employees, projects, shift_records)?;
        info!(
            seed_dir = %dir.display(),
            projects = store.projects().len(),
            operations = store.operation_count(),
            shift_records = store.shift_record_count(),
            "Seed data loaded"
        );
        Ok(store)
    }
}

fn build_project(seed: SeedProject, employees: &HashMap<EntityId, &Employee>) -> ReportResult<Project> {
    let mut project = Project {
        id: seed.id,
        number: seed.number,
        name: seed.name,
        customer: seed.customer,
        comment: seed.comment,
        registered_at: seed.registered_at,
        planned_end_date: seed.planned_end_date,
        real_end_date: seed.real_end_date,
        operations: Vec::with_capacity(seed.operations.len()),
    };
    let reference = project.reference();

    for op in seed.operations {
        let employee = match op.employee_id {
            Some(id) => {
                let employee = employees.get(&id).ok_or_else(|| ReportError::DataIntegrity {
                    message: format!("operation {} references unknown employee {}", op.id, id),
                })?;
                Some(EmployeeRef {
                    id: employee.id,
                    first_name: employee.first_name.clone(),
                    last_name: employee.last_name.clone(),
                })
            }
            None => None,
        };
        project.operations.push(Operation {
            id: op.id,
            name: op.name,
            priority: op.priority,
            project: reference,
            employee,
            planned_end_date: op.planned_end_date,
            real_end_date: op.real_end_date,
        });
    }

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{EmployeeReader, OperationReader};
    use std::collections::BTreeSet;

    #[test]
    fn test_load_shipped_seed() {
        let store = SeedLoader::load("./data/seed").expect("Failed to load seed data");
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.operation_count(), 17);
        let shilov = store.employee_short_info(&[1]).unwrap();
        assert_eq!(shilov[0].last_name, "Shilov");
        assert!(store.shift_record_count() > 0);
    }

    #[test]
    fn test_operations_carry_resolved_references() {
        let store = SeedLoader::load("./data/seed").unwrap();
        let ids: BTreeSet<EntityId> = [1].into_iter().collect();
        let ops = store.operations_by_ids(&ids).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].project.number, 345);
        assert_eq!(
            ops[0].employee.as_ref().map(|e| e.last_name.as_str()),
            Some("Shilov")
        );
    }

    #[test]
    fn test_missing_seed_dir_is_config_not_found() {
        let result = SeedLoader::load("/nonexistent/seed");
        assert!(matches!(result, Err(ReportError::ConfigNotFound { .. })));
    }
}
