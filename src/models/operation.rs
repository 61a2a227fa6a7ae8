//! Operation model.
//!
//! An operation is one unit of work in a project. It always belongs to exactly
//! one project and may be assigned to one employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// The project an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// The project id.
    pub id: EntityId,
    /// The project's business number.
    pub number: u32,
}

/// The employee an operation is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// The employee id.
    pub id: EntityId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// A unit of work belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier for the operation.
    pub id: EntityId,
    /// The operation name (e.g. "Cutting").
    pub name: String,
    /// Position of the operation within its project; lower runs earlier.
    pub priority: u32,
    /// The owning project.
    pub project: ProjectRef,
    /// The assigned employee, if any.
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
    /// When the operation is planned to be finished.
    pub planned_end_date: NaiveDate,
    /// When the operation was actually finished.
    #[serde(default)]
    pub real_end_date: Option<NaiveDate>,
}

impl Operation {
    /// Returns true once a real end date has been recorded.
    pub fn is_ended(&self) -> bool {
        self.real_end_date.is_some()
    }

    /// Returns the id of the assigned employee, if any.
    pub fn employee_id(&self) -> Option<EntityId> {
        self.employee.as_ref().map(|e| e.id)
    }

    /// Returns true if the operation is assigned to `employee_id`.
    pub fn is_assigned_to(&self, employee_id: EntityId) -> bool {
        self.employee_id() == Some(employee_id)
    }
}
