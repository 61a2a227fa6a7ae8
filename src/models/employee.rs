//! Employee model and its short projection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// An employee who can be assigned operations and take part in working shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EntityId,
    /// Given name.
    pub first_name: String,
    /// Patronymic or middle name, if any.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Family name; used as the employee's label in deadline reports.
    pub last_name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// When the employee was registered in the system.
    pub registered_at: NaiveDateTime,
}

impl Employee {
    /// Returns the `{id, first_name, last_name}` projection of this employee.
    pub fn short_info(&self) -> EmployeeShortInfo {
        EmployeeShortInfo {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// The short identity of an employee listed in period reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeShortInfo {
    /// Unique identifier for the employee.
    pub id: EntityId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}
