//! Working shift participation records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// One employee's participation in one working shift.
///
/// `part_of_shift` is the fraction of the shift the employee worked, in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The working shift this record belongs to.
    pub working_shift_id: EntityId,
    /// The date the shift started.
    pub shift_date: NaiveDate,
    /// The participating employee.
    pub employee_id: EntityId,
    /// Fraction of the shift worked by the employee.
    pub part_of_shift: f64,
}

/// Sum of shift fractions worked by one employee over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTotalParts {
    /// The employee.
    pub employee_id: EntityId,
    /// Total of `part_of_shift` over the period, narrowed to single precision.
    pub total_parts: f32,
}
