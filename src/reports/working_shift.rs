//! Working shift aggregation over a period.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::ReportResult;
use crate::models::{EmployeeTotalParts, EntityId, ShiftRecord, WorkingShiftReport};
use crate::ports::{EmployeeReader, WorkingShiftReader};

use super::validator::validate_period;

/// Returns the employee ids of `records` without repeats, in order of first appearance.
pub fn distinct_employee_ids(records: &[ShiftRecord]) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.employee_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Sums `part_of_shift` per employee.
///
/// Accumulation happens in `f64`; each total is narrowed to `f32` once, at
/// output. Totals are ordered by ascending employee id.
///
/// ```
/// use chrono::NaiveDate;
/// use production_reports::models::ShiftRecord;
/// use production_reports::reports::total_parts_by_employee;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let record = |employee_id, part_of_shift| ShiftRecord {
///     working_shift_id: 1,
///     shift_date: date,
///     employee_id,
///     part_of_shift,
/// };
///
/// let totals = total_parts_by_employee(&[record(2, 1.0), record(1, 0.5), record(1, 0.5)]);
/// assert_eq!(totals[0].employee_id, 1);
/// assert_eq!(totals[0].total_parts, 1.0);
/// assert_eq!(totals[1].total_parts, 1.0);
/// ```
pub fn total_parts_by_employee(records: &[ShiftRecord]) -> Vec<EmployeeTotalParts> {
    let mut sums: BTreeMap<EntityId, f64> = BTreeMap::new();
    for record in records {
        *sums.entry(record.employee_id).or_insert(0.0) += record.part_of_shift;
    }

    sums.into_iter()
        .map(|(employee_id, total)| EmployeeTotalParts {
            employee_id,
            total_parts: total as f32,
        })
        .collect()
}

/// Builds the working shift report for `start..=end`.
///
/// `employee_ids` restricts the records to those employees; `None` keeps all.
pub fn build_working_shift_report(
    start: NaiveDate,
    end: NaiveDate,
    employee_ids: Option<&BTreeSet<EntityId>>,
    shifts: &dyn WorkingShiftReader,
    employees: &dyn EmployeeReader,
) -> ReportResult<WorkingShiftReport> {
    validate_period(start, end)?;

    let shift_records = shifts.shift_records(start, end, employee_ids)?;
    let ids = distinct_employee_ids(&shift_records);
    debug!(
        records = shift_records.len(),
        employees = ids.len(),
        "Shift records fetched"
    );

    let mut infos: HashMap<EntityId, _> = employees
        .employee_short_info(&ids)?
        .into_iter()
        .map(|info| (info.id, info))
        .collect();

    let employee_list = ids
        .iter()
        .filter_map(|id| {
            let info = infos.remove(id);
            if info.is_none() {
                warn!(employee_id = id, "Employee from shift records not found");
            }
            info
        })
        .collect();

    let total_parts = total_parts_by_employee(&shift_records);

    Ok(WorkingShiftReport {
        start_period: start,
        end_period: end,
        employees: employee_list,
        shift_records,
        total_parts,
    })
}
