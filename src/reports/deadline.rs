//! Deadline cross-reference resolution.
//!
//! Resolves a [`DeadlineRequest`] into a [`DeadlineReport`]:
//! 1. Validate the request (distinct axes, non-empty selectors)
//! 2. Fetch the operations selected by whichever slot holds the `Operation` axis
//! 3. Resolve the first axis against the first fetched operation
//! 4. Build the second-level entries through the rule table in [`super::dispatch`]

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{Axis, DeadlineReport, DeadlineRequest, EntityId, Operation};
use crate::ports::OperationReader;

use super::dispatch::{find_rule, ResolutionContext};
use super::validator::validate_request;

/// Resolves a deadline report.
///
/// # Errors
///
/// - `RepeatedAxes` / `EmptySelector` from validation, before any fetch.
/// - `EmptyResult` if no selected operation exists.
/// - `ProjectMismatch`, `EmployeeMissing`, `EmployeeMismatch` when the request
///   contradicts the fetched operations.
/// - `NotFound` / `NotFoundIn` when a second-axis id has no matching operation,
///   or none within the first-axis entity.
/// - `UnsupportedAxes` for a pairing without a rule.
/// - Any error raised by the read port.
pub fn resolve_deadlines(
    request: &DeadlineRequest,
    operations: &dyn OperationReader,
) -> ReportResult<DeadlineReport> {
    validate_request(request)?;

    let operation_ids = request.operation_ids();
    let mut ops = operations.operations_by_ids(&operation_ids)?;
    ops.sort_by_key(|o| o.id);
    debug!(
        requested = operation_ids.len(),
        fetched = ops.len(),
        "Operations fetched for deadline report"
    );

    let Some(head) = ops.first() else {
        return Err(ReportError::EmptyResult);
    };

    let first_label = resolve_first_axis(
        request.first_parameter,
        request.value_of_first_parameter,
        head,
    )?;

    let rule = find_rule(request.first_parameter, request.second_parameter)
        .filter(|rule| rule.third == request.third_parameter)
        .ok_or(ReportError::UnsupportedAxes {
            first: request.first_parameter,
            second: request.second_parameter,
        })?;

    let ctx = ResolutionContext {
        first_id: request.value_of_first_parameter,
        second_ids: &request.values_of_second_parameter,
        third_ids: &request.values_of_third_parameter,
        operations: &ops,
    };
    let second_values = (rule.handler)(&ctx)?;

    Ok(DeadlineReport {
        first_id: request.value_of_first_parameter,
        first_label,
        second_values,
    })
}

/// Checks the first-axis id against `op` and returns the first-axis label.
fn resolve_first_axis(axis: Axis, first_id: EntityId, op: &Operation) -> ReportResult<String> {
    match axis {
        Axis::Project => {
            if op.project.id != first_id {
                return Err(ReportError::ProjectMismatch {
                    project_id: first_id,
                    operation_id: op.id,
                });
            }
            Ok(op.project.number.to_string())
        }
        Axis::Operation => Ok(op.name.clone()),
        Axis::Employee => {
            let employee = op
                .employee
                .as_ref()
                .ok_or(ReportError::EmployeeMissing { operation_id: op.id })?;
            if employee.id != first_id {
                return Err(ReportError::EmployeeMismatch {
                    operation_id: op.id,
                    employee_id: first_id,
                });
            }
            Ok(employee.last_name.clone())
        }
    }
}
